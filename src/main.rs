//! floe demo entry point.
//!
//! Opens a raylib window and runs a single scene that exercises the engine:
//!
//! - a tree of [`Visualer`] nodes laid out against the window
//! - rectangles spun and bobbed by tweens grouped in an [`AnimationClip`]
//! - a sprite pinned to the bottom-right corner that pulses in size
//! - labels whose text and fade are driven by a [`Timer`] and a value tween
//! - an [`Fsm`] switching between the intro, playing and paused phases
//!
//! # Main Loop
//!
//! 1. Read the keys the scene cares about
//! 2. [`Game::update`] ticks time, the scene's ticker and its layout pass
//! 3. [`Game::draw`] records the frame into a [`DrawList`]
//! 4. The raylib backend replays the list
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib -- --width 1024 --height 600
//! ```
//!
//! Keys: `SPACE` pause/resume, `R` restart the animation, `ESC` quit.

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::cell::Cell;
use std::f64::consts::TAU;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;
use log::{error, info};
use raylib::prelude::*;

use floe::backend::raylib::{FontStore, ImageStore, replay};
use floe::components::animationclip::AnimationClip;
use floe::components::content::{EmptyVisual, RectVisual};
use floe::components::drawlist::{DrawList, Rgba};
use floe::components::fsm::{Fsm, FsmTransition};
use floe::components::label::{FontFace, LabelVisual};
use floe::components::nineslice::{NineSliceVisual, SliceBorders};
use floe::components::sprite::{ImageHandle, SpriteVisual};
use floe::components::timer::{Timer, TimerRepeat};
use floe::components::transform::Transform;
use floe::components::tween::RepeatMode;
use floe::components::visualer::Visualer;
use floe::game::{Game, GameContext, GameFlow, Scene};
use floe::math::{Easing, Sides, Vec2};
use floe::resources::gameconfig::GameConfig;
use floe::resources::ticker::Ticker;
use floe::systems::tween::{height_tween, position_tween, rotation_tween, value_tween, width_tween};

const BOX_COUNT: usize = 24;
const INTRO_SECONDS: f64 = 1.5;

/// floe 2D engine demo
#[derive(Parser)]
#[command(version, about = "Scene graph, layout and tweening demo for the floe engine.")]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the window width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the window height.
    #[arg(long)]
    height: Option<u32>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,

    /// Seed for box placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the first frame's draw list as JSON to PATH.
    #[arg(long, value_name = "PATH")]
    dump_frame: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Phase {
    Intro,
    Playing,
    Paused,
}

/// Keys pressed this frame, written by the main loop.
#[derive(Copy, Clone, Debug, Default)]
struct Input {
    toggle_pause: bool,
    restart: bool,
    quit: bool,
}

struct DemoScene {
    view: Transform,
    root: Visualer<DrawList>,
    ticker: Ticker,
    phase: Fsm<Phase>,
    clip: Rc<AnimationClip>,
    input: Rc<Cell<Input>>,
    intro_done: Rc<Cell<bool>>,
    seconds: Rc<Cell<u32>>,
    title_alpha: Rc<Cell<f64>>,
    title: usize,
    status: usize,
}

impl DemoScene {
    fn new(
        config: &GameConfig,
        input: Rc<Cell<Input>>,
        checker: Rc<ImageHandle>,
        font: Rc<FontFace>,
        rng: &mut fastrand::Rng,
    ) -> Self {
        let (w, h) = (config.window_width as f64, config.window_height as f64);
        let mut ticker = Ticker::new();
        let mut root = Visualer::with_transform(EmptyVisual, Transform::new().with_size(w, h))
            .with_visible(true);
        let mut tweens = Vec::new();

        for _ in 0..BOX_COUNT {
            let size = rng.f64() * 32.0 + 16.0;
            let position = Vec2::new(rng.f64() * (w - 80.0) + 40.0, rng.f64() * (h - 200.0) + 100.0);
            let color = Rgba::new(rng.u8(..200), rng.u8(..200), rng.u8(..200), 255);
            let node = Visualer::with_transform(
                RectVisual::new(color, size, size),
                Transform::new()
                    .with_position(position)
                    .with_size(size, size)
                    .with_anchor(Vec2::MIDDLE_CENTER),
            );
            let t = node.transform();
            tweens.push(
                rotation_tween(&t, 0.0, TAU, rng.f64() * 2.0 + 1.0, false)
                    .with_repeat(RepeatMode::Loop),
            );
            let bob = Vec2::new(0.0, rng.f64() * 60.0 - 30.0);
            tweens.push(
                position_tween(&t, position, position + bob, 1.5, false)
                    .with_ease(Easing::SineInOut)
                    .with_repeat(RepeatMode::BounceLoop),
            );
            root.insert_child(node);
        }

        let borders = SliceBorders::uniform(&checker, 8.0);
        root.insert_child(Visualer::with_transform(
            NineSliceVisual::new(checker.clone(), borders).with_tint(Rgba::WHITE.with_alpha(160)),
            Transform::new()
                .with_edge_anchors(Sides::BOTTOM_LEFT)
                .with_anchor(Vec2::BOTTOM_LEFT)
                .with_position(Vec2::new(8.0, -8.0))
                .with_size(240.0, 40.0),
        ));

        let sprite = Visualer::with_transform(
            SpriteVisual::new(checker),
            Transform::new()
                .with_edge_anchors(Sides::BOTTOM_RIGHT)
                .with_anchor(Vec2::BOTTOM_RIGHT)
                .with_position(Vec2::new(-16.0, -16.0))
                .with_size(64.0, 64.0),
        );
        let t = sprite.transform();
        tweens.push(
            width_tween(&t, 64.0, 96.0, 0.8)
                .with_ease(Easing::BackOut)
                .with_repeat(RepeatMode::BounceLoop),
        );
        tweens.push(
            height_tween(&t, 64.0, 96.0, 0.8)
                .with_ease(Easing::BackOut)
                .with_repeat(RepeatMode::BounceLoop),
        );
        root.insert_child(sprite);

        let title = root.insert_child(Visualer::with_transform(
            LabelVisual::new(font.clone(), "floe").with_color(Rgba::BLACK.with_alpha(0)),
            Transform::new()
                .with_edge_anchors(Sides::TOP_CENTER)
                .with_anchor(Vec2::TOP_CENTER)
                .with_position(Vec2::new(0.0, 16.0))
                .with_auto_size(),
        ));
        let status = root.insert_child(Visualer::with_transform(
            LabelVisual::new(font.clone(), "").with_color(Rgba::GRAY),
            Transform::new()
                .with_edge_anchors(Sides::BOTTOM_LEFT)
                .with_anchor(Vec2::BOTTOM_LEFT)
                .with_position(Vec2::new(16.0, -16.0))
                .with_auto_size(),
        ));
        root.insert_child(Visualer::with_transform(
            LabelVisual::new(font, "SPACE pause   R restart   ESC quit").with_color(Rgba::GRAY),
            Transform::new()
                .with_edge_anchors(Sides::TOP_RIGHT)
                .with_anchor(Vec2::TOP_RIGHT)
                .with_position(Vec2::new(-16.0, 16.0))
                .with_auto_size(),
        ));

        let clip = Rc::new(AnimationClip::new(&mut ticker, tweens));

        let title_alpha = Rc::new(Cell::new(0.0));
        ticker.spawn(
            value_tween(title_alpha.clone(), 0.0, 255.0, INTRO_SECONDS).with_ease(Easing::QuadOut),
        );

        let intro_done = Rc::new(Cell::new(false));
        let flag = intro_done.clone();
        ticker.spawn(Timer::new(INTRO_SECONDS).on_complete(move || flag.set(true)));

        let seconds = Rc::new(Cell::new(0));
        let counter = seconds.clone();
        ticker.spawn(
            Timer::new(1.0)
                .with_repeat(TimerRepeat::Repeats)
                .on_complete(move || counter.set(counter.get() + 1)),
        );

        let mut phase = Fsm::new(
            Phase::Intro,
            [
                FsmTransition::new(Phase::Intro, [Phase::Playing]),
                FsmTransition::new(Phase::Playing, [Phase::Paused]),
                FsmTransition::new(Phase::Paused, [Phase::Playing]),
            ],
        );
        let c = clip.clone();
        phase.on_enter(Phase::Playing, move |_| c.resume());
        let c = clip.clone();
        phase.on_enter(Phase::Paused, move |_| c.pause());
        phase.on_exit(Phase::Intro, |_| info!("Intro finished"));

        DemoScene {
            view: Transform::viewport(w, h),
            root,
            ticker,
            phase,
            clip,
            input,
            intro_done,
            seconds,
            title_alpha,
            title,
            status,
        }
    }

    fn label_mut(&mut self, index: usize) -> Option<&mut LabelVisual> {
        self.root
            .child_mut(index)
            .and_then(|node| node.content_mut::<LabelVisual>())
    }
}

impl Scene<DrawList> for DemoScene {
    fn update(&mut self, ctx: &mut GameContext<DrawList>) {
        let input = self.input.take();
        if input.quit {
            ctx.exit();
            return;
        }

        if self.intro_done.get() && *self.phase.current() == Phase::Intro {
            self.phase.transition(Phase::Playing);
        }
        if input.toggle_pause {
            match *self.phase.current() {
                Phase::Playing => self.phase.transition(Phase::Paused),
                Phase::Paused => self.phase.transition(Phase::Playing),
                Phase::Intro => false,
            };
        }
        if input.restart && *self.phase.current() != Phase::Intro {
            self.clip.start(&mut self.ticker);
            self.phase.transition(Phase::Playing);
        }

        self.ticker.tick(ctx.time.delta);

        let text = format!(
            "{:?} | {}s | {} tickers | frame {}",
            self.phase.current(),
            self.seconds.get(),
            self.ticker.len(),
            ctx.time.frame_count
        );
        if let Some(status) = self.label_mut(self.status) {
            status.set_text(text);
        }
        let alpha = self.title_alpha.get().clamp(0.0, 255.0) as u8;
        if let Some(title) = self.label_mut(self.title) {
            title.set_color(Rgba::BLACK.with_alpha(alpha));
        }

        self.root.layout(&self.view, None);
    }

    fn draw(&mut self, dest: &mut DrawList) {
        self.root.draw(dest);
    }

    fn dispose(&mut self) {
        self.ticker.clear();
        info!("Demo scene disposed");
    }

    fn name(&self) -> &str {
        "demo"
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        info!("{}, using defaults", e);
    }
    if let Some(width) = cli.width {
        config.window_width = width;
    }
    if let Some(height) = cli.height {
        config.window_height = height;
    }

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path().display());
        return;
    }

    info!("Hello, world! This is the floe demo!");
    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    // ESC is handled by the scene
    rl.set_exit_key(None);

    let mut images = ImageStore::new();
    let mut fonts = FontStore::new();

    let checker = Image::gen_image_checked(64, 64, 8, 8, Color::DARKGRAY, Color::LIGHTGRAY);
    let checker = match images.load_from_image(&mut rl, &thread, "checker", &checker) {
        Ok(handle) => handle,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let font = fonts.builtin(&rl, "default", 20.0);

    // --------------- Game + scene ---------------
    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let input = Rc::new(Cell::new(Input::default()));
    let scene = DemoScene::new(&config, input.clone(), checker, font, &mut rng);
    let mut game = Game::new(config);
    game.push(scene);

    // --------------- Main loop ---------------
    let mut list = DrawList::new();
    let mut dump_frame = cli.dump_frame;
    while !rl.window_should_close() {
        input.set(Input {
            toggle_pause: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
            restart: rl.is_key_pressed(KeyboardKey::KEY_R),
            quit: rl.is_key_pressed(KeyboardKey::KEY_ESCAPE),
        });

        let flow = game.update(rl.get_frame_time() as f64);
        game.draw(&mut list);

        if let Some(path) = dump_frame.take() {
            match list.to_json() {
                Ok(json) => match std::fs::write(&path, json) {
                    Ok(()) => info!("Wrote {} draw commands to {}", list.len(), path.display()),
                    Err(e) => error!("Failed to write {}: {}", path.display(), e),
                },
                Err(e) => error!("{e}"),
            }
        }

        {
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::RAYWHITE);
            replay(&mut d, &mut list, &images, &fonts);
        }

        if flow == GameFlow::Exit {
            break;
        }
    }
}
