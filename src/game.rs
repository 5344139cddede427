//! Scene stack and frame driver.
//!
//! A [`Game`] owns a stack of [`Scene`]s plus a [`GameContext`] holding the
//! shared frame state: [`GameTime`], [`GameConfig`] and the scene commands
//! requested during the frame. There is no global game object; the driver
//! (see `main.rs`) constructs one `Game` and calls it every frame:
//!
//! 1. [`Game::update`] ticks time, updates the top scene, then applies the
//!    push/pop requests the scene queued on the context
//! 2. [`Game::draw`] draws every scene from the bottom of the stack up
//!
//! Scene changes are deferred so that a scene never disappears from under
//! its own `update` call.

use log::{debug, warn};

use crate::resources::gameconfig::GameConfig;
use crate::resources::gametime::GameTime;

/// One screen of the game, e.g. a menu or a level.
///
/// `D` is the draw destination, usually a
/// [`DrawList`](crate::components::drawlist::DrawList).
pub trait Scene<D> {
    /// Advance the scene by one frame. Typically ticks a
    /// [`Ticker`](crate::resources::ticker::Ticker) with `ctx.time.delta` and
    /// lays out the scene's visual tree.
    fn update(&mut self, ctx: &mut GameContext<D>);

    fn draw(&mut self, dest: &mut D);

    /// Called once when the scene is popped or the game shuts down.
    fn dispose(&mut self) {}

    /// Name used in log messages.
    fn name(&self) -> &str {
        "scene"
    }
}

enum SceneCommand<D> {
    Push(Box<dyn Scene<D>>),
    Pop,
}

/// Whether the driver should keep running.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameFlow {
    Continue,
    Exit,
}

/// Frame state handed to the active scene.
pub struct GameContext<D> {
    pub time: GameTime,
    pub config: GameConfig,
    commands: Vec<SceneCommand<D>>,
    exit: bool,
}

impl<D> GameContext<D> {
    fn new(config: GameConfig) -> Self {
        GameContext {
            time: GameTime::new(config.time_scale, config.max_delta),
            config,
            commands: Vec::new(),
            exit: false,
        }
    }

    /// Push `scene` on top of the stack once the current update finishes.
    pub fn push_scene(&mut self, scene: impl Scene<D> + 'static) {
        self.commands.push(SceneCommand::Push(Box::new(scene)));
    }

    /// Pop the top scene once the current update finishes.
    pub fn pop_scene(&mut self) {
        self.commands.push(SceneCommand::Pop);
    }

    /// Ask the driver to stop after this frame.
    pub fn exit(&mut self) {
        self.exit = true;
    }

    pub fn is_exiting(&self) -> bool {
        self.exit
    }

    /// Scene commands waiting for the end of the update.
    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }
}

pub struct Game<D> {
    ctx: GameContext<D>,
    scenes: Vec<Box<dyn Scene<D>>>,
}

impl<D> Game<D> {
    pub fn new(config: GameConfig) -> Self {
        Game {
            ctx: GameContext::new(config),
            scenes: Vec::new(),
        }
    }

    pub fn context(&self) -> &GameContext<D> {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut GameContext<D> {
        &mut self.ctx
    }

    /// Push a scene immediately.
    pub fn push(&mut self, scene: impl Scene<D> + 'static) {
        self.push_boxed(Box::new(scene));
    }

    fn push_boxed(&mut self, scene: Box<dyn Scene<D>>) {
        debug!("push scene '{}' (depth {})", scene.name(), self.scenes.len() + 1);
        self.scenes.push(scene);
    }

    /// Pop and dispose the top scene immediately. Returns `false` if the stack
    /// was empty.
    pub fn pop(&mut self) -> bool {
        match self.scenes.pop() {
            Some(mut scene) => {
                debug!("pop scene '{}' (depth {})", scene.name(), self.scenes.len());
                scene.dispose();
                true
            }
            None => {
                warn!("pop on an empty scene stack");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn exit(&mut self) {
        self.ctx.exit();
    }

    /// Run one frame of `dt` unscaled seconds.
    ///
    /// Slow frames (see [`GameTime::is_slow`]) skip the scene update. Only
    /// the top scene is updated. An empty stack ends the game.
    pub fn update(&mut self, dt: f64) -> GameFlow {
        self.ctx.time.tick(dt);

        if self.ctx.time.is_slow() {
            warn!(
                "slow frame ({:.3}s > {:.3}s), skipping scene update",
                self.ctx.time.raw_delta, self.ctx.time.max_delta
            );
        } else if let Some(top) = self.scenes.last_mut() {
            top.update(&mut self.ctx);
        }

        for command in std::mem::take(&mut self.ctx.commands) {
            match command {
                SceneCommand::Push(scene) => self.push_boxed(scene),
                SceneCommand::Pop => {
                    self.pop();
                }
            }
        }

        if self.ctx.exit {
            return GameFlow::Exit;
        }
        if self.scenes.is_empty() {
            warn!("scene stack is empty, exiting");
            return GameFlow::Exit;
        }
        GameFlow::Continue
    }

    /// Draw every scene, bottom of the stack first.
    pub fn draw(&mut self, dest: &mut D) {
        for scene in &mut self.scenes {
            scene.draw(dest);
        }
    }
}

impl<D> Drop for Game<D> {
    fn drop(&mut self) {
        while let Some(mut scene) = self.scenes.pop() {
            scene.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Records every call; runs `on_update` against the context.
    struct Recorder {
        name: &'static str,
        log: Log,
        on_update: Option<Box<dyn FnMut(&mut GameContext<Vec<String>>)>>,
    }

    impl Recorder {
        fn new(name: &'static str, log: &Log) -> Self {
            Recorder {
                name,
                log: log.clone(),
                on_update: None,
            }
        }

        fn with_update(mut self, f: impl FnMut(&mut GameContext<Vec<String>>) + 'static) -> Self {
            self.on_update = Some(Box::new(f));
            self
        }
    }

    impl Scene<Vec<String>> for Recorder {
        fn update(&mut self, ctx: &mut GameContext<Vec<String>>) {
            self.log.borrow_mut().push(format!("update {}", self.name));
            if let Some(f) = self.on_update.as_mut() {
                f(ctx);
            }
        }

        fn draw(&mut self, dest: &mut Vec<String>) {
            dest.push(self.name.to_string());
        }

        fn dispose(&mut self) {
            self.log.borrow_mut().push(format!("dispose {}", self.name));
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn game() -> Game<Vec<String>> {
        Game::new(GameConfig::new())
    }

    #[test]
    fn test_only_top_scene_updates_all_scenes_draw() {
        let log = Log::default();
        let mut g = game();
        g.push(Recorder::new("bottom", &log));
        g.push(Recorder::new("top", &log));
        assert_eq!(g.update(0.016), GameFlow::Continue);
        assert_eq!(*log.borrow(), vec!["update top".to_string()]);

        let mut drawn = Vec::new();
        g.draw(&mut drawn);
        assert_eq!(drawn, vec!["bottom".to_string(), "top".to_string()]);
    }

    #[test]
    fn test_push_is_applied_after_update() {
        let log = Log::default();
        let mut g = game();
        let inner = log.clone();
        g.push(Recorder::new("menu", &log).with_update(move |ctx| {
            ctx.push_scene(Recorder::new("level", &inner));
            assert_eq!(ctx.pending_commands(), 1);
        }));
        g.update(0.016);
        assert_eq!(g.len(), 2);
        assert_eq!(*log.borrow(), vec!["update menu".to_string()]);

        g.update(0.016);
        assert_eq!(log.borrow().last().map(String::as_str), Some("update level"));
    }

    #[test]
    fn test_pop_disposes_scene() {
        let log = Log::default();
        let mut g = game();
        g.push(Recorder::new("base", &log));
        g.push(Recorder::new("pause", &log).with_update(|ctx| ctx.pop_scene()));
        assert_eq!(g.update(0.016), GameFlow::Continue);
        assert_eq!(g.len(), 1);
        assert_eq!(
            *log.borrow(),
            vec!["update pause".to_string(), "dispose pause".to_string()]
        );
    }

    #[test]
    fn test_empty_stack_exits() {
        let log = Log::default();
        let mut g = game();
        g.push(Recorder::new("only", &log).with_update(|ctx| ctx.pop_scene()));
        assert_eq!(g.update(0.016), GameFlow::Exit);
        assert!(g.is_empty());
        assert!(!g.pop());
    }

    #[test]
    fn test_exit_request() {
        let log = Log::default();
        let mut g = game();
        g.push(Recorder::new("only", &log).with_update(|ctx| ctx.exit()));
        assert_eq!(g.update(0.016), GameFlow::Exit);
        assert!(g.context().is_exiting());
    }

    #[test]
    fn test_slow_frame_skips_update_but_ticks_time() {
        let log = Log::default();
        let mut g = game();
        g.push(Recorder::new("only", &log));
        let max = g.context().time.max_delta;
        assert_eq!(g.update(max * 2.0), GameFlow::Continue);
        assert!(log.borrow().is_empty());
        assert_eq!(g.context().time.frame_count, 1);
    }

    #[test]
    fn test_drop_disposes_remaining_scenes_top_down() {
        let log = Log::default();
        {
            let mut g = game();
            g.push(Recorder::new("a", &log));
            g.push(Recorder::new("b", &log));
        }
        assert_eq!(
            *log.borrow(),
            vec!["dispose b".to_string(), "dispose a".to_string()]
        );
    }
}
