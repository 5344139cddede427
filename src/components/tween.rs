//! Normalized-progress animation.
//!
//! A [`Tween`] advances a progress value from `0.0` to `1.0` over `duration`
//! seconds, runs it through an [`Easing`] curve and hands the eased value to a
//! consumer callback. That callback is the only way a tween talks to its
//! target; see [`crate::systems::tween`] for ready-made consumers that drive
//! a [`Transform`](super::transform::Transform).
//!
//! # Repeat modes
//!
//! - [`RepeatMode::NoRepeat`] – clamp at `1.0` and complete
//! - [`RepeatMode::Loop`] – wrap to `0.0` and keep going
//! - [`RepeatMode::Bounce`] – play forward, then backward, then pause
//! - [`RepeatMode::BounceLoop`] – alternate direction forever
//! - [`RepeatMode::Pause`] – clamp at `1.0` and pause, ready for [`Tween::start`]
//!
//! Every time the end is reached the completion callback fires once.
//!
//! # Start vs resume
//!
//! [`Tween::start`] always rewinds to `0.0`, runs the on-start hook and
//! un-pauses. [`Tickable::resume`] only un-pauses and keeps the progress.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::math::Easing;
use crate::resources::ticker::{TickState, Tickable};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RepeatMode {
    #[default]
    NoRepeat,
    Loop,
    Bounce,
    BounceLoop,
    Pause,
}

pub struct Tween {
    duration: f64,
    progress: f64,
    state: TickState,
    easing: Easing,
    repeat: RepeatMode,
    is_bouncing: bool,
    on_update: Option<Box<dyn FnMut(f64)>>,
    on_complete: Option<Box<dyn FnMut()>>,
    on_start: Option<Box<dyn FnMut()>>,
}

impl Tween {
    /// A running, linear, non-repeating tween with no consumer.
    pub fn new(duration: f64) -> Self {
        Tween {
            duration,
            progress: 0.0,
            state: TickState::Running,
            easing: Easing::Linear,
            repeat: RepeatMode::NoRepeat,
            is_bouncing: false,
            on_update: None,
            on_complete: None,
            on_start: None,
        }
    }

    pub fn with_ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_repeat(mut self, repeat: RepeatMode) -> Self {
        self.repeat = repeat;
        self
    }

    /// Consumer of the eased value, called on every effective tick.
    pub fn on_update(mut self, f: impl FnMut(f64) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Called each time the tween reaches its end.
    pub fn on_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Called by [`Tween::start`] before the tween begins running.
    pub fn on_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Write the eased value into a shared cell.
    pub fn update_cell(self, cell: Rc<Cell<f64>>) -> Self {
        self.on_update(move |value| cell.set(value))
    }

    /// Create the tween paused.
    pub fn paused(mut self) -> Self {
        self.state = TickState::Paused;
        self
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Raw, un-eased progress.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn state(&self) -> TickState {
        self.state
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// True while playing the reverse leg of a bounce.
    pub fn is_bouncing(&self) -> bool {
        self.is_bouncing
    }

    /// Rewind to the beginning and run, even after completion.
    pub fn start(&mut self) {
        self.progress = 0.0;
        self.is_bouncing = false;
        if let Some(f) = self.on_start.as_mut() {
            f();
        }
        self.state = TickState::Running;
    }

    /// Eased value for the current progress and direction.
    pub fn value(&self) -> f64 {
        if self.is_bouncing {
            self.easing.apply(1.0 - self.progress)
        } else {
            self.easing.apply(self.progress)
        }
    }

    /// Apply the repeat mode once the end was reached.
    fn finish_leg(&mut self) {
        match self.repeat {
            RepeatMode::NoRepeat => {
                self.progress = 1.0;
                self.state = TickState::Complete;
            }
            RepeatMode::Loop => {
                self.progress = 0.0;
            }
            RepeatMode::Bounce => {
                self.is_bouncing = !self.is_bouncing;
                self.progress = 0.0;
                if !self.is_bouncing {
                    self.state = TickState::Paused;
                }
            }
            RepeatMode::BounceLoop => {
                self.is_bouncing = !self.is_bouncing;
                self.progress = 0.0;
            }
            RepeatMode::Pause => {
                self.progress = 1.0;
                self.state = TickState::Paused;
            }
        }
    }
}

impl Tickable for Tween {
    fn resume(&mut self) {
        if self.state == TickState::Paused {
            self.state = TickState::Running;
        }
    }

    fn pause(&mut self) {
        if self.state == TickState::Running {
            self.state = TickState::Paused;
        }
    }

    fn is_paused(&self) -> bool {
        self.state == TickState::Paused
    }

    fn is_complete(&self) -> bool {
        self.state == TickState::Complete
    }

    fn tick(&mut self, elapsed: f64) {
        if self.state != TickState::Running {
            return;
        }

        if self.duration > 0.0 {
            self.progress += elapsed / self.duration;
        } else {
            self.progress = 1.0;
        }

        let reached_end = self.progress >= 1.0;
        if reached_end {
            self.finish_leg();
        }

        let value = self.value();
        if let Some(f) = self.on_update.as_mut() {
            f(value);
        }

        if reached_end
            && let Some(f) = self.on_complete.as_mut()
        {
            f();
        }
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("duration", &self.duration)
            .field("progress", &self.progress)
            .field("state", &self.state)
            .field("easing", &self.easing)
            .field("repeat", &self.repeat)
            .field("is_bouncing", &self.is_bouncing)
            .finish_non_exhaustive()
    }
}
