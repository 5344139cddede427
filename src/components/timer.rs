//! Countdown timer driven by elapsed game time.

use crate::resources::ticker::{TickState, Tickable};

/// What a timer does once it runs out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TimerRepeat {
    /// Fire once and complete.
    #[default]
    NoRepeat,
    /// Fire, reset the counter and keep running.
    Repeats,
}

/// Counts elapsed seconds and fires a callback when `duration` is reached.
///
/// Timers start running.
pub struct Timer {
    duration: f64,
    elapsed: f64,
    state: TickState,
    repeat: TimerRepeat,
    on_complete: Option<Box<dyn FnMut()>>,
}

impl Timer {
    pub fn new(duration: f64) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            state: TickState::Running,
            repeat: TimerRepeat::NoRepeat,
            on_complete: None,
        }
    }

    pub fn with_repeat(mut self, repeat: TimerRepeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn on_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Create the timer paused.
    pub fn paused(mut self) -> Self {
        self.state = TickState::Paused;
        self
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn state(&self) -> TickState {
        self.state
    }

    /// Seconds left before the timer fires, never negative.
    pub fn remaining(&self) -> f64 {
        (self.duration - self.elapsed).max(0.0)
    }

    /// Restart the countdown and run again, even after completion.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.state = TickState::Running;
    }
}

impl Tickable for Timer {
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

        self.elapsed += elapsed;
        if self.elapsed < self.duration {
            return;
        }

        if let Some(f) = self.on_complete.as_mut() {
            f();
        }

        match self.repeat {
            TimerRepeat::NoRepeat => self.state = TickState::Complete,
            TimerRepeat::Repeats => self.elapsed = 0.0,
        }
    }
}
