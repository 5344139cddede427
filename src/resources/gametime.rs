//! Frame timing.
//!
//! [`GameTime`] is advanced once per frame by [`Game::update`] with the raw
//! frame delta. It applies `time_scale`, accumulates elapsed game time and
//! flags frames that took longer than `max_delta`.
//!
//! [`Game::update`]: crate::game::Game::update

/// Default upper bound for a frame delta before it is treated as a hitch.
pub const DEFAULT_MAX_DELTA: f64 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameTime {
    /// Scaled seconds since the game started.
    pub elapsed: f64,
    /// Scaled seconds of the current frame.
    pub delta: f64,
    /// Unscaled seconds of the current frame.
    pub raw_delta: f64,
    /// Multiplier applied to every raw delta.
    pub time_scale: f64,
    /// Raw deltas above this are slow frames.
    pub max_delta: f64,
    pub frame_count: u64,
}

impl Default for GameTime {
    fn default() -> Self {
        GameTime {
            elapsed: 0.0,
            delta: 0.0,
            raw_delta: 0.0,
            time_scale: 1.0,
            max_delta: DEFAULT_MAX_DELTA,
            frame_count: 0,
        }
    }
}

impl GameTime {
    pub fn new(time_scale: f64, max_delta: f64) -> Self {
        GameTime {
            time_scale,
            max_delta,
            ..Default::default()
        }
    }

    /// Advance by one frame of `dt` unscaled seconds. Negative deltas count
    /// as zero.
    pub fn tick(&mut self, dt: f64) {
        let dt = dt.max(0.0);
        let scaled = dt * self.time_scale;
        self.raw_delta = dt;
        self.delta = scaled;
        self.elapsed += scaled;
        self.frame_count += 1;
    }

    /// True when the current frame took longer than `max_delta`.
    pub fn is_slow(&self) -> bool {
        self.raw_delta > self.max_delta
    }
}
