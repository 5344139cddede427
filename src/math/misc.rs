//! Scalar helpers.
//!
//! All angles are in radians.

use std::f64::consts::{PI, TAU};

/// Linear interpolation; `percent` is not clamped.
pub fn lerp(start: f64, end: f64, percent: f64) -> f64 {
    start + (end - start) * percent
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// `1.0` for strictly positive values, `-1.0` otherwise (zero included).
pub fn sign(value: f64) -> f64 {
    if value > 0.0 { 1.0 } else { -1.0 }
}

/// Wrap `value` into `[0, length]`.
pub fn repeat(value: f64, length: f64) -> f64 {
    clamp(value - (value / length).floor() * length, 0.0, length)
}

/// Wrap an angle into `(-PI, PI]`.
pub fn bind_angle(angle: f64) -> f64 {
    let mut bound = repeat(angle, TAU);
    if bound > PI {
        bound -= TAU;
    }
    bound
}

/// Shortest signed difference between two angles.
pub fn delta_angle(current: f64, target: f64) -> f64 {
    bind_angle(target - current)
}

/// Move `current` towards `target` by at most `max_delta`.
pub fn move_towards(current: f64, target: f64, max_delta: f64) -> f64 {
    if (target - current).abs() <= max_delta {
        return target;
    }
    current + sign(target - current) * max_delta
}

/// Rotate `current` towards `target` by at most `max_delta`, taking the short
/// way across the `PI`/`-PI` seam.
pub fn rotate_towards(current: f64, target: f64, max_delta: f64) -> f64 {
    let delta = delta_angle(current, target);
    if delta > -max_delta && delta < max_delta {
        return target;
    }
    bind_angle(move_towards(current, current + delta, max_delta))
}
