//! Immutable 2D vector.
//!
//! Every operation returns a new value. Equality is exact, there is no
//! epsilon comparison anywhere in this type.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::misc::lerp;

/// A 2D vector or point in `f64`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    // Nine standard anchor points.
    pub const TOP_LEFT: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const TOP_CENTER: Vec2 = Vec2 { x: 0.5, y: 0.0 };
    pub const TOP_RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const MIDDLE_LEFT: Vec2 = Vec2 { x: 0.0, y: 0.5 };
    pub const MIDDLE_CENTER: Vec2 = Vec2 { x: 0.5, y: 0.5 };
    pub const MIDDLE_RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.5 };
    pub const BOTTOM_LEFT: Vec2 = Vec2 { x: 0.0, y: 1.0 };
    pub const BOTTOM_CENTER: Vec2 = Vec2 { x: 0.5, y: 1.0 };
    pub const BOTTOM_RIGHT: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vec2 { x: cos, y: sin }
    }

    pub fn add_scalar(self, scalar: f64) -> Self {
        Vec2::new(self.x + scalar, self.y + scalar)
    }

    pub fn sub_scalar(self, scalar: f64) -> Self {
        Vec2::new(self.x - scalar, self.y - scalar)
    }

    pub fn mul_scalar(self, scalar: f64) -> Self {
        Vec2::new(self.x * scalar, self.y * scalar)
    }

    pub fn div_scalar(self, scalar: f64) -> Self {
        Vec2::new(self.x / scalar, self.y / scalar)
    }

    /// A vector of length 1 in the same direction, or zero for the zero vector.
    pub fn unit(self) -> Self {
        let mag = self.mag();
        if mag == 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.x / mag, self.y / mag)
    }

    pub fn mag(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn sqr_mag(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn dist(self, other: Vec2) -> f64 {
        self.sqr_dist(other).sqrt()
    }

    pub fn sqr_dist(self, other: Vec2) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    /// Angle of the vector in radians.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// The vector rotated by 90 degrees.
    pub fn normal(self) -> Self {
        Vec2::new(-self.y, self.x)
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Component product difference `x*ox - y*oy`.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.x - self.y * other.y
    }

    pub fn xy(self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Apply `f` to both components.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Vec2::new(f(self.x), f(self.y))
    }

    /// Linear interpolation between `start` and `end`; `percent` is not clamped.
    pub fn lerp(start: Vec2, end: Vec2, percent: f64) -> Self {
        Vec2::new(
            lerp(start.x, end.x, percent),
            lerp(start.y, end.y, percent),
        )
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul for Vec2 {
    type Output = Vec2;
    fn mul(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x * other.x, self.y * other.y)
    }
}

impl Div for Vec2 {
    type Output = Vec2;
    fn div(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x / other.x, self.y / other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, scalar: f64) -> Vec2 {
        self.mul_scalar(scalar)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
