//! Four-sided values.
//!
//! [`Sides`] holds one number per rectangle edge. Transforms use two of them:
//! normalized edge anchors inside the parent rectangle and absolute edge
//! offsets from those anchors. When `left == right` (or `top == bottom`) the
//! axis is pinned to a single anchor point; otherwise it stretches.

use serde::{Deserialize, Serialize};

/// One edge of a rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub bottom: f64,
}

impl Sides {
    pub const ZERO: Sides = Sides::new(0.0, 0.0, 0.0, 0.0);

    pub const STRETCH_HORIZONTAL: Sides = Sides::new(0.0, 1.0, 0.0, 0.0);
    pub const STRETCH_VERTICAL: Sides = Sides::new(0.0, 0.0, 0.0, 1.0);
    pub const STRETCH_BOTH: Sides = Sides::new(0.0, 1.0, 0.0, 1.0);

    pub const TOP_LEFT: Sides = Sides::ZERO;
    pub const TOP_CENTER: Sides = Sides::new(0.5, 0.5, 0.0, 0.0);
    pub const TOP_RIGHT: Sides = Sides::new(1.0, 1.0, 0.0, 0.0);
    pub const MIDDLE_LEFT: Sides = Sides::new(0.0, 0.0, 0.5, 0.5);
    pub const MIDDLE_CENTER: Sides = Sides::new(0.5, 0.5, 0.5, 0.5);
    pub const MIDDLE_RIGHT: Sides = Sides::new(1.0, 1.0, 0.5, 0.5);
    pub const BOTTOM_LEFT: Sides = Sides::new(0.0, 0.0, 1.0, 1.0);
    pub const BOTTOM_CENTER: Sides = Sides::new(0.5, 0.5, 1.0, 1.0);
    pub const BOTTOM_RIGHT: Sides = Sides::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Sides {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same value on every edge.
    pub const fn all(value: f64) -> Self {
        Sides::new(value, value, value, value)
    }

    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    pub fn set(&mut self, side: Side, value: f64) {
        match side {
            Side::Left => self.left = value,
            Side::Right => self.right = value,
            Side::Top => self.top = value,
            Side::Bottom => self.bottom = value,
        }
    }

    pub fn stretches_horizontally(&self) -> bool {
        self.left != self.right
    }

    pub fn stretches_vertically(&self) -> bool {
        self.top != self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_by_side() {
        let mut s = Sides::ZERO;
        s.set(Side::Right, 1.0);
        s.set(Side::Bottom, 0.5);
        assert_eq!(s.get(Side::Right), 1.0);
        assert_eq!(s.get(Side::Bottom), 0.5);
        assert_eq!(s.get(Side::Left), 0.0);
    }

    #[test]
    fn test_stretch_detection() {
        assert!(Sides::STRETCH_BOTH.stretches_horizontally());
        assert!(Sides::STRETCH_BOTH.stretches_vertically());
        assert!(!Sides::MIDDLE_CENTER.stretches_horizontally());
        assert!(Sides::STRETCH_VERTICAL.stretches_vertically());
        assert!(!Sides::STRETCH_VERTICAL.stretches_horizontally());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let s: Sides = serde_json::from_str(r#"{"right": 1.0, "bottom": 1.0}"#).unwrap();
        assert_eq!(s, Sides::STRETCH_BOTH);
    }
}
