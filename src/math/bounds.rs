//! Axis-aligned rectangle.
//!
//! All predicates are strict: touching an edge is neither containment nor
//! overlap.

use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Bounds {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True if the point lies strictly inside.
    pub fn contains(&self, p: Vec2) -> bool {
        self.x < p.x && p.x < self.right() && self.y < p.y && p.y < self.bottom()
    }

    /// True if we overlap the other bounds even partially.
    pub fn overlaps(&self, o: &Bounds) -> bool {
        self.x < o.right() && o.x < self.right() && self.y < o.bottom() && o.y < self.bottom()
    }

    /// True if we lie entirely inside the other bounds.
    pub fn inside(&self, o: &Bounds) -> bool {
        self.x > o.x && self.right() < o.right() && self.y > o.y && self.bottom() < o.bottom()
    }

    /// True if we entirely surround the other bounds.
    pub fn surrounds(&self, o: &Bounds) -> bool {
        self.x < o.x && self.right() > o.right() && self.y < o.y && self.bottom() > o.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn us() -> Bounds {
        Bounds::new(10.0, 10.0, 25.0, 25.0)
    }

    // ==================== CONTAINS ====================

    #[test]
    fn test_contains_outside_points() {
        assert!(!us().contains(Vec2::new(0.0, 20.0)), "left");
        assert!(!us().contains(Vec2::new(55.0, 20.0)), "right");
        assert!(!us().contains(Vec2::new(20.0, 0.0)), "above");
        assert!(!us().contains(Vec2::new(20.0, 55.0)), "below");
    }

    #[test]
    fn test_contains_is_strict_on_edges() {
        assert!(!us().contains(Vec2::new(10.0, 20.0)));
        assert!(!us().contains(Vec2::new(35.0, 40.0)));
        assert!(!us().contains(Vec2::new(35.0, 35.0)));
    }

    #[test]
    fn test_contains_inside_point() {
        assert!(us().contains(Vec2::new(17.0, 18.0)));
    }

    // ==================== OVERLAPS ====================

    #[test]
    fn test_overlaps() {
        assert!(!us().overlaps(&Bounds::new(2.0, 2.0, 8.0, 8.0)), "disjoint");
        assert!(us().overlaps(&Bounds::new(30.0, 30.0, 25.0, 25.0)), "partial");
        assert!(us().overlaps(&Bounds::new(12.0, 15.0, 6.0, 6.0)), "inside");
    }

    #[test]
    fn test_overlaps_touching_edge_is_not_overlap() {
        assert!(!us().overlaps(&Bounds::new(35.0, 10.0, 5.0, 5.0)));
        assert!(!us().overlaps(&Bounds::new(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_sized_bounds_never_overlap() {
        assert!(!us().overlaps(&Bounds::new(20.0, 20.0, 0.0, 0.0)));
    }

    // ==================== INSIDE / SURROUNDS ====================

    #[test]
    fn test_inside() {
        assert!(!us().inside(&Bounds::new(2.0, 2.0, 8.0, 8.0)));
        assert!(!us().inside(&Bounds::new(30.0, 30.0, 25.0, 25.0)));
        assert!(Bounds::new(12.0, 15.0, 6.0, 6.0).inside(&us()));
    }

    #[test]
    fn test_surrounds() {
        assert!(!Bounds::new(2.0, 2.0, 8.0, 8.0).surrounds(&Bounds::new(15.0, 15.0, 25.0, 25.0)));
        assert!(!Bounds::new(30.0, 30.0, 25.0, 25.0).surrounds(&us()));
        assert!(Bounds::new(5.0, 7.0, 35.0, 52.0).surrounds(&Bounds::new(12.0, 15.0, 6.0, 6.0)));
    }

    #[test]
    fn test_right_bottom() {
        assert_eq!(us().right(), 35.0);
        assert_eq!(us().bottom(), 35.0);
    }
}
