//! Local placement of a scene node.
//!
//! A [`Transform`] stores where a node sits relative to its parent: position,
//! rotation, pivot anchor, drawn size and the natural size of its content. It
//! can also be constrained to the parent rectangle through four-sided edge
//! anchors and offsets.
//!
//! # Dirty tracking
//!
//! Every setter compares the new value with the stored one and only marks the
//! transform dirty when something actually changed. Layout relies on this to
//! skip untouched subtrees, so setting the same value twice must stay free.
//!
//! The draw matrix, world position, resolved size and bounds are caches. They
//! are only valid after [`Transform::build`] ran following the last mutation.
//! `build` itself never checks the dirty flag; callers gate it.
//!
//! # Edge anchors
//!
//! Edge anchors are normalized positions inside the parent bounds. When
//! `left == right` the horizontal axis is pinned: the node keeps its own width
//! and its position is measured from the anchor point. When they differ the
//! axis stretches between the two anchor points, shrunk inwards by the edge
//! offsets, and the node's own width is ignored. The vertical axis works the
//! same way with `top` and `bottom`.

use crate::math::{Bounds, GeoM, Side, Sides, Vec2};

#[derive(Clone, Debug)]
pub struct Transform {
    position: Vec2,
    rotation: f64,
    anchor: Vec2,
    width: f64,
    height: f64,
    natural_width: f64,
    natural_height: f64,
    edge_anchors: Sides,
    edge_offsets: Sides,
    fixed_offset: f64,
    draw_from_bottom: bool,
    auto_size: bool,

    world: Vec2,
    resolved_width: f64,
    resolved_height: f64,
    bounds: Bounds,
    geom: GeoM,
    is_dirty: bool,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// A transform at the origin with zero size. Transforms start dirty.
    pub fn new() -> Self {
        Transform {
            position: Vec2::ZERO,
            rotation: 0.0,
            anchor: Vec2::TOP_LEFT,
            width: 0.0,
            height: 0.0,
            natural_width: 0.0,
            natural_height: 0.0,
            edge_anchors: Sides::ZERO,
            edge_offsets: Sides::ZERO,
            fixed_offset: 0.0,
            draw_from_bottom: false,
            auto_size: false,
            world: Vec2::ZERO,
            resolved_width: 0.0,
            resolved_height: 0.0,
            bounds: Bounds::default(),
            geom: GeoM::IDENTITY,
            is_dirty: true,
        }
    }

    /// A built, clean transform covering `(0, 0, width, height)`.
    ///
    /// Used as the root view that layout culls against.
    pub fn viewport(width: f64, height: f64) -> Self {
        let mut t = Transform::new().with_size(width, height);
        t.build(None);
        t.clean();
        t
    }

    // ==================== BUILDERS ====================

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.set_position(position);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.set_size(width, height);
        self
    }

    pub fn with_anchor(mut self, anchor: Vec2) -> Self {
        self.set_anchor(anchor);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.set_rotation(rotation);
        self
    }

    pub fn with_edge_anchors(mut self, anchors: Sides) -> Self {
        self.set_edge_anchors(anchors);
        self
    }

    pub fn with_edge_offsets(mut self, offsets: Sides) -> Self {
        self.set_edge_offsets(offsets);
        self
    }

    /// Keep width and height equal to the natural size whenever it changes.
    pub fn with_auto_size(mut self) -> Self {
        self.set_auto_size(true);
        self
    }

    // ==================== GETTERS ====================

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Normalized pivot that the node is positioned and rotated around.
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn natural_width(&self) -> f64 {
        self.natural_width
    }

    pub fn natural_height(&self) -> f64 {
        self.natural_height
    }

    pub fn natural_size(&self) -> (f64, f64) {
        (self.natural_width, self.natural_height)
    }

    pub fn edge_anchors(&self) -> Sides {
        self.edge_anchors
    }

    pub fn edge_offsets(&self) -> Sides {
        self.edge_offsets
    }

    pub fn fixed_offset(&self) -> f64 {
        self.fixed_offset
    }

    pub fn draw_from_bottom(&self) -> bool {
        self.draw_from_bottom
    }

    pub fn auto_size(&self) -> bool {
        self.auto_size
    }

    /// World position of the pivot, as of the last build.
    pub fn world_position(&self) -> Vec2 {
        self.world
    }

    /// Size after edge anchors were resolved, as of the last build.
    pub fn resolved_size(&self) -> (f64, f64) {
        (self.resolved_width, self.resolved_height)
    }

    /// Axis-aligned bounds as of the last build. Rotation is ignored.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn geom(&self) -> GeoM {
        self.geom
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn clean(&mut self) {
        self.is_dirty = false;
    }

    /// True if our bounds overlap the other transform's bounds.
    pub fn in_view(&self, other: &Transform) -> bool {
        self.bounds.overlaps(&other.bounds)
    }

    // ==================== SETTERS ====================

    pub fn set_x(&mut self, x: f64) {
        if self.position.x == x {
            return;
        }
        self.position.x = x;
        self.is_dirty = true;
    }

    pub fn set_y(&mut self, y: f64) {
        if self.position.y == y {
            return;
        }
        self.position.y = y;
        self.is_dirty = true;
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.set_x(position.x);
        self.set_y(position.y);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        if self.rotation == rotation {
            return;
        }
        self.rotation = rotation;
        self.is_dirty = true;
    }

    pub fn set_anchor(&mut self, anchor: Vec2) {
        if self.anchor == anchor {
            return;
        }
        self.anchor = anchor;
        self.is_dirty = true;
    }

    /// Negative widths are clamped to zero.
    pub fn set_width(&mut self, width: f64) {
        let width = width.max(0.0);
        if self.width == width {
            return;
        }
        self.width = width;
        self.is_dirty = true;
    }

    /// Negative heights are clamped to zero.
    pub fn set_height(&mut self, height: f64) {
        let height = height.max(0.0);
        if self.height == height {
            return;
        }
        self.height = height;
        self.is_dirty = true;
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.set_width(width);
        self.set_height(height);
    }

    pub fn set_natural_width(&mut self, natural_width: f64) {
        if self.natural_width == natural_width {
            return;
        }
        self.natural_width = natural_width;
        self.is_dirty = true;
    }

    pub fn set_natural_height(&mut self, natural_height: f64) {
        if self.natural_height == natural_height {
            return;
        }
        self.natural_height = natural_height;
        self.is_dirty = true;
    }

    /// Update the natural size. With auto-size on, the drawn size follows.
    pub fn set_natural_size(&mut self, width: f64, height: f64) {
        self.set_natural_width(width);
        self.set_natural_height(height);
        if self.auto_size {
            self.reset_scale();
        }
    }

    pub fn set_auto_size(&mut self, auto_size: bool) {
        if self.auto_size == auto_size {
            return;
        }
        self.auto_size = auto_size;
        if auto_size {
            self.reset_scale();
        }
    }

    pub fn set_edge_anchors(&mut self, anchors: Sides) {
        if self.edge_anchors == anchors {
            return;
        }
        self.edge_anchors = anchors;
        self.is_dirty = true;
    }

    pub fn set_edge_offsets(&mut self, offsets: Sides) {
        if self.edge_offsets == offsets {
            return;
        }
        self.edge_offsets = offsets;
        self.is_dirty = true;
    }

    pub fn set_edge_anchor(&mut self, side: Side, value: f64) {
        if self.edge_anchors.get(side) == value {
            return;
        }
        self.edge_anchors.set(side, value);
        self.is_dirty = true;
    }

    pub fn set_edge_offset(&mut self, side: Side, value: f64) {
        if self.edge_offsets.get(side) == value {
            return;
        }
        self.edge_offsets.set(side, value);
        self.is_dirty = true;
    }

    /// Extra vertical shift applied before rotation, e.g. a font ascent.
    pub fn set_fixed_offset(&mut self, offset: f64) {
        if self.fixed_offset == offset {
            return;
        }
        self.fixed_offset = offset;
        self.is_dirty = true;
    }

    /// Content whose origin is its bottom edge, like baseline text.
    pub fn set_draw_from_bottom(&mut self, draw_from_bottom: bool) {
        if self.draw_from_bottom == draw_from_bottom {
            return;
        }
        self.draw_from_bottom = draw_from_bottom;
        self.is_dirty = true;
    }

    /// Set width and height back to the natural size.
    pub fn reset_scale(&mut self) {
        if self.width == self.natural_width && self.height == self.natural_height {
            return;
        }
        self.width = self.natural_width;
        self.height = self.natural_height;
        self.is_dirty = true;
    }

    pub fn translate(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.position = self.position + delta;
        self.is_dirty = true;
    }

    pub fn translate_x(&mut self, x: f64) {
        if x == 0.0 {
            return;
        }
        self.position.x += x;
        self.is_dirty = true;
    }

    pub fn translate_y(&mut self, y: f64) {
        if y == 0.0 {
            return;
        }
        self.position.y += y;
        self.is_dirty = true;
    }

    // ==================== BUILD ====================

    /// Recompute the draw matrix and bounds.
    ///
    /// With a parent, edge anchors are resolved against the parent's built
    /// bounds. Without one, the local position is the world position.
    pub fn build(&mut self, parent: Option<&Transform>) {
        let (x, w) = resolve_axis(
            parent.map(|p| (p.bounds.x, p.bounds.width)),
            self.position.x,
            self.width,
            self.anchor.x,
            (self.edge_anchors.left, self.edge_anchors.right),
            (self.edge_offsets.left, self.edge_offsets.right),
        );
        let (y, h) = resolve_axis(
            parent.map(|p| (p.bounds.y, p.bounds.height)),
            self.position.y,
            self.height,
            self.anchor.y,
            (self.edge_anchors.top, self.edge_anchors.bottom),
            (self.edge_offsets.top, self.edge_offsets.bottom),
        );
        self.world = Vec2::new(x, y);
        self.resolved_width = w;
        self.resolved_height = h;

        self.geom.reset();

        let (nw, nh) = (self.natural_width, self.natural_height);
        if (w != nw || h != nh) && nw != 0.0 && nh != 0.0 {
            self.geom.scale(w / nw, h / nh);
        }

        let bottom = if self.draw_from_bottom { 1.0 } else { 0.0 };
        self.geom.translate(
            -w * self.anchor.x,
            -h * (self.anchor.y - bottom) + self.fixed_offset,
        );

        if self.rotation != 0.0 {
            self.geom.rotate(self.rotation);
        }

        self.geom.translate(x, y);

        self.bounds = Bounds::new(x - w * self.anchor.x, y - h * self.anchor.y, w, h);
    }
}

/// Resolve one axis to `(world pivot, size)`.
fn resolve_axis(
    parent: Option<(f64, f64)>,
    position: f64,
    size: f64,
    pivot: f64,
    (anchor_min, anchor_max): (f64, f64),
    (offset_min, offset_max): (f64, f64),
) -> (f64, f64) {
    let Some((origin, extent)) = parent else {
        return (position, size);
    };

    if anchor_min == anchor_max {
        return (origin + extent * anchor_min + position, size);
    }

    let min = origin + extent * anchor_min + offset_min;
    let max = origin + extent * anchor_max - offset_max;
    let size = (max - min).max(0.0);
    (min + size * pivot, size)
}
