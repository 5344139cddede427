//! Stretchable image content.
//!
//! [`NineSliceVisual`] cuts an image into a 3x3 grid described by
//! [`SliceBorders`]. When the node is drawn larger or smaller than the image,
//! the corners keep their pixel size, the edges stretch along one axis and
//! the center stretches along both. Typical use is panels and buttons.
//!
//! ```text
//!  left   center   right
//! +-----+--------+-----+  top
//! |     |        |     |
//! +-----+--------+-----+  middle
//! |     |        |     |
//! +-----+--------+-----+  bottom
//! ```

use std::rc::Rc;

use super::content::{Dirtier, Drawer, NativeSizer};
use super::drawlist::{DrawCommand, DrawList, Placement, Rgba};
use super::sprite::ImageHandle;
use super::transform::Transform;
use crate::math::{Bounds, GeoM, Vec2};

/// Column widths and row heights of the source image, in image pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SliceBorders {
    pub left: f64,
    pub center: f64,
    pub right: f64,
    pub top: f64,
    pub middle: f64,
    pub bottom: f64,
}

impl SliceBorders {
    /// Borders for `image`, with the center column and middle row taking
    /// whatever is left between the edges.
    pub fn new(image: &ImageHandle, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        SliceBorders {
            left,
            center: (image.width - left - right).max(0.0),
            right,
            top,
            middle: (image.height - top - bottom).max(0.0),
            bottom,
        }
    }

    /// Same border on all four sides.
    pub fn uniform(image: &ImageHandle, border: f64) -> Self {
        Self::new(image, border, border, border, border)
    }
}

/// One cell of the grid: where it comes from and where it lands, relative
/// to the node's top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slice {
    pub source: Bounds,
    pub dest: Bounds,
}

#[derive(Clone, Debug)]
pub struct NineSliceVisual {
    image: Rc<ImageHandle>,
    borders: SliceBorders,
    width: f64,
    height: f64,
    tint: Rgba,
    is_dirty: bool,
}

impl NineSliceVisual {
    /// Natural size starts as the image size.
    pub fn new(image: Rc<ImageHandle>, borders: SliceBorders) -> Self {
        NineSliceVisual {
            width: image.width,
            height: image.height,
            image,
            borders,
            tint: Rgba::WHITE,
            is_dirty: true,
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_tint(mut self, tint: Rgba) -> Self {
        self.tint = tint;
        self
    }

    pub fn image(&self) -> &Rc<ImageHandle> {
        &self.image
    }

    pub fn borders(&self) -> SliceBorders {
        self.borders
    }

    pub fn set_borders(&mut self, borders: SliceBorders) {
        if self.borders == borders {
            return;
        }
        self.borders = borders;
        self.is_dirty = true;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) {
        if self.width == width {
            return;
        }
        self.width = width;
        self.is_dirty = true;
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
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

    pub fn tint(&self) -> Rgba {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Rgba) {
        self.tint = tint;
    }

    /// Cut a `width` x `height` area into the nine cells, row by row from
    /// the top-left. The center and edges shrink to zero before the corners
    /// do.
    pub fn slices(&self, width: f64, height: f64) -> [Slice; 9] {
        let b = &self.borders;
        let center = (width - b.left - b.right).max(0.0);
        let middle = (height - b.top - b.bottom).max(0.0);

        let src_x = [0.0, b.left, b.left + b.center];
        let src_w = [b.left, b.center, b.right];
        let src_y = [0.0, b.top, b.top + b.middle];
        let src_h = [b.top, b.middle, b.bottom];

        let dst_x = [0.0, b.left, b.left + center];
        let dst_w = [b.left, center, b.right];
        let dst_y = [0.0, b.top, b.top + middle];
        let dst_h = [b.top, middle, b.bottom];

        std::array::from_fn(|i| {
            let (row, col) = (i / 3, i % 3);
            Slice {
                source: Bounds::new(src_x[col], src_y[row], src_w[col], src_h[row]),
                dest: Bounds::new(dst_x[col], dst_y[row], dst_w[col], dst_h[row]),
            }
        })
    }
}

impl Dirtier for NineSliceVisual {
    fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    fn clean(&mut self) {
        self.is_dirty = false;
    }
}

impl NativeSizer for NineSliceVisual {
    fn native_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

/// Placement of one cell. Every cell shares the node's pivot and rotation,
/// so the grid turns as one piece.
fn slice_placement(node: &Placement, slice: &Slice) -> Placement {
    let origin = node.origin - slice.dest.top_left();
    let scale = Vec2::new(
        if slice.source.width != 0.0 { slice.dest.width / slice.source.width } else { 1.0 },
        if slice.source.height != 0.0 { slice.dest.height / slice.source.height } else { 1.0 },
    );

    let mut geom = GeoM::IDENTITY;
    geom.scale(scale.x, scale.y);
    geom.translate(-origin.x, -origin.y);
    if node.rotation != 0.0 {
        geom.rotate(node.rotation);
    }
    geom.translate(node.position.x, node.position.y);

    Placement {
        geom,
        position: node.position,
        size: slice.dest.size(),
        origin,
        rotation: node.rotation,
        scale,
    }
}

impl Drawer<DrawList> for NineSliceVisual {
    fn draw(&self, transform: &Transform, dest: &mut DrawList) {
        let node = Placement::from_transform(transform);
        for slice in self.slices(node.size.x, node.size.y) {
            dest.push(DrawCommand::Image {
                placement: slice_placement(&node, &slice),
                image: self.image.key.clone(),
                source: slice.source,
                tint: self.tint,
            });
        }
    }
}
