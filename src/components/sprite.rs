//! Image content for scene nodes.
//!
//! [`SpriteVisual`] draws an already-loaded image identified by an
//! [`ImageHandle`]. Its natural size is the image size, so the node's
//! transform scales the image to whatever drawn size layout resolves.

use std::rc::Rc;

use super::content::{Dirtier, Drawer, NativeSizer};
use super::drawlist::{DrawCommand, DrawList, Placement, Rgba};
use super::transform::Transform;
use crate::math::{Bounds, Vec2};

/// A decoded image owned by the rendering backend.
///
/// The core only needs a key to name it in draw commands and its pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageHandle {
    pub key: String,
    pub width: f64,
    pub height: f64,
}

impl ImageHandle {
    pub fn new(key: impl Into<String>, width: f64, height: f64) -> Self {
        ImageHandle {
            key: key.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Clone, Debug)]
pub struct SpriteVisual {
    image: Rc<ImageHandle>,
    tint: Rgba,
    is_dirty: bool,
}

impl SpriteVisual {
    pub fn new(image: Rc<ImageHandle>) -> Self {
        SpriteVisual {
            image,
            tint: Rgba::WHITE,
            is_dirty: true,
        }
    }

    pub fn with_tint(mut self, tint: Rgba) -> Self {
        self.tint = tint;
        self
    }

    pub fn image(&self) -> &Rc<ImageHandle> {
        &self.image
    }

    /// Swap the image. Swapping to the same handle is a no-op.
    pub fn set_image(&mut self, image: Rc<ImageHandle>) {
        if Rc::ptr_eq(&self.image, &image) {
            return;
        }
        self.image = image;
        self.is_dirty = true;
    }

    pub fn tint(&self) -> Rgba {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Rgba) {
        self.tint = tint;
    }
}

impl Dirtier for SpriteVisual {
    fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    fn clean(&mut self) {
        self.is_dirty = false;
    }
}

impl NativeSizer for SpriteVisual {
    fn native_size(&self) -> (f64, f64) {
        (self.image.width, self.image.height)
    }
}

impl Drawer<DrawList> for SpriteVisual {
    fn draw(&self, transform: &Transform, dest: &mut DrawList) {
        dest.push(DrawCommand::Image {
            placement: Placement::from_transform(transform),
            image: self.image.key.clone(),
            source: Bounds::new(0.0, 0.0, self.image.width, self.image.height),
            tint: self.tint,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_size_is_image_size() {
        let s = SpriteVisual::new(Rc::new(ImageHandle::new("ship", 32.0, 16.0)));
        assert_eq!(s.native_size(), (32.0, 16.0));
        assert!(s.is_dirty());
    }

    #[test]
    fn test_set_same_image_does_not_dirty() {
        let ship = Rc::new(ImageHandle::new("ship", 32.0, 16.0));
        let mut s = SpriteVisual::new(ship.clone());
        s.clean();
        s.set_image(ship);
        assert!(!s.is_dirty());

        s.set_image(Rc::new(ImageHandle::new("rock", 8.0, 8.0)));
        assert!(s.is_dirty());
        assert_eq!(s.native_size(), (8.0, 8.0));
    }

    #[test]
    fn test_draw_emits_image_command() {
        let s = SpriteVisual::new(Rc::new(ImageHandle::new("ship", 32.0, 16.0)))
            .with_tint(Rgba::GREEN);
        let mut t = Transform::new().with_size(64.0, 32.0);
        t.set_natural_size(32.0, 16.0);
        t.build(None);
        let mut list = DrawList::new();
        s.draw(&t, &mut list);
        match &list.commands()[0] {
            DrawCommand::Image {
                image,
                source,
                tint,
                placement,
            } => {
                assert_eq!(image, "ship");
                assert_eq!(*source, Bounds::new(0.0, 0.0, 32.0, 16.0));
                assert_eq!(*tint, Rgba::GREEN);
                assert_eq!(placement.scale, Vec2::new(2.0, 2.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
