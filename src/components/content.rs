//! Content capabilities carried by scene nodes.
//!
//! A [`Visualer`](super::visualer::Visualer) does not know what it draws. It
//! holds one boxed content object and talks to it through three small
//! capabilities:
//!
//! - [`Dirtier`] – does the content need to be re-measured
//! - [`NativeSizer`] – intrinsic size of the content
//! - [`Drawer`] – emit the content into a draw destination
//!
//! [`Visual`] bundles all three together with downcasting, and is implemented
//! automatically for every type that provides the capabilities.
//!
//! Stock content lives here ([`EmptyVisual`], [`RectVisual`]) and in the
//! [`sprite`](super::sprite), [`nineslice`](super::nineslice) and
//! [`label`](super::label) modules.

use std::any::Any;

use super::drawlist::{DrawCommand, DrawList, Placement, Rgba};
use super::transform::Transform;

/// Tracks whether content changed since it was last measured.
pub trait Dirtier {
    fn is_dirty(&self) -> bool;
    fn clean(&mut self);
}

/// Reports the intrinsic `(width, height)` of content.
pub trait NativeSizer {
    fn native_size(&self) -> (f64, f64);
}

/// Renders content into a destination of type `D`.
///
/// `transform` is the owning node's transform, already built for this frame.
pub trait Drawer<D> {
    fn draw(&self, transform: &Transform, dest: &mut D);
}

/// Everything a scene node needs from its content.
pub trait Visual<D>: Dirtier + NativeSizer + Drawer<D> + Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<D, T> Visual<D> for T
where
    T: Dirtier + NativeSizer + Drawer<D> + Any,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Content that draws nothing. Used for grouping nodes.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyVisual;

impl Dirtier for EmptyVisual {
    fn is_dirty(&self) -> bool {
        false
    }

    fn clean(&mut self) {}
}

impl NativeSizer for EmptyVisual {
    fn native_size(&self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

impl<D> Drawer<D> for EmptyVisual {
    fn draw(&self, _transform: &Transform, _dest: &mut D) {}
}

/// A solid rectangle filling the node's resolved size.
#[derive(Clone, Debug)]
pub struct RectVisual {
    color: Rgba,
    width: f64,
    height: f64,
    is_dirty: bool,
}

impl RectVisual {
    pub fn new(color: Rgba, width: f64, height: f64) -> Self {
        RectVisual {
            color,
            width,
            height,
            is_dirty: true,
        }
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Color changes do not affect layout, so they never dirty.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn set_natural_size(&mut self, width: f64, height: f64) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.is_dirty = true;
    }
}

impl Dirtier for RectVisual {
    fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    fn clean(&mut self) {
        self.is_dirty = false;
    }
}

impl NativeSizer for RectVisual {
    fn native_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

impl Drawer<DrawList> for RectVisual {
    fn draw(&self, transform: &Transform, dest: &mut DrawList) {
        dest.push(DrawCommand::Rect {
            placement: Placement::from_transform(transform),
            color: self.color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_visual_is_never_dirty() {
        let mut e = EmptyVisual;
        assert!(!e.is_dirty());
        e.clean();
        assert_eq!(e.native_size(), (0.0, 0.0));
    }

    #[test]
    fn test_rect_visual_dirty_only_on_size_change() {
        let mut r = RectVisual::new(Rgba::WHITE, 10.0, 10.0);
        assert!(r.is_dirty(), "new content starts dirty");
        r.clean();
        r.set_natural_size(10.0, 10.0);
        assert!(!r.is_dirty());
        r.set_color(Rgba::RED);
        assert!(!r.is_dirty());
        r.set_natural_size(20.0, 10.0);
        assert!(r.is_dirty());
        assert_eq!(r.native_size(), (20.0, 10.0));
    }

    #[test]
    fn test_rect_visual_draws_one_command() {
        let r = RectVisual::new(Rgba::RED, 4.0, 4.0);
        let mut t = Transform::new().with_size(4.0, 4.0);
        t.build(None);
        let mut list = DrawList::new();
        Drawer::<DrawList>::draw(&r, &t, &mut list);
        assert_eq!(list.len(), 1);
        match &list.commands()[0] {
            DrawCommand::Rect { color, .. } => assert_eq!(*color, Rgba::RED),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_downcast_through_visual() {
        let boxed: Box<dyn Visual<DrawList>> = Box::new(RectVisual::new(Rgba::BLACK, 1.0, 1.0));
        assert!(boxed.as_any().downcast_ref::<RectVisual>().is_some());
        assert!(boxed.as_any().downcast_ref::<EmptyVisual>().is_none());
    }
}
