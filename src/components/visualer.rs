//! Retained scene graph node.
//!
//! A [`Visualer`] owns a shared [`Transform`], one boxed content object and an
//! ordered list of child nodes. Destroying a node destroys its subtree.
//!
//! Each frame runs two separate passes over the tree:
//!
//! 1. [`Visualer::layout`] – invalidation and geometry. Dirty flags and
//!    visibility only ever flow downwards. Transforms are rebuilt only where
//!    something changed, and subtrees whose node falls outside the root view
//!    are not visited at all. Nodes without area (grouping nodes) are never
//!    culled.
//! 2. [`Visualer::draw`] – forwards every visible, in-view node to its
//!    content's [`Drawer`](super::content::Drawer). Parents draw before their
//!    children, children in insertion order. Draw never touches layout state.
//!
//! The transform is shared (`Rc<RefCell<_>>`) so that tweens can drive it
//! between frames. Do not hold a borrow of any transform in the tree while a
//! layout pass runs.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;

use super::content::Visual;
use super::transform::Transform;

pub struct Visualer<D> {
    transform: Rc<RefCell<Transform>>,
    content: Box<dyn Visual<D>>,
    parent: Weak<RefCell<Transform>>,
    children: Vec<Visualer<D>>,

    visible: bool,
    now_visible: bool,
    forced_dirty: bool,
    forced_transform_dirty: bool,
    in_view: bool,
}

impl<D> Visualer<D> {
    /// A hidden node with a fresh transform.
    pub fn new(content: impl Visual<D>) -> Self {
        Self::with_transform(content, Transform::new())
    }

    pub fn with_transform(content: impl Visual<D>, transform: Transform) -> Self {
        Visualer {
            transform: Rc::new(RefCell::new(transform)),
            content: Box::new(content),
            parent: Weak::new(),
            children: Vec::new(),
            visible: false,
            now_visible: false,
            forced_dirty: false,
            forced_transform_dirty: false,
            in_view: false,
        }
    }

    /// Builder form of [`Visualer::insert_child`].
    pub fn with_child(mut self, child: Visualer<D>) -> Self {
        self.insert_child(child);
        self
    }

    /// Builder form of [`Visualer::set_visible`].
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.set_visible(visible);
        self
    }

    // ==================== TREE ====================

    /// Append a child and return its index.
    pub fn insert_child(&mut self, mut child: Visualer<D>) -> usize {
        child.parent = Rc::downgrade(&self.transform);
        self.children.push(child);
        self.children.len() - 1
    }

    /// Detach the child at `index`. Returns `None` when out of range.
    pub fn remove_child(&mut self, index: usize) -> Option<Visualer<D>> {
        if index >= self.children.len() {
            return None;
        }
        let mut child = self.children.remove(index);
        child.parent = Weak::new();
        Some(child)
    }

    pub fn children(&self) -> &[Visualer<D>] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Visualer<D>> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Visualer<D>> {
        self.children.get_mut(index)
    }

    /// The parent's transform, if this node is attached and the parent lives.
    pub fn parent_transform(&self) -> Option<Rc<RefCell<Transform>>> {
        self.parent.upgrade()
    }

    // ==================== STATE ====================

    /// Shared handle to this node's transform.
    pub fn transform(&self) -> Rc<RefCell<Transform>> {
        Rc::clone(&self.transform)
    }

    /// Borrow the transform for reading.
    pub fn transform_ref(&self) -> Ref<'_, Transform> {
        self.transform.borrow()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Turning a hidden node on forces a rebuild of it and its whole subtree
    /// on the next layout pass.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if visible {
            self.now_visible = true;
        }
    }

    /// Whether the last layout pass found this node inside the root view.
    pub fn is_in_view(&self) -> bool {
        self.in_view
    }

    pub fn content<T: 'static>(&self) -> Option<&T>
    where
        D: 'static,
    {
        self.content.as_any().downcast_ref::<T>()
    }

    pub fn content_mut<T: 'static>(&mut self) -> Option<&mut T>
    where
        D: 'static,
    {
        self.content.as_any_mut().downcast_mut::<T>()
    }

    // ==================== PASSES ====================

    /// Propagate invalidation and rebuild geometry.
    ///
    /// `root` is the view used for culling, usually a
    /// [`Transform::viewport`]. It must not be a transform inside this tree.
    /// `parent` is the transform that edge anchors resolve against; pass
    /// `None` for the top node.
    pub fn layout(&mut self, root: &Transform, parent: Option<&Transform>) {
        if !self.visible {
            return;
        }

        // a node already built off-screen with nothing pending stays culled
        // without touching its content
        if !self.now_visible && !self.forced_dirty && !self.forced_transform_dirty {
            let transform = self.transform.borrow();
            if !transform.is_dirty() && !overlaps_view(root, &transform) {
                self.in_view = false;
                return;
            }
        }

        if self.now_visible {
            for child in &mut self.children {
                child.visible = true;
                child.now_visible = true;
            }
        }

        if self.transform.borrow().is_dirty() || self.forced_transform_dirty {
            self.forced_transform_dirty = true;
            for child in &mut self.children {
                child.forced_transform_dirty = true;
            }
        }

        let content_dirty = self.content.is_dirty();
        if content_dirty || self.forced_dirty {
            self.forced_dirty = true;
            for child in &mut self.children {
                child.forced_dirty = true;
            }
        }

        if content_dirty {
            let (w, h) = self.content.native_size();
            self.transform.borrow_mut().set_natural_size(w, h);
            self.content.clean();
        }

        if self.now_visible || self.forced_dirty || self.forced_transform_dirty {
            let mut transform = self.transform.borrow_mut();
            transform.build(parent);
            transform.clean();
        }

        let transform = self.transform.borrow();
        self.in_view = overlaps_view(root, &transform);
        if self.in_view {
            for child in &mut self.children {
                child.layout(root, Some(&transform));
            }
        } else {
            debug!("culled node at {:?}", transform.bounds());
        }
        drop(transform);

        self.now_visible = false;
        self.forced_dirty = false;
        self.forced_transform_dirty = false;
    }

    /// Emit this node and its visible subtree into `dest`.
    pub fn draw(&self, dest: &mut D) {
        if !self.visible || !self.in_view {
            return;
        }

        self.content.draw(&self.transform.borrow(), dest);

        for child in &self.children {
            child.draw(dest);
        }
    }
}

/// Zero-area nodes, such as grouping nodes, are never culled.
fn overlaps_view(root: &Transform, transform: &Transform) -> bool {
    let bounds = transform.bounds();
    bounds.width <= 0.0 || bounds.height <= 0.0 || root.in_view(transform)
}

impl<D> fmt::Debug for Visualer<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visualer")
            .field("transform", &self.transform)
            .field("visible", &self.visible)
            .field("in_view", &self.in_view)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}
