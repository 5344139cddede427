//! Integration tests for the visual tree: layout, culling, visibility and draw.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test visualer_integration
//! ```

use std::cell::Cell;
use std::rc::Rc;

use floe::components::content::{Dirtier, Drawer, EmptyVisual, NativeSizer};
use floe::components::transform::Transform;
use floe::components::visualer::Visualer;
use floe::math::{Sides, Vec2};
use floe::resources::ticker::Ticker;
use floe::systems::tween::position_tween;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

type Frame = Vec<&'static str>;

/// Content that counts how often layout polls its native size.
struct Tracked {
    name: &'static str,
    size: (f64, f64),
    dirty: bool,
    polls: Rc<Cell<u32>>,
}

impl Tracked {
    fn new(name: &'static str, w: f64, h: f64) -> (Self, Rc<Cell<u32>>) {
        let polls = Rc::new(Cell::new(0));
        let content = Tracked {
            name,
            size: (w, h),
            dirty: true,
            polls: polls.clone(),
        };
        (content, polls)
    }

    fn resize(&mut self, w: f64, h: f64) {
        self.size = (w, h);
        self.dirty = true;
    }
}

impl Dirtier for Tracked {
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn clean(&mut self) {
        self.dirty = false;
    }
}

impl NativeSizer for Tracked {
    fn native_size(&self) -> (f64, f64) {
        self.polls.set(self.polls.get() + 1);
        self.size
    }
}

impl Drawer<Frame> for Tracked {
    fn draw(&self, _transform: &Transform, dest: &mut Frame) {
        dest.push(self.name);
    }
}

fn node(name: &'static str, x: f64, y: f64, w: f64, h: f64) -> (Visualer<Frame>, Rc<Cell<u32>>) {
    let (content, polls) = Tracked::new(name, w, h);
    let v = Visualer::with_transform(
        content,
        Transform::new()
            .with_position(Vec2::new(x, y))
            .with_size(w, h),
    );
    (v, polls)
}

fn screen() -> Transform {
    Transform::viewport(100.0, 100.0)
}

fn frame(root: &Visualer<Frame>) -> Frame {
    let mut out = Vec::new();
    root.draw(&mut out);
    out
}

// ==================== CULLING ====================

#[test]
fn test_offscreen_subtree_is_never_polled() {
    let view = screen();
    let (root, _) = node("root", 0.0, 0.0, 100.0, 100.0);
    let (mut far, far_polls) = node("far", 500.0, 500.0, 10.0, 10.0);
    let (leaf, leaf_polls) = node("leaf", 0.0, 0.0, 5.0, 5.0);
    let leaf_transform = leaf.transform();
    far.insert_child(leaf);
    let mut root = root.with_child(far).with_visible(true);

    root.layout(&view, None);

    // the culled node itself is still built, its subtree is not
    assert_eq!(far_polls.get(), 1);
    assert_eq!(leaf_polls.get(), 0);
    assert!(leaf_transform.borrow().is_dirty());
    let far = root.child(0).unwrap();
    assert!(!far.is_in_view());
    assert!(far.visible());
    assert_eq!(frame(&root), vec!["root"]);
}

#[test]
fn test_culled_subtree_is_laid_out_once_back_in_view() {
    let view = screen();
    let (mut far, _) = node("far", 500.0, 500.0, 10.0, 10.0);
    let (leaf, leaf_polls) = node("leaf", 2.0, 3.0, 5.0, 5.0);
    let leaf_transform = leaf.transform();
    far.insert_child(leaf);
    let (root, _) = node("root", 0.0, 0.0, 100.0, 100.0);
    let mut root = root.with_child(far).with_visible(true);

    root.layout(&view, None);
    root.child(0)
        .unwrap()
        .transform()
        .borrow_mut()
        .set_position(Vec2::new(10.0, 10.0));
    root.layout(&view, None);

    assert_eq!(leaf_polls.get(), 1);
    let leaf = leaf_transform.borrow();
    assert!(!leaf.is_dirty());
    // pinned to the parent's top-left
    assert_eq!(leaf.world_position(), Vec2::new(12.0, 13.0));
    drop(leaf);
    assert_eq!(frame(&root), vec!["root", "far", "leaf"]);
}

#[test]
fn test_clean_offscreen_node_is_not_polled_again() {
    let view = screen();
    let (root, _) = node("root", 0.0, 0.0, 100.0, 100.0);
    let (far, far_polls) = node("far", 500.0, 500.0, 10.0, 10.0);
    let mut root = root.with_child(far).with_visible(true);
    root.layout(&view, None);
    assert_eq!(far_polls.get(), 1);

    // content changes while off-screen stay pending
    if let Some(content) = root.child_mut(0).unwrap().content_mut::<Tracked>() {
        content.resize(20.0, 20.0);
    }
    root.layout(&view, None);
    root.layout(&view, None);
    assert_eq!(far_polls.get(), 1);
    let far = root.child(0).unwrap();
    assert!(far.content::<Tracked>().unwrap().is_dirty());
    assert!(!far.is_in_view());

    far.transform().borrow_mut().set_position(Vec2::new(50.0, 50.0));
    root.layout(&view, None);
    assert_eq!(far_polls.get(), 2);
    assert_eq!(root.child(0).unwrap().transform_ref().natural_size(), (20.0, 20.0));
    assert_eq!(frame(&root), vec!["root", "far"]);
}

#[test]
fn test_group_node_without_area_keeps_subtree() {
    let view = screen();
    let (root, _) = node("root", 0.0, 0.0, 100.0, 100.0);
    let (leaf, leaf_polls) = node("leaf", 20.0, 20.0, 10.0, 10.0);
    let group = Visualer::new(EmptyVisual).with_child(leaf);
    let mut root = root.with_child(group).with_visible(true);

    root.layout(&view, None);

    let group = root.child(0).unwrap();
    assert!(group.is_in_view());
    assert_eq!(group.transform_ref().bounds().size(), Vec2::ZERO);
    assert_eq!(leaf_polls.get(), 1);
    assert!(group.child(0).unwrap().is_in_view());
    assert_eq!(frame(&root), vec!["root", "leaf"]);
}

#[test]
fn test_edge_touching_node_is_culled() {
    let view = screen();
    let (root, _) = node("root", 0.0, 0.0, 100.0, 100.0);
    let (edge, _) = node("edge", 100.0, 0.0, 10.0, 10.0);
    let (inside, _) = node("inside", 90.0, 0.0, 10.0, 10.0);
    let mut root = root.with_child(edge).with_child(inside).with_visible(true);

    root.layout(&view, None);

    assert!(!root.child(0).unwrap().is_in_view());
    assert!(root.child(1).unwrap().is_in_view());
    assert_eq!(frame(&root), vec!["root", "inside"]);
}

// ==================== VISIBILITY ====================

#[test]
fn test_showing_parent_shows_subtree() {
    let view = screen();
    let (root, _) = node("root", 0.0, 0.0, 100.0, 100.0);
    let (a, _) = node("a", 0.0, 0.0, 10.0, 10.0);
    let (b, _) = node("b", 20.0, 0.0, 10.0, 10.0);
    let mut root = root.with_child(a.with_child(b));

    root.layout(&view, None);
    assert!(frame(&root).is_empty(), "hidden root draws nothing");

    root.set_visible(true);
    root.layout(&view, None);
    let a = root.child(0).unwrap();
    assert!(a.visible());
    assert!(a.child(0).unwrap().visible());
    assert_eq!(frame(&root), vec!["root", "a", "b"]);
}

#[test]
fn test_hiding_parent_hides_subtree_but_keeps_child_flags() {
    let view = screen();
    let (root, _) = node("root", 0.0, 0.0, 100.0, 100.0);
    let (a, _) = node("a", 0.0, 0.0, 10.0, 10.0);
    let (b, _) = node("b", 20.0, 0.0, 10.0, 10.0);
    let mut root = root.with_child(a.with_child(b)).with_visible(true);
    root.layout(&view, None);

    root.child_mut(0).unwrap().set_visible(false);
    root.layout(&view, None);
    assert_eq!(frame(&root), vec!["root"]);
    assert!(root.child(0).unwrap().child(0).unwrap().visible());
}

#[test]
fn test_hidden_sibling_stays_hidden() {
    let view = screen();
    let (root, _) = node("root", 0.0, 0.0, 100.0, 100.0);
    let (a, _) = node("a", 0.0, 0.0, 10.0, 10.0);
    let (b, _) = node("b", 20.0, 0.0, 10.0, 10.0);
    let mut root = root.with_child(a).with_child(b).with_visible(true);
    root.layout(&view, None);

    root.child_mut(1).unwrap().set_visible(false);
    root.layout(&view, None);
    assert_eq!(frame(&root), vec!["root", "a"]);
}

// ==================== DIRTY PROPAGATION ====================

#[test]
fn test_parent_resize_rebuilds_stretched_child() {
    let view = screen();
    let (root, _) = node("root", 0.0, 0.0, 50.0, 50.0);
    let (content, _) = Tracked::new("panel", 0.0, 0.0);
    let panel = Visualer::with_transform(
        content,
        Transform::new()
            .with_edge_anchors(Sides::STRETCH_BOTH)
            .with_edge_offsets(Sides::all(5.0)),
    );
    let mut root = root.with_child(panel).with_visible(true);
    root.layout(&view, None);

    let panel_t = root.child(0).unwrap().transform();
    assert_eq!(panel_t.borrow().resolved_size(), (40.0, 40.0));
    assert!(!panel_t.borrow().is_dirty());

    root.transform().borrow_mut().set_size(90.0, 70.0);
    root.layout(&view, None);
    assert_eq!(panel_t.borrow().resolved_size(), (80.0, 60.0));
    assert_eq!(panel_t.borrow().bounds().top_left(), Vec2::new(5.0, 5.0));
}

#[test]
fn test_content_change_updates_natural_size_once() {
    let view = screen();
    let (root, root_polls) = node("root", 0.0, 0.0, 100.0, 100.0);
    let mut root = root.with_visible(true);
    root.layout(&view, None);
    root.layout(&view, None);
    assert_eq!(root_polls.get(), 1, "clean content is not polled again");

    if let Some(content) = root.content_mut::<Tracked>() {
        content.resize(50.0, 25.0);
    }
    root.layout(&view, None);
    assert_eq!(root_polls.get(), 2);
    let t = root.transform_ref();
    assert_eq!(t.natural_size(), (50.0, 25.0));
    // drawn size stays put, so content is scaled
    assert_eq!(t.resolved_size(), (100.0, 100.0));
    assert!(approx_eq(t.geom().a, 2.0));
    assert!(approx_eq(t.geom().d, 4.0));
}

#[test]
fn test_auto_size_follows_content() {
    let view = screen();
    let (content, _) = Tracked::new("label", 30.0, 12.0);
    let mut root = Visualer::with_transform(
        content,
        Transform::new()
            .with_position(Vec2::new(10.0, 10.0))
            .with_auto_size(),
    )
    .with_visible(true);
    root.layout(&view, None);
    assert_eq!(root.transform_ref().resolved_size(), (30.0, 12.0));

    if let Some(content) = root.content_mut::<Tracked>() {
        content.resize(44.0, 12.0);
    }
    root.layout(&view, None);
    assert_eq!(root.transform_ref().resolved_size(), (44.0, 12.0));
    assert!(root.transform_ref().geom().a == 1.0);
}

// ==================== ANIMATION ====================

#[test]
fn test_tween_moves_node_between_layouts() {
    let view = screen();
    let (root, _) = node("root", 0.0, 0.0, 100.0, 100.0);
    let (mover, _) = node("mover", 0.0, 0.0, 10.0, 10.0);
    let mover_t = mover.transform();
    let mut root = root.with_child(mover).with_visible(true);

    let mut ticker = Ticker::new();
    ticker.spawn(position_tween(
        &mover_t,
        Vec2::ZERO,
        Vec2::new(200.0, 0.0),
        2.0,
        false,
    ));

    let mut drawn = Vec::new();
    for _ in 0..4 {
        ticker.tick(0.5);
        root.layout(&view, None);
        drawn.push(frame(&root).len());
    }

    // only x = 50 is in view; at x = 100 the node just touches the edge
    assert_eq!(drawn, vec![2, 1, 1, 1]);
    assert_eq!(mover_t.borrow().world_position(), Vec2::new(200.0, 0.0));
    assert!(ticker.is_empty());
}
