//! Ready-made tweens that drive a shared target.
//!
//! These constructors wire a [`Tween`]'s value callback to a target:
//! - [`position_tween`] – animates a [`Transform`] position
//! - [`rotation_tween`] – animates a [`Transform`] rotation
//! - [`width_tween`] / [`height_tween`] – animate a [`Transform`] size
//! - [`value_tween`] – animates a shared `Cell<f64>`
//! - [`vec2_tween`] – feeds an interpolated [`Vec2`] to any callback
//!
//! Transform tweens hold a weak handle: once the node owning the transform
//! is dropped, the tween keeps ticking but writes nothing.
//!
//! Relative tweens add their range to the target's value. The range is
//! resolved when the tween is built and again on every [`Tween::start`], so a
//! relative tween restarted later continues from wherever the target is.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::components::transform::Transform;
use crate::components::tween::Tween;
use crate::math::Vec2;
use crate::math::misc::lerp;

/// Animate the transform position from `start` to `end`.
pub fn position_tween(
    target: &Rc<RefCell<Transform>>,
    start: Vec2,
    end: Vec2,
    duration: f64,
    relative: bool,
) -> Tween {
    let resolve = {
        let target = Rc::downgrade(target);
        move || match (relative, target.upgrade()) {
            (true, Some(t)) => {
                let origin = t.borrow().position();
                (origin + start, origin + end)
            }
            _ => (start, end),
        }
    };
    let range = Rc::new(Cell::new(resolve()));

    let writer = Rc::downgrade(target);
    let update_range = range.clone();
    let tween = Tween::new(duration).on_update(move |value| {
        if let Some(t) = writer.upgrade() {
            let (from, to) = update_range.get();
            t.borrow_mut().set_position(Vec2::lerp(from, to, value));
        }
    });

    if relative {
        tween.on_start(move || range.set(resolve()))
    } else {
        tween
    }
}

/// Animate the transform rotation, in radians.
pub fn rotation_tween(
    target: &Rc<RefCell<Transform>>,
    start: f64,
    end: f64,
    duration: f64,
    relative: bool,
) -> Tween {
    let resolve = {
        let target = Rc::downgrade(target);
        move || match (relative, target.upgrade()) {
            (true, Some(t)) => {
                let origin = t.borrow().rotation();
                (origin + start, origin + end)
            }
            _ => (start, end),
        }
    };
    let range = Rc::new(Cell::new(resolve()));

    let writer = Rc::downgrade(target);
    let update_range = range.clone();
    let tween = Tween::new(duration).on_update(move |value| {
        if let Some(t) = writer.upgrade() {
            let (from, to) = update_range.get();
            t.borrow_mut().set_rotation(lerp(from, to, value));
        }
    });

    if relative {
        tween.on_start(move || range.set(resolve()))
    } else {
        tween
    }
}

pub fn width_tween(target: &Rc<RefCell<Transform>>, start: f64, end: f64, duration: f64) -> Tween {
    let writer = Rc::downgrade(target);
    Tween::new(duration).on_update(move |value| {
        if let Some(t) = writer.upgrade() {
            t.borrow_mut().set_width(lerp(start, end, value));
        }
    })
}

pub fn height_tween(target: &Rc<RefCell<Transform>>, start: f64, end: f64, duration: f64) -> Tween {
    let writer = Rc::downgrade(target);
    Tween::new(duration).on_update(move |value| {
        if let Some(t) = writer.upgrade() {
            t.borrow_mut().set_height(lerp(start, end, value));
        }
    })
}

/// Animate a shared scalar from `start` to `end`.
pub fn value_tween(target: Rc<Cell<f64>>, start: f64, end: f64, duration: f64) -> Tween {
    Tween::new(duration).on_update(move |value| target.set(lerp(start, end, value)))
}

/// Feed the interpolated point between `start` and `end` to `f`.
pub fn vec2_tween(start: Vec2, end: Vec2, duration: f64, mut f: impl FnMut(Vec2) + 'static) -> Tween {
    Tween::new(duration).on_update(move |value| f(Vec2::lerp(start, end, value)))
}
