//! Per-frame driver for time-stepped entities.
//!
//! The [`Ticker`] holds shared handles to anything implementing [`Tickable`]
//! (timers, tweens) and advances them once per frame. It does not own their
//! lifetime: completed entries are dropped from its list but stay alive for
//! whoever else holds a handle, such as an
//! [`AnimationClip`](crate::components::animationclip::AnimationClip).
//!
//! Callbacks fired from inside [`Ticker::tick`] must not borrow the entity
//! that is currently being ticked. Borrowing any other entity is fine.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

/// Lifecycle of a tickable entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TickState {
    Paused,
    #[default]
    Running,
    Complete,
}

/// Something that advances with elapsed time.
pub trait Tickable {
    /// Continue from the current state.
    fn resume(&mut self);
    /// Stop ticking but keep state.
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn is_complete(&self) -> bool;
    /// Advance by `elapsed` seconds. Has no effect unless running.
    fn tick(&mut self, elapsed: f64);
}

/// Shared handle stored by the ticker.
pub type TickHandle = Rc<RefCell<dyn Tickable>>;

#[derive(Default)]
pub struct Ticker {
    entries: Vec<TickHandle>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shared entity.
    pub fn add(&mut self, entry: TickHandle) {
        self.entries.push(entry);
    }

    /// Wrap `entity` in a shared handle, register it and hand the handle back.
    pub fn spawn<T: Tickable + 'static>(&mut self, entity: T) -> Rc<RefCell<T>> {
        let handle = Rc::new(RefCell::new(entity));
        self.entries.push(handle.clone());
        handle
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Tick every running entry, then drop the completed ones.
    pub fn tick(&mut self, elapsed: f64) {
        for entry in &self.entries {
            let mut entry = entry.borrow_mut();
            if entry.is_paused() || entry.is_complete() {
                continue;
            }
            entry.tick(elapsed);
        }

        let before = self.entries.len();
        self.entries.retain(|entry| !entry.borrow().is_complete());
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!("ticker removed {} completed entries", removed);
        }
    }
}
