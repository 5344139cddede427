//! Finite state machine with a fixed transition table.
//!
//! An [`Fsm`] holds the current state of a closed, caller-defined set (any
//! `Eq + Hash + Clone` type, usually a small enum) and only allows moves that
//! the table built at construction lists. Moving to the current state is
//! always illegal.
//!
//! # Callbacks
//!
//! - `on_exit(state, cb)` – runs when leaving `state`, receives the next state
//! - `on_enter(state, cb)` – runs when entering `state`, receives the previous state
//!
//! On a transition the exit callbacks of the old state run first, then the
//! enter callbacks of the new one, each list in registration order. Callbacks
//! cannot reach the machine itself, so a transition never re-enters.
//!
//! # Example
//!
//! ```
//! use floe::components::fsm::{Fsm, FsmTransition};
//!
//! #[derive(Clone, Debug, PartialEq, Eq, Hash)]
//! enum Door { Open, Closed, Locked }
//!
//! let mut door = Fsm::new(Door::Closed, [
//!     FsmTransition::new(Door::Closed, [Door::Open, Door::Locked]),
//!     FsmTransition::new(Door::Open, [Door::Closed]),
//!     FsmTransition::new(Door::Locked, [Door::Closed]),
//! ]);
//! assert!(!door.transition(Door::Closed));
//! assert!(door.transition(Door::Open));
//! assert_eq!(door.last(), Some(&Door::Closed));
//! ```

use std::fmt;
use std::hash::Hash;

use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

/// Callback fired on a transition. The argument is the other end of the move.
pub type FsmCallback<S> = Box<dyn FnMut(&S)>;

type CallbackList<S> = SmallVec<[FsmCallback<S>; 2]>;

/// One row of the transition table.
#[derive(Clone, Debug)]
pub struct FsmTransition<S> {
    pub from: S,
    pub to: Vec<S>,
}

impl<S> FsmTransition<S> {
    pub fn new(from: S, to: impl IntoIterator<Item = S>) -> Self {
        FsmTransition {
            from,
            to: to.into_iter().collect(),
        }
    }
}

pub struct Fsm<S> {
    current: S,
    last: Option<S>,
    transitions: FxHashMap<S, FxHashSet<S>>,
    on_enter: FxHashMap<S, CallbackList<S>>,
    on_exit: FxHashMap<S, CallbackList<S>>,
}

impl<S> Fsm<S>
where
    S: Eq + Hash + Clone + fmt::Debug,
{
    /// Build the machine. Rows sharing a `from` state are merged.
    pub fn new(start: S, transitions: impl IntoIterator<Item = FsmTransition<S>>) -> Self {
        let mut table: FxHashMap<S, FxHashSet<S>> = FxHashMap::default();
        for row in transitions {
            table.entry(row.from).or_default().extend(row.to);
        }
        Fsm {
            current: start,
            last: None,
            transitions: table,
            on_enter: FxHashMap::default(),
            on_exit: FxHashMap::default(),
        }
    }

    pub fn current(&self) -> &S {
        &self.current
    }

    /// The state before the last successful transition.
    pub fn last(&self) -> Option<&S> {
        self.last.as_ref()
    }

    pub fn can_transition(&self, target: &S) -> bool {
        if self.current == *target {
            return false;
        }
        self.transitions
            .get(&self.current)
            .is_some_and(|allowed| allowed.contains(target))
    }

    /// Move to `target`. Returns `false` and changes nothing if the move is
    /// not allowed.
    pub fn transition(&mut self, target: S) -> bool {
        if !self.can_transition(&target) {
            return false;
        }

        let previous = std::mem::replace(&mut self.current, target);
        debug!("fsm: {:?} -> {:?}", previous, self.current);

        if let Some(callbacks) = self.on_exit.get_mut(&previous) {
            for cb in callbacks.iter_mut() {
                cb(&self.current);
            }
        }
        if let Some(callbacks) = self.on_enter.get_mut(&self.current) {
            for cb in callbacks.iter_mut() {
                cb(&previous);
            }
        }

        self.last = Some(previous);
        true
    }

    /// Run `cb` whenever `state` is entered. It receives the previous state.
    pub fn on_enter(&mut self, state: S, cb: impl FnMut(&S) + 'static) {
        self.on_enter.entry(state).or_default().push(Box::new(cb));
    }

    /// Run `cb` whenever `state` is left. It receives the next state.
    pub fn on_exit(&mut self, state: S, cb: impl FnMut(&S) + 'static) {
        self.on_exit.entry(state).or_default().push(Box::new(cb));
    }
}

impl<S: fmt::Debug> fmt::Debug for Fsm<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fsm")
            .field("current", &self.current)
            .field("last", &self.last)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}
