//! Engine systems.
//!
//! Functions that wire components together.
//!
//! Submodules overview
//! - [`tween`] – tweens that animate transform position, rotation and size

pub mod tween;
