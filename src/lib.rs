//! floe: a 2D scene-graph, layout and animation-tick engine.
//!
//! The core only produces transformation data, invalidation signals and draw
//! requests; pixels are left to a backend.
//!
//! # Project Structure
//!
//! - [`math`] – vectors, bounds, edge values, draw matrix, easing curves
//! - [`components`] – transforms, the visual tree, node content, timers, tweens, FSM
//! - [`resources`] – ticker, frame time and configuration
//! - [`systems`] – tweens wired to transforms
//! - [`game`] – scene stack and frame driver
//! - [`backend`] – draw list replay (raylib behind the `raylib` feature)

pub mod backend;
pub mod components;
pub mod game;
pub mod math;
pub mod resources;
pub mod systems;
