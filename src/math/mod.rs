//! Value types and pure functions shared by the rest of the engine.
//!
//! Submodules overview:
//! - [`vec2`] – immutable 2D vector with arithmetic and distance helpers
//! - [`bounds`] – axis-aligned rectangle with strict containment predicates
//! - [`sides`] – four-sided values used for edge anchors and offsets
//! - [`geom`] – 2x3 affine draw matrix built by transforms
//! - [`ease`] – easing curves mapping normalized progress to eased progress
//! - [`misc`] – scalar helpers (lerp, clamp, angle wrapping)

pub mod bounds;
pub mod ease;
pub mod geom;
pub mod misc;
pub mod sides;
pub mod vec2;

pub use bounds::Bounds;
pub use ease::Easing;
pub use geom::GeoM;
pub use sides::{Side, Sides};
pub use vec2::Vec2;
