//! Rendering backends.
//!
//! The core never draws pixels. A backend turns the frame's
//! [`DrawList`](crate::components::drawlist::DrawList) into calls on a real
//! renderer and supplies the image and font handles content is built from.
//!
//! Submodules overview:
//! - [`raylib`] – texture/font stores and draw list replay on raylib (feature `raylib`)

#[cfg(feature = "raylib")]
pub mod raylib;
