//! Long-lived state shared by a scene or the whole game.
//!
//! Overview
//! - `gameconfig` – INI-backed window and timing settings
//! - `gametime` – scaled frame delta, elapsed time and slow-frame detection
//! - `ticker` – ordered collection of tickable entities advanced once per frame
pub mod gameconfig;
pub mod gametime;
pub mod ticker;
