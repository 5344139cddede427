//! Per-node data and behaviors.
//!
//! This module groups the types a scene is built from: transforms and the
//! visual tree, the content drawn at each node, and the time-driven pieces
//! (timers, tweens, animation clips) that mutate them.
//!
//! Submodules overview:
//! - [`animationclip`] – group of tweens started, paused and resumed together
//! - [`content`] – capability traits for node content plus empty and rectangle content
//! - [`drawlist`] – backend-neutral list of draw commands and colors
//! - [`fsm`] – finite state machine with a transition table and callbacks
//! - [`label`] – text content and the font handle it measures with
//! - [`nineslice`] – image content that stretches without distorting its borders
//! - [`sprite`] – image content and the image handle it draws
//! - [`timer`] – countdown that fires a callback, once or repeatedly
//! - [`transform`] – local placement, edge constraints and cached world layout
//! - [`tween`] – eased normalized progress with repeat modes
//! - [`visualer`] – tree of transform-bearing nodes with layout and draw passes

pub mod animationclip;
pub mod content;
pub mod drawlist;
pub mod fsm;
pub mod label;
pub mod nineslice;
pub mod sprite;
pub mod timer;
pub mod transform;
pub mod tween;
pub mod visualer;
