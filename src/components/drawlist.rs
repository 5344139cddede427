//! Backend-neutral draw destination.
//!
//! The draw pass records [`DrawCommand`]s into a [`DrawList`] instead of
//! talking to a renderer directly. A backend (see `crate::backend`) replays
//! the list once per frame. Tests inspect it to check what would be drawn and
//! in which order.

use serde::{Deserialize, Serialize};

use super::transform::Transform;
use crate::math::{Bounds, GeoM, Vec2};

/// 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const RED: Rgba = Rgba::new(230, 41, 55, 255);
    pub const GREEN: Rgba = Rgba::new(0, 228, 48, 255);
    pub const BLUE: Rgba = Rgba::new(0, 121, 241, 255);
    pub const GRAY: Rgba = Rgba::new(130, 130, 130, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

/// Where and how big a piece of content lands on screen.
///
/// Carries both the full affine matrix and the decomposed values that
/// renderers with a "destination rect + origin + rotation" API expect.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub geom: GeoM,
    /// World position of the pivot.
    pub position: Vec2,
    /// Resolved drawn size.
    pub size: Vec2,
    /// Pivot offset from the top-left corner, in drawn pixels.
    pub origin: Vec2,
    /// Rotation in radians.
    pub rotation: f64,
    /// Drawn size over natural size, `1.0` where the natural size is zero.
    pub scale: Vec2,
}

impl Placement {
    pub fn from_transform(t: &Transform) -> Self {
        let (w, h) = t.resolved_size();
        let (nw, nh) = t.natural_size();
        let anchor = t.anchor();
        Placement {
            geom: t.geom(),
            position: t.world_position(),
            size: Vec2::new(w, h),
            origin: Vec2::new(w * anchor.x, h * anchor.y),
            rotation: t.rotation(),
            scale: Vec2::new(
                if nw != 0.0 { w / nw } else { 1.0 },
                if nh != 0.0 { h / nh } else { 1.0 },
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DrawCommand {
    Rect {
        placement: Placement,
        color: Rgba,
    },
    Image {
        placement: Placement,
        /// Key of the image in the backend's store.
        image: String,
        /// Region of the image to draw, in image pixels.
        source: Bounds,
        tint: Rgba,
    },
    Text {
        placement: Placement,
        /// Key of the font in the backend's store.
        font: String,
        text: String,
        font_size: f64,
        spacing: f64,
        color: Rgba,
    },
}

impl DrawCommand {
    pub fn placement(&self) -> &Placement {
        match self {
            DrawCommand::Rect { placement, .. }
            | DrawCommand::Image { placement, .. }
            | DrawCommand::Text { placement, .. } => placement,
        }
    }
}

/// Ordered list of draw commands for one frame.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCommand> {
        self.commands.drain(..)
    }

    /// Pretty JSON dump of the recorded commands, for debugging layouts.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(&self.commands)
            .map_err(|e| format!("Failed to serialize draw list: {}", e))
    }
}
