//! Text content for scene nodes.

use std::fmt;
use std::rc::Rc;

use super::content::{Dirtier, Drawer, NativeSizer};
use super::drawlist::{DrawCommand, DrawList, Placement, Rgba};
use super::transform::Transform;

/// Measures `text` at `font_size`, returning `(width, height)` in pixels.
pub type MeasureFn = dyn Fn(&str, f64) -> (f64, f64);

/// A loaded font as seen by the core.
///
/// The backend supplies the measuring function; the core never rasterizes
/// glyphs itself.
pub struct FontFace {
    pub key: String,
    pub size: f64,
    pub spacing: f64,
    pub line_height: f64,
    measure: Box<MeasureFn>,
}

impl FontFace {
    pub fn new(
        key: impl Into<String>,
        size: f64,
        line_height: f64,
        measure: impl Fn(&str, f64) -> (f64, f64) + 'static,
    ) -> Self {
        FontFace {
            key: key.into(),
            size,
            spacing: 1.0,
            line_height,
            measure: Box::new(measure),
        }
    }

    /// A font where every glyph is `advance` pixels wide and `size` tall.
    pub fn monospace(key: impl Into<String>, size: f64, advance: f64) -> Self {
        FontFace::new(key, size, size, move |text, _| {
            (text.chars().count() as f64 * advance, size)
        })
    }

    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn measure(&self, text: &str) -> (f64, f64) {
        (self.measure)(text, self.size)
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace")
            .field("key", &self.key)
            .field("size", &self.size)
            .field("spacing", &self.spacing)
            .field("line_height", &self.line_height)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct LabelVisual {
    font: Rc<FontFace>,
    text: String,
    color: Rgba,
    is_dirty: bool,
}

impl LabelVisual {
    pub fn new(font: Rc<FontFace>, text: impl Into<String>) -> Self {
        LabelVisual {
            font,
            text: text.into(),
            color: Rgba::WHITE,
            is_dirty: true,
        }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text == text {
            return;
        }
        self.text = text;
        self.is_dirty = true;
    }

    pub fn font(&self) -> &Rc<FontFace> {
        &self.font
    }

    pub fn set_font(&mut self, font: Rc<FontFace>) {
        if Rc::ptr_eq(&self.font, &font) {
            return;
        }
        self.font = font;
        self.is_dirty = true;
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }
}

impl Dirtier for LabelVisual {
    fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    fn clean(&mut self) {
        self.is_dirty = false;
    }
}

impl NativeSizer for LabelVisual {
    /// Measured text size, never shorter than one line.
    fn native_size(&self) -> (f64, f64) {
        let (w, h) = self.font.measure(&self.text);
        (w, h.max(self.font.line_height))
    }
}

impl Drawer<DrawList> for LabelVisual {
    fn draw(&self, transform: &Transform, dest: &mut DrawList) {
        let placement = Placement::from_transform(transform);
        dest.push(DrawCommand::Text {
            font_size: self.font.size * placement.scale.y,
            placement,
            font: self.font.key.clone(),
            text: self.text.clone(),
            spacing: self.font.spacing,
            color: self.color,
        });
    }
}
