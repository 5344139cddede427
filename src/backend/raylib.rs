//! Raylib backend.
//!
//! - [`ImageStore`] – loaded textures keyed by string IDs, handed out as [`ImageHandle`]s
//! - [`FontStore`] – loaded fonts keyed by string IDs, handed out as [`FontFace`]s
//! - [`replay`] – drains a [`DrawList`] into a raylib draw handle
//!
//! Raylib resources must be used from the main thread only, which the
//! `Rc`-based handles enforce.

use std::ffi::CString;
use std::rc::Rc;

use ::raylib::ffi;
use ::raylib::prelude::*;
use log::{debug, info, warn};
use rustc_hash::FxHashMap;

use crate::components::drawlist::{DrawCommand, DrawList, Placement, Rgba};
use crate::components::label::FontFace;
use crate::components::sprite::ImageHandle;

/// Map of image keys to loaded textures.
pub struct ImageStore {
    textures: FxHashMap<String, Texture2D>,
}

impl Default for ImageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageStore {
    pub fn new() -> Self {
        Self {
            textures: FxHashMap::default(),
        }
    }

    /// Load a texture from `path` and register it under `key`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        path: &str,
    ) -> Result<Rc<ImageHandle>, String> {
        let texture = rl
            .load_texture(thread, path)
            .map_err(|e| format!("Failed to load texture '{}': {}", path, e))?;
        info!("Loaded texture '{}'", path);
        Ok(self.insert(key, texture))
    }

    /// Upload a CPU-side image and register it under `key`.
    pub fn load_from_image(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        image: &Image,
    ) -> Result<Rc<ImageHandle>, String> {
        let key = key.into();
        let texture = rl
            .load_texture_from_image(thread, image)
            .map_err(|e| format!("Failed to create texture '{}': {}", key, e))?;
        Ok(self.insert(key, texture))
    }

    /// Register an already loaded texture. Replaces any texture with the same key.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) -> Rc<ImageHandle> {
        let key = key.into();
        let handle = Rc::new(ImageHandle::new(
            key.clone(),
            texture.width as f64,
            texture.height as f64,
        ));
        if self.textures.insert(key, texture).is_some() {
            debug!("Replaced texture '{}'", handle.key);
        }
        handle
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn clear(&mut self) {
        self.textures.clear();
    }
}

/// Either a font loaded from disk or raylib's built-in one.
enum StoredFont {
    Owned(Font),
    Builtin(WeakFont),
}

impl StoredFont {
    fn raw(&self) -> ffi::Font {
        match self {
            StoredFont::Owned(font) => *font.as_ref(),
            StoredFont::Builtin(font) => *font.as_ref(),
        }
    }
}

/// Map of font keys to loaded fonts.
///
/// Faces handed out keep their font alive, so a [`FontFace`] may outlive the
/// store entry it came from.
pub struct FontStore {
    fonts: FxHashMap<String, Rc<StoredFont>>,
}

impl Default for FontStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FontStore {
    pub fn new() -> Self {
        Self {
            fonts: FxHashMap::default(),
        }
    }

    /// Load a font from `path` rasterized at `size` pixels and register it
    /// under `key`.
    pub fn load(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        key: impl Into<String>,
        path: &str,
        size: f64,
    ) -> Result<Rc<FontFace>, String> {
        let font = rl
            .load_font_ex(thread, path, size as i32, None)
            .map_err(|e| format!("Failed to load font '{}': {}", path, e))?;
        info!("Loaded font '{}' at {}px", path, size);
        Ok(self.insert(key.into(), StoredFont::Owned(font), size))
    }

    /// Register raylib's built-in font under `key`, drawn at `size` pixels.
    pub fn builtin(&mut self, rl: &RaylibHandle, key: impl Into<String>, size: f64) -> Rc<FontFace> {
        self.insert(key.into(), StoredFont::Builtin(rl.get_font_default()), size)
    }

    fn insert(&mut self, key: String, font: StoredFont, size: f64) -> Rc<FontFace> {
        let font = Rc::new(font);
        self.fonts.insert(key.clone(), font.clone());
        let spacing = (size / 10.0).max(1.0);
        let measured = font.clone();
        Rc::new(
            FontFace::new(key, size, size, move |text, font_size| {
                measure(measured.raw(), text, font_size, spacing)
            })
            .with_spacing(spacing),
        )
    }

    fn raw(&self, key: &str) -> Option<ffi::Font> {
        self.fonts.get(key).map(|f| f.raw())
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn clear(&mut self) {
        self.fonts.clear();
    }
}

fn measure(font: ffi::Font, text: &str, font_size: f64, spacing: f64) -> (f64, f64) {
    let Ok(c_text) = CString::new(text) else {
        warn!("Text with an interior NUL cannot be measured: {:?}", text);
        return (0.0, 0.0);
    };
    let measured =
        unsafe { ffi::MeasureTextEx(font, c_text.as_ptr(), font_size as f32, spacing as f32) };
    (measured.x as f64, measured.y as f64)
}

fn color(c: Rgba) -> Color {
    Color::new(c.r, c.g, c.b, c.a)
}

fn dest_rect(p: &Placement) -> Rectangle {
    Rectangle::new(
        p.position.x as f32,
        p.position.y as f32,
        p.size.x as f32,
        p.size.y as f32,
    )
}

fn origin(p: &Placement) -> Vector2 {
    Vector2::new(p.origin.x as f32, p.origin.y as f32)
}

/// Draw and remove every command in `list`, in order.
///
/// Commands naming an unknown image or font are skipped.
pub fn replay<D: RaylibDraw>(d: &mut D, list: &mut DrawList, images: &ImageStore, fonts: &FontStore) {
    for command in list.drain() {
        match command {
            DrawCommand::Rect { placement, color: c } => {
                d.draw_rectangle_pro(
                    dest_rect(&placement),
                    origin(&placement),
                    placement.rotation.to_degrees() as f32,
                    color(c),
                );
            }
            DrawCommand::Image {
                placement,
                image,
                source,
                tint,
            } => {
                let Some(texture) = images.get(&image) else {
                    warn!("Texture '{}' not found in ImageStore", image);
                    continue;
                };
                let src = Rectangle::new(
                    source.x as f32,
                    source.y as f32,
                    source.width as f32,
                    source.height as f32,
                );
                d.draw_texture_pro(
                    texture,
                    src,
                    dest_rect(&placement),
                    origin(&placement),
                    placement.rotation.to_degrees() as f32,
                    color(tint),
                );
            }
            DrawCommand::Text {
                placement,
                font,
                text,
                font_size,
                spacing,
                color: c,
            } => {
                let Some(raw) = fonts.raw(&font) else {
                    warn!("Font '{}' not found in FontStore", font);
                    continue;
                };
                let Ok(c_text) = CString::new(text) else {
                    continue;
                };
                let position = Vector2::new(placement.position.x as f32, placement.position.y as f32);
                unsafe {
                    ffi::DrawTextPro(
                        raw,
                        c_text.as_ptr(),
                        position.into(),
                        origin(&placement).into(),
                        placement.rotation.to_degrees() as f32,
                        font_size as f32,
                        spacing as f32,
                        color(c).into(),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{GeoM, Vec2};

    #[test]
    fn test_color_conversion() {
        let c = color(Rgba::new(1, 2, 3, 4));
        assert_eq!((c.r, c.g, c.b, c.a), (1, 2, 3, 4));
    }

    #[test]
    fn test_dest_rect_uses_pivot_position_and_size() {
        let p = Placement {
            geom: GeoM::IDENTITY,
            position: Vec2::new(10.0, 20.0),
            size: Vec2::new(30.0, 40.0),
            origin: Vec2::new(15.0, 20.0),
            rotation: 0.0,
            scale: Vec2::ONE,
        };
        let r = dest_rect(&p);
        assert_eq!((r.x, r.y, r.width, r.height), (10.0, 20.0, 30.0, 40.0));
        let o = origin(&p);
        assert_eq!((o.x, o.y), (15.0, 20.0));
    }
}
