//! Glyph font for the rain
//!
//! Maps the rain's character set to glyph ids once up front and draws single
//! glyphs into a vello scene.

use std::collections::HashMap;
use std::sync::Arc;

use rain_core::glyph::{KANA_BASE, KANA_SPAN};
use rain_core::{Color, GlyphSink};
use swash::FontRef;
use vello::Scene;
use vello::kurbo::Affine;
use vello::peniko::{self, Blob, Brush, Fill, FontData};

/// Font bytes plus the precomputed charmap for digits and Katakana
pub struct GlyphFont {
    data: FontData,
    index: u32,
    size: f32,
    glyph_ids: HashMap<char, u32>,
}

impl GlyphFont {
    /// Parse face `index` of `bytes` and cache glyph ids for every character
    /// the rain can show
    ///
    /// `index` selects the face inside a collection (.ttc); plain fonts use 0.
    pub fn new(bytes: Vec<u8>, index: u32, size: f32) -> Result<Self, crate::RenderError> {
        let font = FontRef::from_index(&bytes, index as usize).ok_or_else(|| {
            crate::RenderError::InvalidFont(format!("no face at index {index}"))
        })?;
        let charmap = font.charmap();

        let digits = ('0'..='9').collect::<Vec<_>>();
        let kana = (KANA_BASE..KANA_BASE + KANA_SPAN).filter_map(char::from_u32);

        let mut glyph_ids = HashMap::with_capacity(digits.len() + KANA_SPAN as usize);
        let mut missing = 0;
        for ch in digits.into_iter().chain(kana) {
            let id = charmap.map(ch);
            if id == 0 {
                missing += 1;
            }
            glyph_ids.insert(ch, u32::from(id));
        }

        if missing > 0 {
            log::warn!("Font is missing {} of the rain glyphs; they render as .notdef", missing);
        }

        Ok(Self {
            data: FontData::new(Blob::new(Arc::new(bytes)), index),
            index,
            size,
            glyph_ids,
        })
    }

    /// Glyph id for a rain character, None outside the rain's character set
    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.glyph_ids.get(&ch).copied()
    }

    /// Face index within the font file
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Draws rain glyphs into a vello scene
pub struct SceneGlyphSink<'a> {
    scene: &'a mut Scene,
    font: &'a GlyphFont,
}

impl<'a> SceneGlyphSink<'a> {
    pub fn new(scene: &'a mut Scene, font: &'a GlyphFont) -> Self {
        Self { scene, font }
    }
}

impl GlyphSink for SceneGlyphSink<'_> {
    fn draw_glyph(&mut self, ch: char, x: f32, y: f32, color: Color) {
        let Some(id) = self.font.glyph_id(ch) else {
            return;
        };
        let [r, g, b, a] = color.to_u8();
        if a == 0 {
            return;
        }

        let brush = Brush::Solid(peniko::Color::from_rgba8(r, g, b, a));
        self.scene
            .draw_glyphs(&self.font.data)
            .font_size(self.font.size)
            .transform(Affine::IDENTITY)
            .brush(&brush)
            .draw(Fill::NonZero, std::iter::once(vello::Glyph { id, x, y }));
    }
}
