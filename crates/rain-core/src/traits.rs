//! Drawing trait abstractions
//!
//! The simulation never talks to the GPU directly. It hands each glyph to a
//! `GlyphSink`, which the renderer implements on top of a vello scene and
//! tests implement with `MockSink`.

/// RGBA color as floats (0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with an alpha given on the 0-255 scale
    pub fn with_alpha_255(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 255.0) / 255.0,
            ..self
        }
    }

    /// Components as 8-bit values
    pub fn to_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Receives glyphs as the rain field is drawn
pub trait GlyphSink {
    /// Draw a single character with its baseline-left corner at (`x`, `y`)
    fn draw_glyph(&mut self, ch: char, x: f32, y: f32, color: Color);
}

impl<S: GlyphSink + ?Sized> GlyphSink for &mut S {
    fn draw_glyph(&mut self, ch: char, x: f32, y: f32, color: Color) {
        (**self).draw_glyph(ch, x, y, color);
    }
}
