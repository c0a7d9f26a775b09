//! Mock glyph sink for testing
//!
//! Records every glyph handed to it so tests can assert on draw order,
//! positions and colors without a GPU context.

use crate::traits::{Color, GlyphSink};

/// Record of a single draw call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub ch: char,
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

/// A glyph sink that records all draw calls
#[derive(Debug, Default)]
pub struct MockSink {
    /// All draw calls made to this sink, in order
    pub calls: Vec<DrawCall>,
}

impl MockSink {
    /// Create a new mock sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all recorded calls
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Get the number of recorded calls
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Distinct x positions in first-seen order
    pub fn columns_drawn(&self) -> Vec<f32> {
        let mut xs: Vec<f32> = Vec::new();
        for call in &self.calls {
            if !xs.contains(&call.x) {
                xs.push(call.x);
            }
        }
        xs
    }
}

impl GlyphSink for MockSink {
    fn draw_glyph(&mut self, ch: char, x: f32, y: f32, color: Color) {
        self.calls.push(DrawCall { ch, x, y, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls_in_order() {
        let mut sink = MockSink::new();
        sink.draw_glyph('7', 0.0, 10.0, Color::rgb(0.0, 1.0, 0.0));
        sink.draw_glyph('ア', 14.0, 10.0, Color::rgb(0.0, 1.0, 0.0));
        sink.draw_glyph('1', 0.0, 24.0, Color::rgb(0.0, 1.0, 0.0));

        assert_eq!(sink.call_count(), 3);
        assert_eq!(sink.calls[1].ch, 'ア');
        assert_eq!(sink.columns_drawn(), vec![0.0, 14.0]);

        sink.clear_calls();
        assert_eq!(sink.call_count(), 0);
    }
}
