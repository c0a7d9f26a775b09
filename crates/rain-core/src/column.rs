//! A vertical stream of glyphs
//!
//! Cells are stacked upward from the starting position, so the first cell is
//! the lowest one on screen and leads the stream as it falls.

use rand::Rng;

use crate::glyph::GlyphCell;
use crate::traits::{Color, GlyphSink};

/// Trail length bounds (cells below the lead is `N`, total is `N + 1`)
pub const TRAIL_MIN: u32 = 5;
pub const TRAIL_MAX: u32 = 35;

/// Fall speed bounds in pixels per frame
pub const FALL_SPEED_MIN: f32 = 5.0;
pub const FALL_SPEED_MAX: f32 = 22.0;

/// Divides the per-cell opacity step; larger values give longer visible trails
pub const FADE_INTERVAL: f32 = 1.6;

/// Highlight tint for lead glyphs
pub const LEAD_COLOR: Color = Color::rgb(140.0 / 255.0, 1.0, 170.0 / 255.0);
/// Tint for every other glyph
pub const TRAIL_COLOR: Color = Color::rgb(0.0, 1.0, 70.0 / 255.0);

/// Ordered cells sharing one x position and fall speed
#[derive(Debug, Clone)]
pub struct Column {
    pub x: f32,
    pub fall_speed: f32,
    pub cells: Vec<GlyphCell>,
}

impl Column {
    /// Generate a column whose first cell sits at `start_y`
    pub fn populate<R: Rng + ?Sized>(x: f32, start_y: f32, symbol_size: f32, rng: &mut R) -> Self {
        let trail = rng.gen_range(TRAIL_MIN..=TRAIL_MAX);
        let fall_speed = rng.gen_range(FALL_SPEED_MIN..FALL_SPEED_MAX);
        let opacity_step = (255.0 / trail as f32) / FADE_INTERVAL;

        let mut is_lead = rng.gen_range(0..=4) == 1;
        let mut opacity = 255.0_f32;
        let mut y = start_y;
        let mut cells = Vec::with_capacity(trail as usize + 1);

        for _ in 0..=trail {
            cells.push(GlyphCell::new(x, y, fall_speed, is_lead, opacity, rng));
            opacity = (opacity - opacity_step).clamp(0.0, 255.0);
            y -= symbol_size;
            is_lead = false;
        }

        Self {
            x,
            fall_speed,
            cells,
        }
    }

    /// Draw every cell, then let it fall and maybe change value
    pub fn render<S, R>(&mut self, frame_index: u64, canvas_height: f32, sink: &mut S, rng: &mut R)
    where
        S: GlyphSink + ?Sized,
        R: Rng + ?Sized,
    {
        for cell in &mut self.cells {
            let tint = if cell.is_lead { LEAD_COLOR } else { TRAIL_COLOR };
            sink.draw_glyph(
                cell.value.as_char(),
                cell.x,
                cell.y,
                tint.with_alpha_255(cell.opacity),
            );
            cell.advance(canvas_height);
            cell.maybe_reassign_value(frame_index, rng);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSink;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_cell_count_and_speed_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let column = Column::populate(0.0, -300.0, 14.0, &mut rng);
            assert!((6..=36).contains(&column.len()), "len {}", column.len());
            assert!(column.fall_speed >= FALL_SPEED_MIN && column.fall_speed <= FALL_SPEED_MAX);
            assert!(column.cells.iter().all(|c| c.fall_speed == column.fall_speed));
        }
    }

    #[test]
    fn test_cells_stack_upward() {
        let mut rng = StdRng::seed_from_u64(7);
        let column = Column::populate(42.0, 100.0, 14.0, &mut rng);
        for (i, cell) in column.cells.iter().enumerate() {
            assert_eq!(cell.x, 42.0);
            assert_eq!(cell.y, 100.0 - 14.0 * i as f32);
        }
    }

    #[test]
    fn test_opacity_non_increasing_and_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let column = Column::populate(0.0, 0.0, 14.0, &mut rng);
            assert_eq!(column.cells[0].opacity, 255.0);
            for pair in column.cells.windows(2) {
                assert!(pair[1].opacity <= pair[0].opacity);
            }
            for cell in &column.cells {
                assert!((0.0..=255.0).contains(&cell.opacity));
            }
        }
    }

    #[test]
    fn test_only_first_cell_can_lead() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut leads = 0;
        let columns = 5_000;
        for _ in 0..columns {
            let column = Column::populate(0.0, 0.0, 14.0, &mut rng);
            assert!(column.cells.iter().skip(1).all(|c| !c.is_lead));
            if column.cells[0].is_lead {
                leads += 1;
            }
        }
        let share = leads as f64 / columns as f64;
        assert!((share - 0.2).abs() < 0.03, "lead share {share}");
    }

    #[test]
    fn test_render_draws_each_cell_then_advances() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut column = Column::populate(14.0, 50.0, 14.0, &mut rng);
        let before: Vec<f32> = column.cells.iter().map(|c| c.y).collect();
        let mut sink = MockSink::new();

        column.render(1, 600.0, &mut sink, &mut rng);

        assert_eq!(sink.call_count(), column.len());
        for ((call, cell), y0) in sink.calls.iter().zip(&column.cells).zip(&before) {
            assert_eq!(call.y, *y0);
            assert_eq!(call.x, 14.0);
            assert_eq!(cell.y, y0 + column.fall_speed);
            assert!((call.color.a * 255.0 - cell.opacity).abs() < 1e-3);
        }
    }

    #[test]
    fn test_render_uses_lead_tint() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut column = Column::populate(0.0, 0.0, 14.0, &mut rng);
        column.cells[0].is_lead = true;
        let mut sink = MockSink::new();

        column.render(3, 600.0, &mut sink, &mut rng);

        let lead = sink.calls[0].color;
        assert_eq!([lead.r, lead.g, lead.b], [LEAD_COLOR.r, LEAD_COLOR.g, LEAD_COLOR.b]);
        let trail = sink.calls[1].color;
        assert_eq!([trail.r, trail.g, trail.b], [TRAIL_COLOR.r, TRAIL_COLOR.g, TRAIL_COLOR.b]);
    }
}
