//! The full set of columns spanning the canvas

use rand::Rng;

use crate::column::Column;
use crate::traits::GlyphSink;

/// Columns start somewhere in this band above the visible area
pub const START_Y_MIN: f32 = -2000.0;
pub const START_Y_MAX: f32 = 0.0;

/// Every column on screen, ordered left to right
#[derive(Debug, Clone)]
pub struct RainField {
    columns: Vec<Column>,
    symbol_size: f32,
    height: f32,
}

impl RainField {
    /// Lay out one column per `symbol_size` step from x = 0 through `width`
    pub fn initialize<R: Rng + ?Sized>(width: f32, height: f32, symbol_size: f32, rng: &mut R) -> Self {
        let symbol_size = symbol_size.max(1.0);
        let count = (width.max(0.0) / symbol_size).floor() as usize + 1;

        let columns = (0..count)
            .map(|i| {
                let start_y = rng.gen_range(START_Y_MIN..START_Y_MAX);
                Column::populate(i as f32 * symbol_size, start_y, symbol_size, rng)
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Rain field: {} columns, {} cells",
            columns.len(),
            columns.iter().map(Column::len).sum::<usize>()
        );

        Self {
            columns,
            symbol_size,
            height,
        }
    }

    /// Draw and advance every column, left to right
    pub fn render<S, R>(&mut self, frame_index: u64, sink: &mut S, rng: &mut R)
    where
        S: GlyphSink + ?Sized,
        R: Rng + ?Sized,
    {
        for column in &mut self.columns {
            column.render(frame_index, self.height, sink, rng);
        }
    }

    /// Follow a resized surface; columns keep their positions
    pub fn set_canvas_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn symbol_size(&self) -> f32 {
        self.symbol_size
    }

    pub fn canvas_height(&self) -> f32 {
        self.height
    }
}
