//! Pointer input to shockwave triggers
//!
//! winit reports cursor motion and button releases as separate events, so the
//! controller remembers the last cursor position and uses it when the button
//! comes back up.

use crate::shockwave::ShockwaveState;

/// Tracks the cursor and turns releases into shockwave triggers
#[derive(Debug, Clone, Default)]
pub struct InputController {
    cursor: Option<(f32, f32)>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the latest cursor position in canvas pixels
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = Some((x, y));
    }

    /// Cursor left the canvas
    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    /// Primary button released at the remembered cursor position
    ///
    /// Returns false when no cursor position is known.
    pub fn button_released(
        &self,
        canvas_width: f32,
        canvas_height: f32,
        shockwave: &mut ShockwaveState,
    ) -> bool {
        match self.cursor {
            Some((x, y)) => Self::on_pointer_release(x, y, canvas_width, canvas_height, shockwave),
            None => false,
        }
    }

    /// Center the shockwave on the release point and restart it
    ///
    /// Returns false (and leaves the shockwave alone) for a zero-sized canvas.
    pub fn on_pointer_release(
        x: f32,
        y: f32,
        canvas_width: f32,
        canvas_height: f32,
        shockwave: &mut ShockwaveState,
    ) -> bool {
        if canvas_width <= 0.0 || canvas_height <= 0.0 {
            log::debug!("Ignoring pointer release on empty canvas");
            return false;
        }

        let center = [x / canvas_width, y / canvas_height];
        log::debug!("Shockwave triggered at {:?}", center);
        shockwave.trigger(center);
        true
    }
}
