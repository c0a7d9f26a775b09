//! Per-frame driver
//!
//! `FrameDriver` owns the whole simulation: the rain field, the shockwave
//! timer, the random source and the frame counter. Each call to `step` draws
//! one frame of glyphs into a sink and returns the uniforms the post-effect
//! passes need for that same frame.

use bytemuck::{Pod, Zeroable};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::field::RainField;
use crate::input::InputController;
use crate::shockwave::{DEFAULT_STEP, ShockwaveState};
use crate::traits::GlyphSink;

/// Glyph size and column spacing in pixels
pub const DEFAULT_SYMBOL_SIZE: f32 = 14.0;

/// Alpha of the black layer laid over the previous frame (out of 255)
pub const DEFAULT_FADE_ALPHA: u8 = 150;

/// Knobs for a simulation run
#[derive(Debug, Clone, PartialEq)]
pub struct RainSettings {
    pub symbol_size: f32,
    pub fade_alpha: u8,
    pub shockwave_step: f32,
    /// Fixed seed for reproducible runs, entropy when None
    pub seed: Option<u64>,
    pub crt_enabled: bool,
    pub shockwave_enabled: bool,
}

impl Default for RainSettings {
    fn default() -> Self {
        Self {
            symbol_size: DEFAULT_SYMBOL_SIZE,
            fade_alpha: DEFAULT_FADE_ALPHA,
            shockwave_step: DEFAULT_STEP,
            seed: None,
            crt_enabled: true,
            shockwave_enabled: true,
        }
    }
}

/// Trail pass uniforms (must match `Params` in trail.wgsl)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TrailUniforms {
    /// Fade layer opacity, 0.0 - 1.0
    pub fade: f32,
    pub _pad: [f32; 3],
}

/// CRT pass uniforms (must match `Params` in crt.wgsl)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct CrtUniforms {
    /// Milliseconds since start
    pub time: f32,
    /// 1.0 applies the filter, 0.0 passes the frame through
    pub enabled: f32,
    pub resolution: [f32; 2],
}

/// Shockwave pass uniforms (must match `Params` in shockwave.wgsl)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShockwaveUniforms {
    /// (1, width / height)
    pub aspect: [f32; 2],
    /// Normalized ripple center
    pub centre: [f32; 2],
    /// Eased progress
    pub t: f32,
    pub enabled: f32,
    pub _pad: [f32; 2],
}

/// Everything the GPU passes need for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub trail: TrailUniforms,
    pub crt: CrtUniforms,
    pub shockwave: ShockwaveUniforms,
}

/// Owns the simulation state and advances it one frame at a time
pub struct FrameDriver {
    field: RainField,
    shockwave: ShockwaveState,
    input: InputController,
    rng: StdRng,
    frame_index: u64,
    settings: RainSettings,
    size: (u32, u32),
}

impl FrameDriver {
    /// Build the rain field for a canvas of `width` x `height` pixels
    pub fn new(settings: RainSettings, width: u32, height: u32) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let field = RainField::initialize(width as f32, height as f32, settings.symbol_size, &mut rng);
        log::info!(
            "Created {} rain columns for {}x{} canvas",
            field.columns().len(),
            width,
            height
        );

        Self {
            field,
            shockwave: ShockwaveState::new(settings.shockwave_step),
            input: InputController::new(),
            rng,
            frame_index: 0,
            settings,
            size: (width, height),
        }
    }

    /// Run one frame: draw glyphs into `sink`, then compute pass uniforms
    ///
    /// The shockwave uniforms capture progress *before* this frame's
    /// increment, so a fresh trigger renders t = 0 first.
    pub fn step<S: GlyphSink + ?Sized>(&mut self, sink: &mut S, elapsed_ms: f32) -> FrameUniforms {
        self.frame_index += 1;
        let (width, height) = (self.size.0 as f32, self.size.1 as f32);

        let trail = TrailUniforms {
            fade: f32::from(self.settings.fade_alpha) / 255.0,
            _pad: [0.0; 3],
        };

        self.field.render(self.frame_index, sink, &mut self.rng);

        let crt = CrtUniforms {
            time: elapsed_ms,
            enabled: if self.settings.crt_enabled { 1.0 } else { 0.0 },
            resolution: [width, height],
        };

        let shockwave = ShockwaveUniforms {
            aspect: [1.0, if height > 0.0 { width / height } else { 1.0 }],
            centre: self.shockwave.center(),
            t: self.shockwave.eased_progress(),
            enabled: if self.settings.shockwave_enabled { 1.0 } else { 0.0 },
            _pad: [0.0; 2],
        };
        self.shockwave.advance();

        log::trace!(
            "frame {} t={:.3} progress={:.3}",
            self.frame_index,
            shockwave.t,
            self.shockwave.progress()
        );

        FrameUniforms {
            trail,
            crt,
            shockwave,
        }
    }

    /// Canvas changed size; the field keeps its columns
    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.field.set_canvas_height(height as f32);
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.input.cursor_moved(x, y);
    }

    pub fn cursor_left(&mut self) {
        self.input.cursor_left();
    }

    /// Primary button released; restarts the shockwave at the cursor
    pub fn pointer_released(&mut self) -> bool {
        let (width, height) = (self.size.0 as f32, self.size.1 as f32);
        self.input.button_released(width, height, &mut self.shockwave)
    }

    pub fn field(&self) -> &RainField {
        &self.field
    }

    pub fn shockwave(&self) -> &ShockwaveState {
        &self.shockwave
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockSink;

    fn seeded(width: u32, height: u32) -> FrameDriver {
        let settings = RainSettings {
            seed: Some(1234),
            ..Default::default()
        };
        FrameDriver::new(settings, width, height)
    }

    #[test]
    fn test_uniform_layout_sizes() {
        assert_eq!(std::mem::size_of::<TrailUniforms>(), 16);
        assert_eq!(std::mem::size_of::<CrtUniforms>(), 16);
        assert_eq!(std::mem::size_of::<ShockwaveUniforms>(), 32);
    }

    #[test]
    fn test_setup_creates_58_columns_at_800() {
        let driver = seeded(800, 600);
        assert_eq!(driver.field().columns().len(), 58);
    }

    #[test]
    fn test_frame_index_starts_at_one() {
        let mut driver = seeded(200, 200);
        let mut sink = MockSink::new();
        driver.step(&mut sink, 16.0);
        assert_eq!(driver.frame_index(), 1);
        driver.step(&mut sink, 32.0);
        assert_eq!(driver.frame_index(), 2);
    }

    #[test]
    fn test_step_draws_every_cell() {
        let mut driver = seeded(300, 200);
        let mut sink = MockSink::new();
        driver.step(&mut sink, 0.0);
        let cells: usize = driver.field().columns().iter().map(|c| c.len()).sum();
        assert_eq!(sink.call_count(), cells);
    }

    #[test]
    fn test_uniform_values() {
        let mut driver = seeded(800, 400);
        let mut sink = MockSink::new();
        let uniforms = driver.step(&mut sink, 1234.5);

        assert_eq!(uniforms.crt.time, 1234.5);
        assert_eq!(uniforms.crt.resolution, [800.0, 400.0]);
        assert_eq!(uniforms.crt.enabled, 1.0);
        assert_eq!(uniforms.shockwave.aspect, [1.0, 2.0]);
        assert_eq!(uniforms.shockwave.t, 1.0);
        assert!((uniforms.trail.fade - 150.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_click_then_hundred_frames() {
        let mut driver = seeded(800, 600);
        let mut sink = MockSink::new();

        driver.cursor_moved(400.0, 300.0);
        assert!(driver.pointer_released());
        assert_eq!(driver.shockwave().center(), [0.5, 0.5]);
        assert_eq!(driver.shockwave().progress(), 0.0);

        let first = driver.step(&mut sink, 0.0);
        assert_eq!(first.shockwave.t, 0.0);
        assert_eq!(first.shockwave.centre, [0.5, 0.5]);

        let mut last = driver.shockwave().progress();
        for _ in 1..100 {
            driver.step(&mut sink, 0.0);
            sink.clear_calls();
            let p = driver.shockwave().progress();
            assert!(p >= last);
            last = p;
        }
        assert_eq!(driver.shockwave().progress(), 1.0);

        for _ in 0..20 {
            let u = driver.step(&mut sink, 0.0);
            sink.clear_calls();
            assert_eq!(u.shockwave.t, 1.0);
        }
    }

    #[test]
    fn test_disabled_passes_flagged() {
        let settings = RainSettings {
            seed: Some(1),
            crt_enabled: false,
            shockwave_enabled: false,
            ..Default::default()
        };
        let mut driver = FrameDriver::new(settings, 100, 100);
        let uniforms = driver.step(&mut MockSink::new(), 0.0);
        assert_eq!(uniforms.crt.enabled, 0.0);
        assert_eq!(uniforms.shockwave.enabled, 0.0);
    }

    #[test]
    fn test_resize_updates_uniforms_and_wrap() {
        let mut driver = seeded(800, 600);
        driver.resize(1000, 500);
        assert_eq!(driver.field().canvas_height(), 500.0);
        assert_eq!(driver.field().columns().len(), 58);

        let uniforms = driver.step(&mut MockSink::new(), 0.0);
        assert_eq!(uniforms.crt.resolution, [1000.0, 500.0]);
        assert_eq!(uniforms.shockwave.aspect, [1.0, 2.0]);
    }

    #[test]
    fn test_same_seed_same_frames() {
        let mut a = seeded(400, 300);
        let mut b = seeded(400, 300);
        let mut sink_a = MockSink::new();
        let mut sink_b = MockSink::new();
        for _ in 0..10 {
            a.step(&mut sink_a, 0.0);
            b.step(&mut sink_b, 0.0);
        }
        assert_eq!(sink_a.calls, sink_b.calls);
    }
}
