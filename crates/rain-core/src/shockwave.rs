//! Click-triggered ripple timer
//!
//! Progress is counted in whole frames so that a 0.01 step lands exactly on
//! 1.0 after 100 frames instead of drifting below it through float
//! accumulation.

/// Default per-frame progress increment
pub const DEFAULT_STEP: f32 = 0.01;

/// Exponent applied to progress before it reaches the shader
pub const EASE_EXPONENT: f32 = 1.0 / 1.5;

/// Center and timer of the shockwave ripple
#[derive(Debug, Clone, PartialEq)]
pub struct ShockwaveState {
    center: [f32; 2],
    frames: u32,
    step: f32,
}

impl ShockwaveState {
    /// Create an idle shockwave (progress already at 1)
    pub fn new(step: f32) -> Self {
        let step = if step > 0.0 && step.is_finite() { step.min(1.0) } else { DEFAULT_STEP };
        let mut state = Self {
            center: [0.0, 0.0],
            frames: 0,
            step,
        };
        state.frames = state.frames_to_complete();
        state
    }

    /// Restart the ripple at a normalized center
    pub fn trigger(&mut self, center: [f32; 2]) {
        self.center = [center[0].clamp(0.0, 1.0), center[1].clamp(0.0, 1.0)];
        self.frames = 0;
    }

    /// Move one frame forward; no-op once complete
    pub fn advance(&mut self) {
        if self.progress() < 1.0 {
            self.frames += 1;
        }
    }

    /// Normalized time since trigger, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        if self.frames >= self.frames_to_complete() {
            1.0
        } else {
            (self.frames as f32 * self.step).min(1.0)
        }
    }

    /// Progress after easing, as consumed by the shockwave pass
    pub fn eased_progress(&self) -> f32 {
        self.progress().powf(EASE_EXPONENT)
    }

    pub fn center(&self) -> [f32; 2] {
        self.center
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn is_active(&self) -> bool {
        self.progress() < 1.0
    }

    // Frames until the clamp at 1; the tolerance keeps 0.01 at exactly 100
    fn frames_to_complete(&self) -> u32 {
        (1.0 / f64::from(self.step) - 1e-4).ceil().max(1.0) as u32
    }
}

impl Default for ShockwaveState {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}
