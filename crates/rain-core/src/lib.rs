//! Rain Core - GPU-agnostic digital rain simulation
//!
//! Everything that decides *what* appears on screen lives here:
//! - `GlyphCell` / `Column` / `RainField` - the falling glyph streams
//! - `ShockwaveState` / `InputController` - the click-triggered ripple timer
//! - `FrameDriver` - owns the simulation and produces per-frame shader uniforms
//!
//! Drawing goes through the `GlyphSink` trait so the whole simulation can be
//! exercised in tests with `MockSink` instead of a GPU.

pub mod column;
pub mod field;
pub mod frame;
pub mod glyph;
pub mod input;
pub mod mock;
pub mod shockwave;
pub mod traits;

pub use column::Column;
pub use field::RainField;
pub use frame::{
    CrtUniforms, FrameDriver, FrameUniforms, RainSettings, ShockwaveUniforms, TrailUniforms,
};
pub use glyph::{GlyphCell, GlyphValue};
pub use input::InputController;
pub use mock::{DrawCall, MockSink};
pub use shockwave::ShockwaveState;
pub use traits::{Color, GlyphSink};
