//! Rain Renderer - GPU side of the digital rain
//!
//! Frame layout:
//! - Glyph layer: vello draws this frame's glyphs to a transparent texture
//! - Trail pass: fades the persistent frame and lays the glyph layer on top
//! - CRT pass: full-screen CRT emulation into an intermediate texture
//! - Shockwave pass: radial ripple from the intermediate texture to the surface
//!
//! The simulation itself lives in `rain-core`; this crate only turns its
//! glyphs and uniforms into pixels.

pub mod error;
pub mod font;
pub mod glyph_layer;
pub mod pass;
pub mod post;
pub mod renderer;
pub mod shaders;

pub use error::RenderError;
pub use font::{GlyphFont, SceneGlyphSink};
pub use glyph_layer::GlyphLayer;
pub use pass::FullscreenPass;
pub use post::{INTERMEDIATE_FORMAT, PostEffectPipeline, RenderTarget};
pub use renderer::RainRenderer;
