//! Frame orchestration
//!
//! Ties the glyph layer and the post-effect chain together. One call to
//! `render` steps the simulation, draws its glyphs and runs every pass into
//! the caller's output view.

use rain_core::{FrameDriver, FrameUniforms};

use crate::RenderError;
use crate::font::{GlyphFont, SceneGlyphSink};
use crate::glyph_layer::GlyphLayer;
use crate::post::PostEffectPipeline;

/// Owns every GPU resource needed to draw the rain
pub struct RainRenderer {
    font: GlyphFont,
    glyphs: GlyphLayer,
    post: PostEffectPipeline,
    size: (u32, u32),
}

impl RainRenderer {
    /// `output_format` is the format of the view passed to `render`
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        font: GlyphFont,
        width: u32,
        height: u32,
    ) -> Result<Self, RenderError> {
        let glyphs = GlyphLayer::new(device, width, height)?;
        let post = PostEffectPipeline::new(device, output_format, width, height, glyphs.view());

        log::info!(
            "Rain renderer ready: {}x{} output={:?} font face {} size {}",
            width,
            height,
            output_format,
            font.index(),
            font.size()
        );

        Ok(Self {
            font,
            glyphs,
            post,
            size: (width, height),
        })
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.size == (width, height) {
            return;
        }
        self.size = (width, height);
        self.glyphs.resize(device, width, height);
        self.post.resize(device, width, height, self.glyphs.view());
        log::debug!("Rain renderer resized to {}x{}", width, height);
    }

    /// Step `driver` by one frame and draw the result into `output`
    ///
    /// Returns the uniforms that were used, mostly for logging.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        driver: &mut FrameDriver,
        elapsed_ms: f32,
        output: &wgpu::TextureView,
    ) -> Result<FrameUniforms, RenderError> {
        let scene = self.glyphs.begin_frame();
        let uniforms = {
            let mut sink = SceneGlyphSink::new(scene, &self.font);
            driver.step(&mut sink, elapsed_ms)
        };

        self.glyphs.render(device, queue)?;

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Rain Post Encoder"),
        });
        self.post.render(queue, &mut encoder, &uniforms, output);
        queue.submit(std::iter::once(encoder.finish()));

        Ok(uniforms)
    }
}
