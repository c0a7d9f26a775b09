//! Glyph layer - renders this frame's glyphs to a transparent texture
//!
//! The scene is rebuilt from scratch every frame; persistence (the fading
//! trails) is handled later by the trail pass, not here.

use vello::{AaConfig, RenderParams, Renderer, RendererOptions, Scene, peniko};

use crate::RenderError;
use crate::post::RenderTarget;

/// Vello renderer, scene and storage texture for the glyph layer
pub struct GlyphLayer {
    renderer: Renderer,
    scene: Scene,
    target: RenderTarget,
}

impl GlyphLayer {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Result<Self, RenderError> {
        let renderer = Renderer::new(
            device,
            RendererOptions {
                pipeline_cache: None,
                ..Default::default()
            },
        )?;

        Ok(Self {
            renderer,
            scene: Scene::new(),
            target: Self::create_target(device, width, height),
        })
    }

    // Vello writes through a storage binding and requires Rgba8Unorm
    fn create_target(device: &wgpu::Device, width: u32, height: u32) -> RenderTarget {
        RenderTarget::new(
            device,
            "Glyph Layer",
            width,
            height,
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::TEXTURE_BINDING,
        )
    }

    /// Recreate the target if the size changed
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        if self.target.size() != (width.max(1), height.max(1)) {
            self.target = Self::create_target(device, width, height);
        }
    }

    /// Clear the scene and hand it out for drawing
    pub fn begin_frame(&mut self) -> &mut Scene {
        self.scene.reset();
        &mut self.scene
    }

    /// Rasterize the current scene into the layer texture
    ///
    /// Vello submits its own command buffer, so this must run before the
    /// post-effect encoder is submitted.
    pub fn render(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) -> Result<(), RenderError> {
        let (width, height) = self.target.size();
        let params = RenderParams {
            base_color: peniko::Color::TRANSPARENT,
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        self.renderer
            .render_to_texture(device, queue, &self.scene, &self.target.view, &params)?;
        Ok(())
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.target.view
    }
}
