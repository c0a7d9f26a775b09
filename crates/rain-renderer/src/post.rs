//! Post-effect pipeline
//!
//! Three full-screen passes per frame, always all three:
//! 1. Trail: glyph layer -> persistent trail target (fade + composite)
//! 2. CRT: trail target -> CRT target
//! 3. Shockwave: CRT target -> output (the surface)
//!
//! A disabled effect still runs as a pass-through so the chain shape never
//! changes between frames.

use rain_core::{CrtUniforms, FrameUniforms, ShockwaveUniforms, TrailUniforms};

use crate::pass::FullscreenPass;
use crate::shaders::builtin;

/// Format of the trail and CRT intermediate textures
pub const INTERMEDIATE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Offscreen render target
pub struct RenderTarget {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        usage: wgpu::TextureUsages,
    ) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage,
            view_formats: &[],
        });

        let view = texture.create_view(&Default::default());

        Self {
            texture,
            view,
            width,
            height,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

fn intermediate(device: &wgpu::Device, label: &str, width: u32, height: u32) -> RenderTarget {
    RenderTarget::new(
        device,
        label,
        width,
        height,
        INTERMEDIATE_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
}

/// Trail, CRT and shockwave passes with their intermediate targets
pub struct PostEffectPipeline {
    trail: FullscreenPass<TrailUniforms>,
    crt: FullscreenPass<CrtUniforms>,
    shockwave: FullscreenPass<ShockwaveUniforms>,

    trail_target: RenderTarget,
    crt_target: RenderTarget,

    trail_bind_group: wgpu::BindGroup,
    crt_bind_group: wgpu::BindGroup,
    shockwave_bind_group: wgpu::BindGroup,

    /// Trail target holds garbage until its first clear
    needs_clear: bool,
}

impl PostEffectPipeline {
    /// Build the passes; `glyph_view` is the layer the trail pass reads
    pub fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        glyph_view: &wgpu::TextureView,
    ) -> Self {
        let trail = FullscreenPass::new(
            device,
            "Trail Pass",
            builtin::TRAIL,
            INTERMEDIATE_FORMAT,
            Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
        );
        let crt = FullscreenPass::new(
            device,
            "CRT Pass",
            builtin::CRT,
            INTERMEDIATE_FORMAT,
            Some(wgpu::BlendState::REPLACE),
        );
        let shockwave = FullscreenPass::new(
            device,
            "Shockwave Pass",
            builtin::SHOCKWAVE,
            output_format,
            Some(wgpu::BlendState::REPLACE),
        );

        let trail_target = intermediate(device, "Trail Target", width, height);
        let crt_target = intermediate(device, "CRT Target", width, height);

        let trail_bind_group = trail.create_bind_group(device, glyph_view);
        let crt_bind_group = crt.create_bind_group(device, &trail_target.view);
        let shockwave_bind_group = shockwave.create_bind_group(device, &crt_target.view);

        Self {
            trail,
            crt,
            shockwave,
            trail_target,
            crt_target,
            trail_bind_group,
            crt_bind_group,
            shockwave_bind_group,
            needs_clear: true,
        }
    }

    /// Recreate targets and bind groups for a new size
    ///
    /// `glyph_view` must be the (possibly recreated) glyph layer view.
    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        width: u32,
        height: u32,
        glyph_view: &wgpu::TextureView,
    ) {
        if self.trail_target.size() != (width.max(1), height.max(1)) {
            self.trail_target = intermediate(device, "Trail Target", width, height);
            self.crt_target = intermediate(device, "CRT Target", width, height);
            self.needs_clear = true;
        }

        self.trail_bind_group = self.trail.create_bind_group(device, glyph_view);
        self.crt_bind_group = self.crt.create_bind_group(device, &self.trail_target.view);
        self.shockwave_bind_group = self
            .shockwave
            .create_bind_group(device, &self.crt_target.view);
    }

    /// Upload uniforms and record all three passes, ending in `output`
    pub fn render(
        &mut self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        uniforms: &FrameUniforms,
        output: &wgpu::TextureView,
    ) {
        self.trail.update_uniforms(queue, &uniforms.trail);
        self.crt.update_uniforms(queue, &uniforms.crt);
        self.shockwave.update_uniforms(queue, &uniforms.shockwave);

        let trail_load = if self.needs_clear {
            self.needs_clear = false;
            wgpu::LoadOp::Clear(wgpu::Color::BLACK)
        } else {
            wgpu::LoadOp::Load
        };

        self.trail
            .render(encoder, &self.trail_target.view, &self.trail_bind_group, trail_load);
        self.crt.render(
            encoder,
            &self.crt_target.view,
            &self.crt_bind_group,
            wgpu::LoadOp::Clear(wgpu::Color::BLACK),
        );
        self.shockwave.render(
            encoder,
            output,
            &self.shockwave_bind_group,
            wgpu::LoadOp::Clear(wgpu::Color::BLACK),
        );
    }
}
