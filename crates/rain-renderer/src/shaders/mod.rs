//! Shader module - WGSL shaders for the post-effect passes
//!
//! Shaders are stored as external .wgsl files and included at compile time.
//! All three share the same vertex stage, a 4-vertex triangle strip whose
//! quad spans [-1, 3] in clip space and so covers the screen, and the same
//! bind layout: uniforms at binding 0, source texture at 1, sampler at 2.

/// Built-in shaders included at compile time
pub mod builtin {
    /// Trail shader - fades the previous frame and lays the new glyphs on top
    pub const TRAIL: &str = include_str!("trail.wgsl");

    /// CRT shader - scanlines, warp, aberration, grille, roll line, noise, vignette
    pub const CRT: &str = include_str!("crt.wgsl");

    /// Shockwave shader - expanding refraction ring with chromatic split
    pub const SHOCKWAVE: &str = include_str!("shockwave.wgsl");
}
