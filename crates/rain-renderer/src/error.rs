//! Renderer error types

use thiserror::Error;

/// Errors raised while setting up or running the GPU side
#[derive(Debug, Error)]
pub enum RenderError {
    /// Font bytes could not be parsed
    #[error("invalid font data: {0}")]
    InvalidFont(String),

    /// Vello failed to create its renderer or draw the glyph layer
    #[error("vello: {0}")]
    Vello(#[from] vello::Error),
}
