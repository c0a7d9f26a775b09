//! Rain - GPU-accelerated digital rain with CRT and shockwave post-effects
//!
//! The pieces live in:
//! - `rain-core` - simulation (columns, glyphs, shockwave timer, frame driver)
//! - `rain-renderer` - glyph layer and post-effect passes
//!
//! This crate adds configuration, font discovery and the window shell.

pub mod config;
pub mod font;

pub use config::Config;
