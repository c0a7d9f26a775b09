//! Configuration management for the rain
//!
//! Loads config from ~/.config/rain/config.toml with sensible defaults.
//! Set `RAIN_CONFIG_DIR` to read from another directory.

use rain_core::RainSettings;
use rain_core::frame::{DEFAULT_FADE_ALPHA, DEFAULT_SYMBOL_SIZE};
use rain_core::shockwave::DEFAULT_STEP;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "RAIN_CONFIG_DIR";

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font family names in order of preference (fallback chain)
    /// The generic monospace family is tried after all of these
    pub family: Vec<String>,
    /// Glyph size in pixels, also the column spacing
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: vec![
                "MS Gothic".to_string(),
                "Noto Sans Mono CJK JP".to_string(),
                "Noto Sans CJK JP".to_string(),
                "Osaka-Mono".to_string(),
                "Hiragino Kaku Gothic ProN".to_string(),
                "Consolas".to_string(),
                "DejaVu Sans Mono".to_string(),
            ],
            size: DEFAULT_SYMBOL_SIZE,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Fraction of the monitor size used for the window
    pub scale: f64,
    /// Used when no monitor size is reported
    pub fallback_width: u32,
    pub fallback_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Digital Rain".to_string(),
            scale: 0.5,
            fallback_width: 960,
            fallback_height: 540,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RainConfig {
    /// Fixed seed for a reproducible run
    pub seed: Option<u64>,
    /// Alpha of the black layer laid over each previous frame (0-255)
    pub fade_alpha: u8,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fade_alpha: DEFAULT_FADE_ALPHA,
        }
    }
}

/// Shockwave configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShockwaveConfig {
    /// Progress added per frame
    pub step: f32,
}

impl Default for ShockwaveConfig {
    fn default() -> Self {
        Self { step: DEFAULT_STEP }
    }
}

/// Post-effect switches; a disabled effect passes the frame through
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub crt: bool,
    pub shockwave: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            crt: true,
            shockwave: true,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub window: WindowConfig,
    pub rain: RainConfig,
    pub shockwave: ShockwaveConfig,
    pub effects: EffectsConfig,
}

impl Config {
    /// Get the config directory path (`$RAIN_CONFIG_DIR` or ~/.config/rain)
    pub fn config_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        dirs::home_dir().map(|p| p.join(".config").join("rain"))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::info!("Could not determine config path, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`; missing or broken files yield defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config {:?}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read config {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Simulation settings for a `FrameDriver`
    pub fn to_settings(&self) -> RainSettings {
        RainSettings {
            symbol_size: self.font.size,
            fade_alpha: self.rain.fade_alpha,
            shockwave_step: self.shockwave.step,
            seed: self.rain.seed,
            crt_enabled: self.effects.crt,
            shockwave_enabled: self.effects.shockwave,
        }
    }
}
