//! Common test utilities
//!
//! Isolated config directories and a seeded frame driver.

#![allow(dead_code)]

use std::path::PathBuf;

use rain_core::{FrameDriver, RainSettings};
use tempfile::TempDir;

/// Test environment with isolated config directory
pub struct TestEnvironment {
    /// Temporary directory for test config
    pub temp_dir: TempDir,
    /// Path to the config directory
    pub config_dir: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            config_dir,
        }
    }

    /// Write a config file and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let config_path = self.config_path();
        std::fs::write(&config_path, content).expect("Failed to write test config");
        config_path
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// Driver with a fixed seed and default settings otherwise
pub fn seeded_driver(seed: u64, width: u32, height: u32) -> FrameDriver {
    let settings = RainSettings {
        seed: Some(seed),
        ..Default::default()
    };
    FrameDriver::new(settings, width, height)
}
