//! Configuration module for yt-dlpr.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument merging
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{default_config_path, Config, EngineConfig, OutputConfig, ThemeConfig};
pub use modes::ColorMode;
pub use validation::validate_config;
