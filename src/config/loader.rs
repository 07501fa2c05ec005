//! Configuration structures and loading logic.

use crate::config::modes::ColorMode;
use crate::error::{Error, Result};
use crate::render::DEFAULT_LEVEL_WIDTH;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Terminal output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// strftime pattern for the time column.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Color of the time column as "r;g;b".
    #[serde(default = "default_time_color")]
    pub time_color: String,

    /// Column width for `[tag]` plus padding.
    #[serde(default = "default_level_width")]
    pub level_width: usize,

    /// When to emit ANSI styling (auto, always, never).
    #[serde(default)]
    pub color: ColorMode,

    /// Whether repeated warnings from the engine are shown once.
    #[serde(default = "default_true")]
    pub dedupe_warnings: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            time_color: default_time_color(),
            level_width: default_level_width(),
            color: ColorMode::default(),
            dedupe_warnings: true,
        }
    }
}

/// Engine invocation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path or name of the yt-dlp executable.
    #[serde(default = "default_binary")]
    pub binary: PathBuf,

    /// Drop all warnings.
    #[serde(default)]
    pub no_warnings: bool,

    /// Whether to pass styled progress templates to the engine.
    #[serde(default = "default_true")]
    pub progress_template: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            no_warnings: false,
            progress_template: true,
        }
    }
}

/// Style configuration. Values are style strings like `"bold bright_red"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Style for tags that name a known extractor.
    #[serde(default = "default_extractor_style")]
    pub extractor: String,

    /// Style for highlighted file names.
    #[serde(default = "default_highlight_style")]
    pub highlight: String,

    /// Per-tag styles, layered over the built-in ones.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            extractor: default_extractor_style(),
            highlight: default_highlight_style(),
            tags: BTreeMap::new(),
        }
    }
}

fn default_time_format() -> String {
    "%X".to_string()
}

fn default_time_color() -> String {
    "66;94;125".to_string()
}

fn default_level_width() -> usize {
    DEFAULT_LEVEL_WIDTH
}

fn default_binary() -> PathBuf {
    PathBuf::from("yt-dlp")
}

fn default_extractor_style() -> String {
    "underline".to_string()
}

fn default_highlight_style() -> String {
    "bold blue".to_string()
}

fn default_true() -> bool {
    true
}

/// Default config file location (`<config dir>/yt-dlpr/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "yt-dlpr")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path`, or from the default location when none is given.
    ///
    /// An explicitly given file must exist; a missing default file yields
    /// the default configuration.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => {
                tracing::debug!("No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write the default configuration to `path`, creating parent
    /// directories. An existing file is never replaced.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(Error::Config(format!(
                "{} already exists; remove it first to regenerate",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::default().save(path)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
