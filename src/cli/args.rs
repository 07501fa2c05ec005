//! Command-line argument definitions using clap.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::config::{ColorMode, Config};

/// Engine flag that silences warnings.
const NO_WARNINGS_FLAG: &str = "--no-warnings";

/// yt-dlp with colorized, aligned and timestamped output.
#[derive(Parser, Debug)]
#[command(
    name = "yt",
    version,
    disable_help_flag = true,
    disable_version_flag = true,
    about = "yt-dlp with colorized, aligned and timestamped output",
    long_about = "Runs yt-dlp and re-renders its log lines with colored tags, aligned messages \
                  and a time column.\n\n\
                  Every argument not listed below is passed to yt-dlp unchanged. \
                  Use `--` to pass arguments yt-dlp shares with this wrapper, e.g. `yt -- --examples`."
)]
pub struct Args {
    /// Print the wrapper's help. `-h` and `--help` go to yt-dlp.
    #[arg(long = "rich-help", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Print the wrapper's version. `-V` and `--version` go to yt-dlp.
    #[arg(long = "rich-version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Show usage examples and exit.
    #[arg(long)]
    pub examples: bool,

    /// Path to the wrapper's configuration file.
    #[arg(long = "rich-config", env = "YTDLPR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the default configuration to the config path and exit.
    #[arg(long = "rich-init-config")]
    pub init_config: bool,

    /// yt-dlp executable to run.
    #[arg(long = "engine-bin", env = "YTDLPR_ENGINE")]
    pub engine: Option<PathBuf>,

    /// When to color output.
    #[arg(long = "rich-color", value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Enable debug logging for the wrapper itself.
    #[arg(long = "rich-debug")]
    pub debug: bool,

    /// Arguments passed to yt-dlp.
    #[arg(
        value_name = "YT_DLP_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub engine_args: Vec<String>,
}

impl Args {
    /// Whether the engine was asked to silence warnings.
    pub fn no_warnings(&self) -> bool {
        self.engine_args.iter().any(|a| a == NO_WARNINGS_FLAG)
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(engine) = &self.engine {
            config.engine.binary = engine.clone();
        }

        if let Some(color) = self.color {
            config.output.color = color;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_warnings() {
            config.engine.no_warnings = true;
        }
    }
}
