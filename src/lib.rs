//! yt-dlpr - colorized, aligned and timestamped output for yt-dlp
//!
//! This library runs yt-dlp and re-renders its log lines for the terminal.
//!
//! # Features
//!
//! - Colored `[tag]` prefixes, with a fallback style for extractor names
//! - Messages aligned in a fixed column
//! - A time column in front of every line
//! - In-place progress updates
//! - Warnings shown once per run
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use yt_dlpr::engine::{RichLogger, YtDlp};
//! use yt_dlpr::render::{ConsoleSink, LineRenderer, Theme};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = ConsoleSink::new(std::io::stdout(), "%X").with_colors(true);
//!     let logger = RichLogger::new(Theme::default(), LineRenderer::default(), sink);
//!     let engine = YtDlp::new("yt-dlp", Arc::new(logger));
//!
//!     let code = engine.run(&["https://example.com/video".to_string()]).await?;
//!     std::process::exit(code);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod render;

// Re-exports for convenience
pub use config::{ColorMode, Config};
pub use engine::{EngineLogger, RichLogger, YtDlp};
pub use error::{Error, Result};
pub use render::{classify, Classification, ConsoleSink, LineRenderer, Theme};
