//! Engine integration.
//!
//! Provides:
//! - The logging callback interface the engine reports through
//! - Splitting of engine output into lines and progress updates
//! - Running yt-dlp and querying its extractor list

pub mod logger;
pub mod segments;
pub mod template;
pub mod ytdlp;

pub use logger::{EngineLogger, RichLogger};
pub use segments::{Segment, SegmentSplitter, Terminator};
pub use template::progress_template_args;
pub use ytdlp::{list_extractors, Stream, YtDlp};
