//! Rendering pipeline for engine log lines.
//!
//! Provides:
//! - Line classification (`[tag] message`, deletion notices, plain text)
//! - Tag styles with an extractor-name fallback
//! - Aligned, highlighted line assembly
//! - Timestamped output with warn-once de-duplication

pub mod classify;
pub mod highlight;
pub mod line;
pub mod sink;
pub mod style;
pub mod theme;

pub use classify::{classify, Classification};
pub use highlight::Highlighter;
pub use line::{padding, LineRenderer, RenderedLine, Segment, DEFAULT_LEVEL_WIDTH};
pub use sink::{Clock, ConsoleSink};
pub use style::{Color, Rgb, Style};
pub use theme::{ExtractorNames, Theme};
