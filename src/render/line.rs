//! Assembly of styled, aligned output lines.

use crate::render::classify::Classification;
use crate::render::highlight::Highlighter;
use crate::render::style::Style;
use crate::render::theme::DELETING_LABEL;

/// Default column width reserved for `[tag]` plus padding.
pub const DEFAULT_LEVEL_WIDTH: usize = 11;

/// Number of spaces after `[tag]` so messages line up at `width`.
///
/// Tags too long to fit get a single space.
pub fn padding(tag_len: usize, width: usize) -> usize {
    if tag_len > width.saturating_sub(2) {
        1
    } else {
        width - tag_len - 2
    }
}

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A line ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub segments: Vec<Segment>,
    /// Whether a newline follows. Progress lines leave it off so the next
    /// write can replace them.
    pub end_of_line: bool,
}

impl RenderedLine {
    /// The text without any styling.
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// The text with ANSI styling when `colors` is set.
    pub fn styled(&self, colors: bool) -> String {
        self.segments
            .iter()
            .map(|s| s.style.paint(&s.text, colors))
            .collect()
    }
}

/// Turns classified lines into rendered lines.
#[derive(Debug, Clone)]
pub struct LineRenderer {
    level_width: usize,
    highlighter: Highlighter,
    highlight: Style,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL_WIDTH, Style::plain())
    }
}

impl LineRenderer {
    pub fn new(level_width: usize, highlight: Style) -> Self {
        Self {
            level_width,
            highlighter: Highlighter::new(),
            highlight,
        }
    }

    /// Render `line` with its tag in `style`. Returns `None` when `quiet`.
    pub fn render(
        &self,
        line: &Classification<'_>,
        style: Style,
        skip_eol: bool,
        quiet: bool,
    ) -> Option<RenderedLine> {
        if quiet {
            return None;
        }

        let mut segments = Vec::new();
        match *line {
            Classification::Bracketed { tag, message } => {
                self.push_tag(&mut segments, tag, style);
                self.push_message(&mut segments, message);
            }
            Classification::DeletionNotice { message } => {
                self.push_tag(&mut segments, DELETING_LABEL, style);
                self.push_message(&mut segments, message);
            }
            Classification::Plain { message } => {
                // Plain text is never interpreted as markup
                self.push_message(&mut segments, message);
            }
        }

        Some(RenderedLine {
            segments,
            end_of_line: !skip_eol,
        })
    }

    fn push_tag(&self, segments: &mut Vec<Segment>, tag: &str, style: Style) {
        let pad = padding(tag.chars().count(), self.level_width);
        segments.push(Segment::new("[", Style::plain()));
        segments.push(Segment::new(tag, style));
        segments.push(Segment::new(format!("]{}", " ".repeat(pad)), Style::plain()));
    }

    fn push_message(&self, segments: &mut Vec<Segment>, message: &str) {
        let mut cursor = 0;
        for span in self.highlighter.spans(message) {
            if span.start > cursor {
                segments.push(Segment::new(&message[cursor..span.start], Style::plain()));
            }
            segments.push(Segment::new(&message[span.clone()], self.highlight));
            cursor = span.end;
        }
        if cursor < message.len() || segments.is_empty() {
            segments.push(Segment::new(&message[cursor..], Style::plain()));
        }
    }
}
