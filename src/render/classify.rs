//! Classification of raw engine log lines.

use std::sync::OnceLock;

use regex::Regex;

/// The category of a log line, borrowed from the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    /// `[tag] message`
    Bracketed { tag: &'a str, message: &'a str },
    /// A line starting with "delet", any casing.
    DeletionNotice { message: &'a str },
    /// Anything else.
    Plain { message: &'a str },
}

impl<'a> Classification<'a> {
    /// The text shown after the tag (or on its own for plain lines).
    pub fn message(&self) -> &'a str {
        match *self {
            Classification::Bracketed { message, .. }
            | Classification::DeletionNotice { message }
            | Classification::Plain { message } => message,
        }
    }
}

fn bracket_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)\A\[(\w+)\] ?(.*)").expect("bracket pattern is valid"))
}

fn starts_with_delet(line: &str) -> bool {
    line.get(..5)
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case("delet"))
}

/// Classify a raw log line. Every line yields exactly one category; the
/// bracket form is checked before the deletion prefix.
pub fn classify(line: &str) -> Classification<'_> {
    if let Some(caps) = bracket_pattern().captures(line) {
        if let (Some(tag), Some(message)) = (caps.get(1), caps.get(2)) {
            return Classification::Bracketed {
                tag: tag.as_str(),
                message: message.as_str(),
            };
        }
    }

    if starts_with_delet(line) {
        return Classification::DeletionNotice { message: line };
    }

    Classification::Plain { message: line }
}
