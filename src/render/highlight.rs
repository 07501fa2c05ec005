//! Highlighting of file names inside log messages.
//!
//! Spans are found in the message of every line category, bracketed and
//! deletion notices included, not only in plain lines. That is what lets the
//! `Deleting original file` pattern fire at all.

use std::ops::Range;

use regex::Regex;

/// Patterns whose first capture group is highlighted.
const PATTERNS: [&str; 2] = [
    r"Deleting original file (.*?) \(pass -k to keep\)",
    r"Destination: (.*)",
];

/// Finds the spans of a message that get the highlight style.
#[derive(Debug, Clone)]
pub struct Highlighter {
    patterns: Vec<Regex>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        let patterns = PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("highlight pattern is valid"))
            .collect();
        Self { patterns }
    }

    /// Byte ranges to highlight, sorted and non-overlapping.
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans: Vec<Range<usize>> = self
            .patterns
            .iter()
            .flat_map(|re| re.captures_iter(text))
            .filter_map(|caps| caps.get(1))
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
            .collect();

        spans.sort_by_key(|r| r.start);

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
        for span in spans {
            match merged.last_mut() {
                Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighted(text: &str) -> Vec<&str> {
        Highlighter::new()
            .spans(text)
            .into_iter()
            .map(|r| &text[r])
            .collect()
    }

    #[test]
    fn test_destination() {
        assert_eq!(
            highlighted("Destination: video.f137.mp4"),
            vec!["video.f137.mp4"]
        );
    }

    #[test]
    fn test_deleting_original() {
        assert_eq!(
            highlighted("Deleting original file foo.mp4 (pass -k to keep)"),
            vec!["foo.mp4"]
        );
    }

    #[test]
    fn test_destination_stops_at_newline() {
        assert_eq!(
            highlighted("Destination: a.mp4\nnext line"),
            vec!["a.mp4"]
        );
    }

    #[test]
    fn test_no_match() {
        assert!(highlighted("50% of 10MB").is_empty());
        assert!(highlighted("Destination: ").is_empty());
    }
}
