//! Splitting engine output into lines and in-place progress updates.

/// How a segment of output ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `\n` (or `\r\n`), or end of stream.
    Newline,
    /// A bare `\r`: the next segment replaces this one.
    CarriageReturn,
}

/// One line, or one progress update, of engine output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub terminator: Terminator,
}

impl Segment {
    /// Whether the line should be written without a trailing newline.
    pub fn skip_eol(&self) -> bool {
        self.terminator == Terminator::CarriageReturn
    }
}

/// Incremental splitter over raw output bytes.
#[derive(Debug, Default)]
pub struct SegmentSplitter {
    buf: Vec<u8>,
    /// Text ended by a `\r` whose follower has not arrived yet.
    pending: Option<Vec<u8>>,
}

impl SegmentSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed bytes, returning every segment they complete.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Segment> {
        let mut segments = Vec::new();

        for &byte in bytes {
            if let Some(text) = self.pending.take() {
                if byte == b'\n' {
                    segments.push(segment(text, Terminator::Newline));
                    continue;
                }
                segments.push(segment(text, Terminator::CarriageReturn));
            }

            match byte {
                b'\n' => {
                    let text = std::mem::take(&mut self.buf);
                    segments.push(segment(text, Terminator::Newline));
                }
                b'\r' => self.pending = Some(std::mem::take(&mut self.buf)),
                _ => self.buf.push(byte),
            }
        }

        segments
    }

    /// Flush whatever is left at end of stream.
    pub fn finish(&mut self) -> Vec<Segment> {
        let mut segments = Vec::new();
        if let Some(text) = self.pending.take() {
            segments.push(segment(text, Terminator::Newline));
        }
        if !self.buf.is_empty() {
            segments.push(segment(std::mem::take(&mut self.buf), Terminator::Newline));
        }
        segments
    }
}

fn segment(bytes: Vec<u8>, terminator: Terminator) -> Segment {
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    };
    Segment { text, terminator }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(segments: &[Segment]) -> Vec<(&str, bool)> {
        segments
            .iter()
            .map(|s| (s.text.as_str(), s.skip_eol()))
            .collect()
    }

    #[test]
    fn test_newlines() {
        let mut splitter = SegmentSplitter::new();
        let segments = splitter.push(b"[info] a\n[info] b\n");
        assert_eq!(texts(&segments), vec![("[info] a", false), ("[info] b", false)]);
        assert!(splitter.finish().is_empty());
    }

    #[test]
    fn test_progress_updates() {
        let mut splitter = SegmentSplitter::new();
        let mut segments = splitter.push(b"\r[download]  1.0%\r[download] 50.0%");
        segments.extend(splitter.push(b"\r[download] 100%\n"));
        assert_eq!(
            texts(&segments),
            vec![
                ("", true),
                ("[download]  1.0%", true),
                ("[download] 50.0%", true),
                ("[download] 100%", false),
            ]
        );
    }

    #[test]
    fn test_crlf_across_chunks() {
        let mut splitter = SegmentSplitter::new();
        let mut segments = splitter.push(b"line one\r");
        assert!(segments.is_empty());
        segments.extend(splitter.push(b"\nline two\r\n"));
        assert_eq!(texts(&segments), vec![("line one", false), ("line two", false)]);
    }

    #[test]
    fn test_finish_flushes_partial_line() {
        let mut splitter = SegmentSplitter::new();
        assert!(splitter.push(b"no newline").is_empty());
        assert_eq!(texts(&splitter.finish()), vec![("no newline", false)]);

        assert!(splitter.push(b"ends with cr\r").is_empty());
        assert_eq!(texts(&splitter.finish()), vec![("ends with cr", false)]);
    }

    #[test]
    fn test_multibyte_split_between_chunks() {
        let mut splitter = SegmentSplitter::new();
        let bytes = "[info] café\n".as_bytes();
        let (a, b) = bytes.split_at(bytes.len() - 2);
        let mut segments = splitter.push(a);
        segments.extend(splitter.push(b));
        assert_eq!(texts(&segments), vec![("[info] café", false)]);
    }
}
