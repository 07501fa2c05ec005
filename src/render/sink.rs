//! Timestamped output and warning de-duplication.

use std::collections::HashSet;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::render::line::RenderedLine;
use crate::render::style::Rgb;

/// Moves the cursor to column 0 and clears the line.
const REWRITE_LINE: &str = "\r\x1b[2K";

/// Source of the current time.
pub type Clock = fn() -> DateTime<Local>;

struct SinkState<W> {
    out: W,
    warned: HashSet<String>,
    /// The last write left off its newline.
    line_open: bool,
}

/// Writes rendered lines behind a time column.
///
/// The writer and the warned set share one lock, so concurrent callers never
/// interleave output or emit the same warn-once message twice.
pub struct ConsoleSink<W: Write> {
    state: Mutex<SinkState<W>>,
    time_format: String,
    time_color: Option<Rgb>,
    colors: bool,
    interactive: bool,
    clock: Clock,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, time_format: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(SinkState {
                out,
                warned: HashSet::new(),
                line_open: false,
            }),
            time_format: time_format.into(),
            time_color: None,
            colors: false,
            interactive: false,
            clock: Local::now,
        }
    }

    /// Emit ANSI styling.
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Color of the time column when colors are on.
    pub fn with_time_color(mut self, color: Option<Rgb>) -> Self {
        self.time_color = color;
        self
    }

    /// Whether the output is a terminal that can rewrite the current line.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Write a line with the time column in front.
    pub fn emit(&self, line: &RenderedLine) -> Result<()> {
        let mut state = self.lock();
        self.write_line(&mut state, line)
    }

    /// Emit `line` unless `message` was already warned about. Returns whether
    /// anything was written. A failed write leaves the message unrecorded.
    pub fn warn_once(&self, message: &str, line: &RenderedLine) -> Result<bool> {
        let mut state = self.lock();
        if state.warned.contains(message) {
            return Ok(false);
        }
        self.write_line(&mut state, line)?;
        state.warned.insert(message.to_string());
        Ok(true)
    }

    /// Terminate a line left open by a progress update.
    pub fn finish(&self) -> Result<()> {
        let mut state = self.lock();
        if state.line_open {
            state.out.write_all(b"\n")?;
            state.out.flush()?;
            state.line_open = false;
        }
        Ok(())
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        match self.state.into_inner() {
            Ok(state) => state.out,
            Err(poisoned) => poisoned.into_inner().out,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SinkState<W>> {
        // A panic mid-write leaves nothing worth discarding
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn write_line(&self, state: &mut SinkState<W>, line: &RenderedLine) -> Result<()> {
        let time = (self.clock)().format(&self.time_format).to_string();
        let indent = " ".repeat(time.chars().count() + 1);
        let body = line.styled(self.colors).replace('\n', &format!("\n{}", indent));

        if state.line_open {
            let reset = if self.interactive { REWRITE_LINE } else { "\n" };
            state.out.write_all(reset.as_bytes())?;
        }

        let time = match self.time_color {
            Some(color) if self.colors => color.paint(&time),
            _ => time,
        };
        write!(state.out, "{} {}", time, body)?;

        if line.end_of_line {
            state.out.write_all(b"\n")?;
        }
        state.out.flush()?;
        state.line_open = !line.end_of_line;

        Ok(())
    }
}
