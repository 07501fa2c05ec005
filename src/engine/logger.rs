//! The logging callback the engine reports through.

use std::io::Write;

use crate::error::Result;
use crate::render::theme::WARNING_TAG;
use crate::render::{classify, Classification, ConsoleSink, LineRenderer, Theme};

/// Callbacks invoked by the engine for each line it wants shown.
pub trait EngineLogger: Send + Sync {
    /// Status output (progress, extractor info).
    fn to_screen(&self, message: &str, skip_eol: bool, quiet: bool) -> Result<()>;

    /// Output the engine writes to standard output.
    fn to_stdout(&self, message: &str, skip_eol: bool, quiet: bool) -> Result<()> {
        self.to_screen(message, skip_eol, quiet)
    }

    /// A warning; with `only_once`, repeats of the same message are dropped.
    fn report_warning(&self, message: &str, only_once: bool) -> Result<()>;
}

/// Logger that classifies, styles and writes every line to a console sink.
pub struct RichLogger<W: Write> {
    theme: Theme,
    renderer: LineRenderer,
    sink: ConsoleSink<W>,
    no_warnings: bool,
}

impl<W: Write> RichLogger<W> {
    pub fn new(theme: Theme, renderer: LineRenderer, sink: ConsoleSink<W>) -> Self {
        Self {
            theme,
            renderer,
            sink,
            no_warnings: false,
        }
    }

    /// Drop all warnings.
    pub fn with_no_warnings(mut self, no_warnings: bool) -> Self {
        self.no_warnings = no_warnings;
        self
    }

    /// Close any line left open by a progress update.
    pub fn finish(&self) -> Result<()> {
        self.sink.finish()
    }

    pub fn into_sink(self) -> ConsoleSink<W> {
        self.sink
    }

    fn log(&self, message: &str, skip_eol: bool, quiet: bool) -> Result<()> {
        if quiet {
            return Ok(());
        }

        let line = classify(message);
        let style = self.theme.resolve(&line);
        match self.renderer.render(&line, style, skip_eol, quiet) {
            Some(rendered) => self.sink.emit(&rendered),
            None => Ok(()),
        }
    }
}

impl<W: Write + Send> EngineLogger for RichLogger<W> {
    fn to_screen(&self, message: &str, skip_eol: bool, quiet: bool) -> Result<()> {
        self.log(message, skip_eol, quiet)
    }

    fn report_warning(&self, message: &str, only_once: bool) -> Result<()> {
        if self.no_warnings {
            return Ok(());
        }

        let line = Classification::Bracketed {
            tag: WARNING_TAG,
            message,
        };
        let style = self.theme.resolve(&line);
        let Some(rendered) = self.renderer.render(&line, style, false, false) else {
            return Ok(());
        };

        if only_once {
            self.sink.warn_once(message, &rendered)?;
        } else {
            self.sink.emit(&rendered)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};

    fn fixed_clock() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .expect("unambiguous local time")
    }

    fn logger() -> RichLogger<Vec<u8>> {
        let sink = ConsoleSink::new(Vec::new(), "%H:%M:%S").with_clock(fixed_clock);
        RichLogger::new(Theme::default(), LineRenderer::default(), sink)
    }

    fn output(logger: RichLogger<Vec<u8>>) -> String {
        String::from_utf8(logger.into_sink().into_inner()).unwrap()
    }

    #[test]
    fn test_to_screen_renders_line() {
        let logger = logger();
        logger.to_screen("[download] 50% of 10MB", false, false).unwrap();
        logger
            .to_stdout("Deleting original file foo.mp4 (pass -k to keep)", false, false)
            .unwrap();
        assert_eq!(
            output(logger),
            "09:30:00 [download] 50% of 10MB\n\
             09:30:00 [deleting] Deleting original file foo.mp4 (pass -k to keep)\n"
        );
    }

    #[test]
    fn test_quiet_suppresses_everything() {
        let logger = logger();
        logger.to_screen("[download] 50%", false, true).unwrap();
        logger.to_stdout("plain", true, true).unwrap();
        assert_eq!(output(logger), "");
    }

    #[test]
    fn test_warning_once() {
        let logger = logger();
        logger.report_warning("Falling back to generic", true).unwrap();
        logger.report_warning("Falling back to generic", true).unwrap();
        assert_eq!(output(logger), "09:30:00 [WARNING]  Falling back to generic\n");
    }

    #[test]
    fn test_warning_repeats_without_only_once() {
        let logger = logger();
        logger.report_warning("retrying", false).unwrap();
        logger.report_warning("retrying", false).unwrap();
        assert_eq!(output(logger).lines().count(), 2);
    }

    #[test]
    fn test_no_warnings_drops_before_dedup() {
        let logger = logger().with_no_warnings(true);
        logger.report_warning("hidden", true).unwrap();
        logger.report_warning("hidden", false).unwrap();
        assert_eq!(output(logger), "");
    }
}
