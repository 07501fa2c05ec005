//! Running yt-dlp and routing its output through an [`EngineLogger`].

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::engine::logger::EngineLogger;
use crate::engine::segments::{Segment, SegmentSplitter};
use crate::engine::template::progress_template_args;
use crate::error::{exit_codes, Error, Result};
use crate::render::theme::{ExtractorNames, ERROR_TAG};

/// Prefix yt-dlp puts on warnings written to stderr.
const WARNING_PREFIX: &str = "WARNING: ";

/// Prefix yt-dlp puts on errors written to stderr.
const ERROR_PREFIX: &str = "ERROR: ";

/// Read buffer size for engine output.
const READ_CHUNK: usize = 8 * 1024;

/// Which engine stream a segment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

fn spawn_error(binary: &Path, err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::EngineNotFound(binary.display().to_string())
    } else {
        Error::Io(err)
    }
}

/// Query the engine for the names of its extractors.
pub async fn list_extractors(binary: &Path) -> Result<ExtractorNames> {
    let output = Command::new(binary)
        .arg("--list-extractors")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .await
        .map_err(|e| spawn_error(binary, e))?;

    if !output.status.success() {
        return Err(Error::Engine(format!(
            "--list-extractors exited with {}",
            output.status
        )));
    }

    Ok(ExtractorNames::from_listing(&String::from_utf8_lossy(
        &output.stdout,
    )))
}

/// Handle to the yt-dlp executable.
pub struct YtDlp {
    binary: PathBuf,
    logger: Arc<dyn EngineLogger>,
    /// `Some(colors)` when progress templates are passed to the engine.
    progress_template: Option<bool>,
    dedupe_warnings: bool,
}

impl YtDlp {
    pub fn new(binary: impl Into<PathBuf>, logger: Arc<dyn EngineLogger>) -> Self {
        Self {
            binary: binary.into(),
            logger,
            progress_template: None,
            dedupe_warnings: false,
        }
    }

    /// Pass styled progress templates to the engine.
    pub fn with_progress_template(mut self, colors: bool) -> Self {
        self.progress_template = Some(colors);
        self
    }

    /// Report each distinct stderr warning only once.
    pub fn with_dedupe_warnings(mut self, dedupe: bool) -> Self {
        self.dedupe_warnings = dedupe;
        self
    }

    /// Run the engine with `args` and return its exit code.
    ///
    /// The child is killed if this future is dropped before it exits.
    pub async fn run(&self, args: &[String]) -> Result<i32> {
        let mut command = Command::new(&self.binary);
        if let Some(colors) = self.progress_template {
            command.args(progress_template_args(colors));
        }
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!("Starting {} with {} argument(s)", self.binary.display(), args.len());
        let mut child = command
            .spawn()
            .map_err(|e| spawn_error(&self.binary, e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::Engine("No stdout".into()))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::Engine("No stderr".into()))?;

        let logger = self.logger.as_ref();
        let (status, (), ()) = tokio::try_join!(
            async { child.wait().await.map_err(Error::from) },
            pump(stdout, Stream::Stdout, logger, self.dedupe_warnings),
            pump(stderr, Stream::Stderr, logger, self.dedupe_warnings),
        )?;

        tracing::debug!("Engine exited with {}", status);
        Ok(status.code().unwrap_or(exit_codes::ABORT))
    }
}

/// Read `reader` to the end, dispatching each segment to `logger`.
pub async fn pump<R: AsyncRead + Unpin>(
    mut reader: R,
    stream: Stream,
    logger: &dyn EngineLogger,
    dedupe_warnings: bool,
) -> Result<()> {
    let mut splitter = SegmentSplitter::new();
    let mut buf = vec![0u8; READ_CHUNK];

    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        for segment in splitter.push(&buf[..n]) {
            dispatch(&segment, stream, logger, dedupe_warnings)?;
        }
    }

    for segment in splitter.finish() {
        dispatch(&segment, stream, logger, dedupe_warnings)?;
    }
    Ok(())
}

/// Route one segment of engine output to the matching callback.
pub fn dispatch(
    segment: &Segment,
    stream: Stream,
    logger: &dyn EngineLogger,
    dedupe_warnings: bool,
) -> Result<()> {
    let text = segment.text.as_str();
    let skip_eol = segment.skip_eol();

    // Leading `\r` of a progress update
    if text.is_empty() && skip_eol {
        return Ok(());
    }

    match stream {
        Stream::Stdout => logger.to_stdout(text, skip_eol, false),
        Stream::Stderr => {
            if let Some(message) = text.strip_prefix(WARNING_PREFIX) {
                logger.report_warning(message, dedupe_warnings)
            } else if let Some(message) = text.strip_prefix(ERROR_PREFIX) {
                logger.to_screen(&format!("[{}] {}", ERROR_TAG, message), skip_eol, false)
            } else {
                logger.to_screen(text, skip_eol, false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Screen(String, bool),
        Stdout(String, bool),
        Warning(String, bool),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<Call>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl EngineLogger for Recorder {
        fn to_screen(&self, message: &str, skip_eol: bool, _quiet: bool) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Screen(message.to_string(), skip_eol));
            Ok(())
        }

        fn to_stdout(&self, message: &str, skip_eol: bool, _quiet: bool) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Stdout(message.to_string(), skip_eol));
            Ok(())
        }

        fn report_warning(&self, message: &str, only_once: bool) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Warning(message.to_string(), only_once));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_pump_stdout_with_progress() {
        let reader = tokio_test::io::Builder::new()
            .read(b"[youtube] abc: Downloading webpage\n\r[download]  5.0%")
            .read(b"\r[download] 100%\n")
            .build();
        let recorder = Recorder::default();

        pump(reader, Stream::Stdout, &recorder, false).await.unwrap();

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Stdout("[youtube] abc: Downloading webpage".into(), false),
                Call::Stdout("[download]  5.0%".into(), true),
                Call::Stdout("[download] 100%".into(), false),
            ]
        );
    }

    #[tokio::test]
    async fn test_pump_stderr_routing() {
        let reader = tokio_test::io::Builder::new()
            .read(b"WARNING: [youtube] slow format\nERROR: Unsupported URL\nUsage: yt-dlp")
            .build();
        let recorder = Recorder::default();

        pump(reader, Stream::Stderr, &recorder, true).await.unwrap();

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Warning("[youtube] slow format".into(), true),
                Call::Screen("[ERROR] Unsupported URL".into(), false),
                Call::Screen("Usage: yt-dlp".into(), false),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_extractors_missing_binary() {
        let err = list_extractors(Path::new("/nonexistent/yt-dlp"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::EngineNotFound(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_passes_through_exit_code() {
        let recorder = Arc::new(Recorder::default());
        let engine = YtDlp::new("sh", recorder.clone()).with_dedupe_warnings(true);
        let args = vec![
            "-c".to_string(),
            "printf '[info] hello\\n'; printf 'WARNING: careful\\n' >&2; exit 3".to_string(),
        ];

        let code = engine.run(&args).await.unwrap();

        assert_eq!(code, 3);
        let calls = recorder.calls();
        assert!(calls.contains(&Call::Stdout("[info] hello".into(), false)));
        assert!(calls.contains(&Call::Warning("careful".into(), true)));
    }
}
