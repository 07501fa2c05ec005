//! yt-dlpr - CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use console::Term;
use tracing_subscriber::{fmt, EnvFilter};

use yt_dlpr::{
    cli::Args,
    config::{default_config_path, validate_config, Config},
    engine::{list_extractors, RichLogger, YtDlp},
    error::{exit_codes, Error, Result},
    output::{create_spinner, print_error, print_examples, print_warning},
    render::{ConsoleSink, ExtractorNames, LineRenderer, Rgb, Theme},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(exit_codes::ABORT as u8)),
        Err(e) if e.is_broken_pipe() => ExitCode::from(exit_codes::ABORT as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::EngineNotFound(_) | Error::Engine(_) => {
                    ExitCode::from(exit_codes::ENGINE_ERROR as u8)
                }
                Error::Interrupted => ExitCode::from(exit_codes::ABORT as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<i32> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging; stdout belongs to the engine output
    let log_level = if args.debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if args.examples {
        print_examples();
        return Ok(exit_codes::SUCCESS);
    }

    if args.init_config {
        init_config(args.config.clone())?;
        return Ok(exit_codes::SUCCESS);
    }

    // Load configuration
    let mut config = Config::resolve(args.config.as_deref())?;

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    let colors = config.output.color.enabled();
    let time_color: Rgb = config
        .output
        .time_color
        .parse()
        .map_err(|message| Error::ConfigValidation {
            field: "output.time_color".to_string(),
            message,
        })?;

    // Extractor names feed the tag style fallback
    let spinner = create_spinner("Loading extractor list...");
    let listed = list_extractors(&config.engine.binary).await;
    spinner.finish_and_clear();

    let extractors = match listed {
        Ok(names) => {
            tracing::debug!("Loaded {} extractor names", names.len());
            names
        }
        Err(e @ Error::EngineNotFound(_)) => return Err(e),
        Err(e) => {
            print_warning(&format!("Could not list extractors: {}", e));
            ExtractorNames::default()
        }
    };

    // Build the rendering pipeline
    let theme = Theme::from_config(&config.theme, extractors)?;
    let renderer = LineRenderer::new(config.output.level_width, theme.highlight());
    let sink = ConsoleSink::new(std::io::stdout(), config.output.time_format.clone())
        .with_colors(colors)
        .with_time_color(Some(time_color))
        .with_interactive(Term::stdout().is_term());
    let logger = Arc::new(
        RichLogger::new(theme, renderer, sink).with_no_warnings(config.engine.no_warnings),
    );

    let mut engine = YtDlp::new(config.engine.binary.clone(), logger.clone())
        .with_dedupe_warnings(config.output.dedupe_warnings);
    if config.engine.progress_template {
        engine = engine.with_progress_template(colors);
    }

    // Dropping the run future kills the engine
    let result = tokio::select! {
        code = engine.run(&args.engine_args) => code,
        _ = tokio::signal::ctrl_c() => Err(Error::Interrupted),
    };

    let finished = logger.finish();
    let code = result?;
    finished?;

    Ok(code)
}

/// Write the default configuration to the chosen or default path.
fn init_config(path: Option<std::path::PathBuf>) -> Result<()> {
    let path = path
        .or_else(default_config_path)
        .ok_or_else(|| Error::Config("No configuration directory available".into()))?;

    Config::init(&path)?;
    println!("Wrote default configuration to {}", path.display());

    Ok(())
}
