use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// The console (stderr) only shows warnings unless `verbose` is set, so
/// progress bars and reports stay readable. When a log file is configured it
/// receives every per-file `info` line without ANSI colors. Keep the returned
/// guard alive until exit or buffered lines are lost.
pub fn init(verbose: bool, quiet: bool, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_directive(verbose, quiet)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_filter(console_filter);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log dir: {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(EnvFilter::new(file_directive(verbose)));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

fn console_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "phototidy=debug"
    } else if quiet {
        "phototidy=error"
    } else {
        "phototidy=warn"
    }
}

fn file_directive(verbose: bool) -> &'static str {
    if verbose {
        "phototidy=debug"
    } else {
        "phototidy=info"
    }
}
