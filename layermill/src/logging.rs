//! Logging infrastructure for Layermill.
//!
//! Provides structured logging with file output and console output:
//! - Writes to `logs/layermill.log` (cleared on session start)
//! - Also prints to stdout for CLI tailing
//! - Multi-line pretty format for readability
//! - Configurable via RUST_LOG environment variable

use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Initialize the logging system.
///
/// Creates the log directory if needed, clears the previous log file,
/// and sets up dual output to both file and stdout.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files (e.g., "logs")
/// * `log_file` - Log filename (e.g., "layermill.log")
///
/// # Returns
///
/// LoggingGuard that must be kept alive for logging to work
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file
/// cannot be cleared
pub fn init_logging(log_dir: &str, log_file: &str) -> Result<LoggingGuard, io::Error> {
    init_logging_full(log_dir, log_file, true, false)
}

/// Initialize the logging system with full control over outputs.
///
/// The CLI disables the stdout layer when classified features stream to
/// stdout, so log lines never interleave with the output records.
///
/// # Arguments
///
/// * `log_dir` - Directory for log files (e.g., "logs")
/// * `log_file` - Log filename (e.g., "layermill.log")
/// * `stdout_enabled` - Whether to mirror log output to stdout
/// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the log file
/// cannot be cleared
pub fn init_logging_full(
    log_dir: &str,
    log_file: &str,
    stdout_enabled: bool,
    debug_mode: bool,
) -> Result<LoggingGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    // Clear previous log file by writing empty content
    // This handles both existing and non-existing files
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false) // No ANSI colors in file
        .with_span_events(FmtSpan::CLOSE)
        .pretty();

    let stdout_layer = stdout_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stdout)
            .with_ansi(true)
            .with_span_events(FmtSpan::CLOSE)
            .pretty()
    });

    let env_filter = if debug_mode {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Get default log directory path.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Get default log file name.
pub fn default_log_file() -> &'static str {
    "layermill.log"
}
