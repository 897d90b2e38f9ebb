use flexi_logger::{Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming};
use std::path::PathBuf;

/// Directory for log files, e.g. `~/.local/share/random-gallery` on Linux
fn get_log_dir() -> Option<PathBuf> {
    let mut path = dirs::data_dir().or_else(dirs::home_dir)?;
    path.push("random-gallery");
    std::fs::create_dir_all(&path).ok()?;
    Some(path)
}

/// Start the logger. `RUST_LOG` takes precedence over `spec`.
///
/// The returned handle must stay alive for the lifetime of the program.
/// Returns `None` if no logger could be started; the app runs without one.
pub fn init(spec: &str) -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str(spec) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Invalid log spec {spec:?}: {err}");
            return None;
        }
    };

    let started = match get_log_dir() {
        Some(log_dir) => logger
            .log_to_file(
                FileSpec::default()
                    .directory(&log_dir)
                    .basename("random-gallery")
                    .suffix("log")
                    .suppress_timestamp(),
            )
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(Duplicate::Warn)
            .start(),
        None => {
            eprintln!("Failed to create log directory, logging to stderr");
            logger.log_to_stderr().start()
        }
    };

    match started {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}
