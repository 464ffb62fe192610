use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, opt_format};
use std::path::Path;

/// Starts the global logger. The level comes from `RUST_LOG`, falling back to `level`.
///
/// Logs go to stderr, or to rotated files in `directory` when one is given. Keep the
/// returned handle alive for as long as logging is needed.
pub fn setup_logging(level: &str, directory: Option<&Path>) -> crate::Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(level)?.format(opt_format);
    let logger = match directory {
        Some(directory) => logger
            .log_to_file(FileSpec::default().directory(directory))
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // Rotate logs after they reach 10 MB
                Naming::Numbers,
                Cleanup::KeepLogFiles(1),
            ),
        None => logger.log_to_stderr(),
    };
    Ok(logger.start()?)
}
