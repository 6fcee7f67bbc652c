use std::path::Path;

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::error;

use crate::chat::store::data_dir;

/// Used when `RUST_LOG` is not set.
const DEFAULT_SPEC: &str = "warn,portfolio_chat=debug,responder=debug,chat_model=debug";
const MAX_LOG_SIZE: u64 = 4 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 5;

/// Rotating log files under `log_dir`, with info and above mirrored to stderr.
fn chat_logger(log_dir: &Path) -> Result<Logger, FlexiLoggerError> {
    Ok(Logger::try_with_env_or_str(DEFAULT_SPEC)?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("portfolio_chat"),
        )
        .rotate(
            Criterion::Size(MAX_LOG_SIZE),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEPT_LOG_FILES),
        )
        .format_for_files(flexi_logger::detailed_format)
        .write_mode(WriteMode::BufferAndFlush)
        .duplicate_to_stderr(Duplicate::Info))
}

pub fn init() -> LoggerHandle {
    let logger = chat_logger(&data_dir().join("logs"))
        .and_then(Logger::start)
        .expect("log init");
    exit_on_panic(logger.clone());
    logger
}

/// A panic in any chat task takes the whole server down, after the log is flushed.
fn exit_on_panic(logger: LoggerHandle) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        error!("Panic: {panic_info}");
        logger.flush();
        default_hook(panic_info);
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use log::{Level, Record};
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn writes_into_log_dir() {
        let dir = TempDir::new("portfolio_chat_logs").unwrap();
        let (log, handle) = chat_logger(dir.path()).unwrap().build().unwrap();
        log.log(
            &Record::builder()
                .args(format_args!("chat stream opened"))
                .level(Level::Info)
                .target("portfolio_chat::api")
                .build(),
        );
        handle.flush();

        let written: String = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| std::fs::read_to_string(entry.unwrap().path()).unwrap())
            .collect();
        assert!(written.contains("chat stream opened"), "{written}");
    }
}
