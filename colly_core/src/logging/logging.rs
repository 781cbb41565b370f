// colly_core/src/logging/logging.rs
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use flexi_logger::*;
use log::Record;
use once_cell::sync::Lazy;
use crate::{constants::*, error::Result};

// Most recent status line, for callers that show one on screen.
pub static LAST_LOG: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new(String::new()));

/// Logs a message and keeps it as the latest status line.
#[macro_export]
macro_rules! status_log {
    ($lvl:expr, $($arg:tt)*) => {{
        log::log!($lvl, $($arg)*);
        $crate::logging::logging::set_last_log(format!($($arg)*));
    }};
}

/// Logs at info level and keeps the message as the latest status line.
#[macro_export]
macro_rules! status_info  { ($($arg:tt)*) => { $crate::status_log!(log::Level::Info,  $($arg)*) }; }

/// Logs at warn level and keeps the message as the latest status line.
#[macro_export]
macro_rules! status_warn  { ($($arg:tt)*) => { $crate::status_log!(log::Level::Warn,  $($arg)*) }; }

#[macro_export]
macro_rules! status_error { ($($arg:tt)*) => { $crate::status_log!(log::Level::Error, $($arg)*) }; }

/// Replaces the latest status line. A poisoned lock is recovered.
pub fn set_last_log(message: String) {
    let mut buf = LAST_LOG.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *buf = message;
}

/// Returns a copy of the latest status line.
pub fn last_log() -> String {
    LAST_LOG.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
}

/// Initializes the logger with a `log_spec` such as `"info"` or
/// `"colly_core=trace"`. Logs go to a rotating file in `log_dir`, or to
/// stderr when no directory is given. Keep the handle alive for as long as
/// logging is needed.
pub fn init_logger(log_dir: Option<&Path>, log_spec: &str) -> Result<LoggerHandle> {
    let logger = Logger::try_with_str(log_spec)?.format(colly_format);

    let logger = match log_dir {
        Some(dir) => {
            let file_spec = FileSpec::default()
                .directory(dir)
                .basename(LOG_BASENAME)
                .suffix("log");

            logger
                .log_to_file(file_spec)
                .rotate(
                    Criterion::Size(LOG_ROTATE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(LOG_KEEP_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
        }
        None => logger.log_to_stderr(),
    };

    let handle = logger.start()?;

    if let Some(dir) = log_dir {
        status_info!("Log dir: {}.", dir.display());
    }

    Ok(handle)
}

fn colly_format(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        write,
        "{} {:5} [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unknown>"),
        &record.args()
    )
}
