// colly_core/src/error.rs
use thiserror::Error;

/// Errors raised by grid construction, tile access, sweeping and config storage.
#[derive(Debug, Error)]
pub enum CollyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Cell ({column}, {row}) is outside the {width}x{height} grid")]
    IndexOutOfRange {
        column: usize,
        row: usize,
        width: usize,
        height: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Could not start logger: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, CollyError>;
