//! Error types for sonde.
//!
//! Uses `thiserror` for ergonomic error definitions.

use thiserror::Error;

/// Main error type for scanning operations.
///
/// Per-port failures (`SendFailed`, `WaitFailed`, `RawSocket`) abort only the
/// port being probed; the scan itself continues over the requested range.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Wait failed: {0}")]
    WaitFailed(String),

    #[error("Raw socket error: {0}")]
    RawSocket(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Invalid port range: {0} > {1}")]
    InvalidPortRange(u16, u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
