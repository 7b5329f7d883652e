//! Tracing/logging setup shared by the ledgerlab binaries.

/// Initialize process-wide tracing with `config`.
///
/// This is safe to call multiple times; subsequent calls become no-ops and
/// return `false`.
pub fn init(config: &LogConfig) -> bool {
    tracing::init(config)
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat, ParseLogFormatError};
