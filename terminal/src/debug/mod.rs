//! # Logging Infrastructure
//!
//! File-based structured logging for the bank client.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/bank-terminal.log.YYYY-MM-DD` (daily rotation)
//! - **Non-blocking writer**: disk I/O never stalls a frame
//! - **Panic hook**: panics are logged with location and backtrace
//!
//! Tokens, passwords and verification codes are never logged; request spans
//! skip them explicitly.
//!
//! ## Usage
//!
//! ```rust,no_run
//! let _guard = bank_terminal::debug::init();
//!
//! tracing::info!(endpoint = "/api/v1/log-in", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `bank_terminal=info,warn`)
//! - `BANK_LOG_DIR`: Log directory (default `logs`)
//! - `BANK_LOG_STDERR`: `1` to mirror logs to stderr

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

use tracing_appender::non_blocking::WorkerGuard;

/// Initialize logging from the environment.
///
/// Call at application startup and keep the returned guard alive.
pub fn init() -> Option<WorkerGuard> {
    init_logger(&DebugConfig::from_env())
}
