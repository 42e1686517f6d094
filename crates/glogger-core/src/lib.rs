//! glogger Core
//!
//! Leveled console logging with color-coded, timestamped lines.
//! A logger is constructed once with explicit configuration and passed to the
//! collaborators that log, rather than living in a global.
//!
//! ```rust,no_run
//! use glogger_core::{ConsoleLogger, LoggerExt, Severity, StdoutSink};
//! use glogger_core::log_info;
//!
//! let logger = ConsoleLogger::new(StdoutSink, Severity::Info, true);
//! logger.info("server started");
//! log_info!(logger, "listening on port {}", 8080);
//! ```
//!
//! Lines look like:
//!
//! ```text
//! [main.rs:12] [2024/05/01 13:37:00] server started
//! ```
//!
//! with each bracketed fragment and the message wrapped in their own ANSI
//! color and reset codes.

pub mod error;
pub mod logging;
pub mod sink;
pub mod config;

pub use error::{LogError, LogResult};

pub use logging::{
    BoxedLogger, Caller, ConsoleLogger, Logger, LoggerExt, NoOpLogger, Severity, SharedLogger,
};

pub use sink::{MemorySink, Sink, StderrSink, StdoutSink, WriterSink};

pub use config::{LoggerConfig, OutputTarget};
