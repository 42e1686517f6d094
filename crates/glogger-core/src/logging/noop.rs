//! No-op logger implementation

use std::fmt;

use super::caller::Caller;
use super::severity::Severity;
use super::traits::Logger;

/// A logger that does nothing
///
/// Useful for testing or when logging is not needed. `fatal` still exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn threshold(&self) -> Severity {
        Severity::Fatal
    }

    fn enabled(&self, _severity: Severity) -> bool {
        false
    }

    fn emit(&self, _severity: Severity, _caller: Caller<'_>, _args: fmt::Arguments<'_>) {}
}
