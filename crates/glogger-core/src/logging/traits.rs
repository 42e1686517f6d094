//! Logger trait definition

use std::fmt;
use std::sync::Arc;

use super::caller::Caller;
use super::severity::Severity;

/// Logger abstraction
///
/// Implementations:
/// - `ConsoleLogger`: colorized lines written to a `Sink`
/// - `NoOpLogger`: silent logger for testing
///
/// Collaborators receive a logger explicitly (usually as a [`SharedLogger`])
/// instead of reaching for a global.
pub trait Logger: Send + Sync {
    /// Minimum severity this logger emits
    fn threshold(&self) -> Severity;

    /// Whether a message at `severity` would be emitted
    fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold()
    }

    /// Write one message attributed to `caller`
    ///
    /// Messages below the threshold must be dropped. Emitting never
    /// terminates the process, even at `Severity::Fatal`.
    fn emit(&self, severity: Severity, caller: Caller<'_>, args: fmt::Arguments<'_>);

    /// Flush the underlying destination
    fn flush(&self) {}
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

impl<L: Logger + ?Sized> Logger for &L {
    fn threshold(&self) -> Severity {
        (**self).threshold()
    }

    fn enabled(&self, severity: Severity) -> bool {
        (**self).enabled(severity)
    }

    fn emit(&self, severity: Severity, caller: Caller<'_>, args: fmt::Arguments<'_>) {
        (**self).emit(severity, caller, args)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn threshold(&self) -> Severity {
        (**self).threshold()
    }

    fn enabled(&self, severity: Severity) -> bool {
        (**self).enabled(severity)
    }

    fn emit(&self, severity: Severity, caller: Caller<'_>, args: fmt::Arguments<'_>) {
        (**self).emit(severity, caller, args)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn threshold(&self) -> Severity {
        (**self).threshold()
    }

    fn enabled(&self, severity: Severity) -> bool {
        (**self).enabled(severity)
    }

    fn emit(&self, severity: Severity, caller: Caller<'_>, args: fmt::Arguments<'_>) {
        (**self).emit(severity, caller, args)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

/// Per-severity logging surface
///
/// Every method is `#[track_caller]`, so the recorded location is the line
/// that called it rather than anything inside this crate.
pub trait LoggerExt: Logger {
    /// Log at an explicit severity without terminating
    #[track_caller]
    fn log_at(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if self.enabled(severity) {
            self.emit(severity, Caller::here(), args);
        }
    }

    /// Log a debug message
    #[track_caller]
    fn debug(&self, message: &str) {
        self.log_at(Severity::Debug, format_args!("{}", message));
    }

    /// Log an info message
    #[track_caller]
    fn info(&self, message: &str) {
        self.log_at(Severity::Info, format_args!("{}", message));
    }

    /// Log a warning message
    #[track_caller]
    fn warning(&self, message: &str) {
        self.log_at(Severity::Warning, format_args!("{}", message));
    }

    /// Log an error message
    #[track_caller]
    fn error(&self, message: &str) {
        self.log_at(Severity::Error, format_args!("{}", message));
    }

    /// Log a fatal message, then exit the process with status 1
    #[track_caller]
    fn fatal(&self, message: &str) -> ! {
        self.fatalf(format_args!("{}", message))
    }

    /// Log a debug message with format arguments
    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Debug, args);
    }

    /// Log an info message with format arguments
    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Info, args);
    }

    /// Log a warning message with format arguments
    #[track_caller]
    fn warningf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Warning, args);
    }

    /// Log an error message with format arguments
    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log_at(Severity::Error, args);
    }

    /// Log a fatal message with format arguments, then exit with status 1
    ///
    /// The line is written and the logger flushed before exiting. No other
    /// destructors or buffers are run.
    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.log_at(Severity::Fatal, args);
        self.flush();
        std::process::exit(1)
    }
}

// Implement LoggerExt for all Logger implementations
impl<T: Logger + ?Sized> LoggerExt for T {}

/// Convenience macros for formatted logging
///
/// `log_info!(logger, "count={}", 3)` is `logger.infof(format_args!("count={}", 3))`
/// without needing `LoggerExt` in scope.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::debugf(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::infof(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::warningf(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::errorf(&$logger, format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $crate::logging::LoggerExt::fatalf(&$logger, format_args!($($arg)*))
    };
}
