//! Console logger implementation

use std::fmt;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use super::caller::Caller;
use super::color::{paint, severity_color, CALLER_COLOR, TIME_COLOR};
use super::severity::Severity;
use super::traits::Logger;
use crate::sink::{Sink, StderrSink, StdoutSink};

/// Timestamp layout inside the `[...]` time fragment
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// A leveled logger that writes colorized lines to a sink
///
/// Each emitted line is
///
/// ```text
/// MAGENTA[file.rs:12]RESET CYAN[2024/05/01 13:37:00]RESET <color>message RESET\n
/// ```
///
/// where the caller fragment only appears when caller rendering is enabled and
/// the message color depends on the severity. The line reaches the sink in a
/// single `write_line` call; write errors are ignored.
#[derive(Clone)]
pub struct ConsoleLogger {
    sink: Arc<dyn Sink>,
    threshold: Severity,
    render_caller: bool,
}

impl ConsoleLogger {
    /// Create a logger writing to `sink`
    pub fn new(sink: impl Sink + 'static, threshold: Severity, render_caller: bool) -> Self {
        Self::with_shared_sink(Arc::new(sink), threshold, render_caller)
    }

    /// Create a logger over a sink that is also used elsewhere
    pub fn with_shared_sink(sink: Arc<dyn Sink>, threshold: Severity, render_caller: bool) -> Self {
        Self {
            sink,
            threshold,
            render_caller,
        }
    }

    /// Logger writing to standard output
    pub fn stdout(threshold: Severity, render_caller: bool) -> Self {
        Self::new(StdoutSink, threshold, render_caller)
    }

    /// Logger writing to standard error
    pub fn stderr(threshold: Severity, render_caller: bool) -> Self {
        Self::new(StderrSink, threshold, render_caller)
    }

    /// Whether lines start with a `[file:line]` fragment
    pub fn render_caller(&self) -> bool {
        self.render_caller
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    /// Compose the full line for a message logged at `time`
    ///
    /// Does not check the threshold.
    pub fn render(
        &self,
        severity: Severity,
        caller: Caller<'_>,
        time: &NaiveDateTime,
        args: fmt::Arguments<'_>,
    ) -> String {
        let mut line = String::with_capacity(96);

        if self.render_caller {
            paint(
                &mut line,
                CALLER_COLOR,
                format_args!("[{}:{}]", caller.file_name(), caller.line()),
            );
            line.push(' ');
        }

        paint(&mut line, TIME_COLOR, format_args!("[{}]", time.format(TIMESTAMP_FORMAT)));
        line.push(' ');

        paint(&mut line, severity_color(severity), args);
        line.push('\n');
        line
    }
}

impl Logger for ConsoleLogger {
    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn emit(&self, severity: Severity, caller: Caller<'_>, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }

        let now = Local::now().naive_local();
        let line = self.render(severity, caller, &now, args);
        let _ = self.sink.write_line(&line);
    }

    fn flush(&self) {
        let _ = self.sink.flush();
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("threshold", &self.threshold)
            .field("render_caller", &self.render_caller)
            .finish_non_exhaustive()
    }
}
