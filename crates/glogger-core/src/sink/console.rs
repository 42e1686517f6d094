//! Standard stream sinks

use std::io::{self, Write};

use super::traits::Sink;

/// Writes lines to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        io::stdout().lock().write_all(line.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

/// Writes lines to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        io::stderr().lock().write_all(line.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        io::stderr().lock().flush()
    }
}
