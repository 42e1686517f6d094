//! Sink trait definition

use std::io;
use std::sync::Arc;

/// Destination for composed log lines
pub trait Sink: Send + Sync {
    /// Write one complete line (including its trailing newline) in a single call
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Flush any buffered output
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        (**self).flush()
    }
}
