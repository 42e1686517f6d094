//! Serializing wrapper around any `Write`

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use parking_lot::{Mutex, MutexGuard};

use super::traits::Sink;

/// Sink over an arbitrary writer
///
/// The writer sits behind a mutex so concurrent callers never interleave
/// within a line, even when `W` itself is not thread-safe.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Lock and borrow the wrapped writer
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.writer.lock()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<File> {
    /// Open `path` for appending, creating it (and its parent directory) if missing
    pub fn append_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.writer.lock().write_all(line.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}
