//! Call-site locations

use std::panic::Location;
use std::path::Path;

/// Source location of the code that invoked a logging operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> Caller<'a> {
    pub fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the nearest caller that is not `#[track_caller]`
    #[track_caller]
    pub fn here() -> Caller<'static> {
        Location::caller().into()
    }

    /// Path as recorded by the compiler (or the log record)
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// Base file name without any directory components
    pub fn file_name(&self) -> &'a str {
        Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file)
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl From<&'static Location<'static>> for Caller<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}
