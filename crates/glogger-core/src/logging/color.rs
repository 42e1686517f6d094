//! ANSI color codes and fragment painting

use std::fmt::{self, Write};

use super::severity::Severity;

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const RESET: &str = "\x1b[0m";

/// Color of the `[file:line]` fragment
pub const CALLER_COLOR: &str = MAGENTA;

/// Color of the `[timestamp]` fragment
pub const TIME_COLOR: &str = CYAN;

/// Color used for the message body at the given severity
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Debug => BLUE,
        Severity::Info => GREEN,
        Severity::Warning => YELLOW,
        Severity::Error | Severity::Fatal => RED,
    }
}

/// Color for a raw numeric level; anything out of range stays uncolored
pub fn raw_level_color(level: u8) -> &'static str {
    Severity::try_from(level).map(severity_color).unwrap_or(RESET)
}

/// Append `color`, the formatted content and a single `RESET` to `out`
pub(crate) fn paint(out: &mut String, color: &str, content: fmt::Arguments<'_>) {
    out.push_str(color);
    // Writing into a String only fails if a Display impl errors.
    let _ = out.write_fmt(content);
    out.push_str(RESET);
}
