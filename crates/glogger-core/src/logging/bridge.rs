//! Bridge to the `log` crate facade
//!
//! Lets libraries that log through `log::info!` and friends write through a
//! `ConsoleLogger`. Installing is opt-in and process-wide; everything else in
//! this crate works on explicit logger instances.

use log::{Level, LevelFilter, Metadata, Record};

use super::caller::Caller;
use super::console::ConsoleLogger;
use super::severity::Severity;
use super::traits::Logger;
use crate::error::{LogError, LogResult};

/// Severity for a `log` level; `Trace` folds into `Debug`
pub fn severity_from_level(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warning,
        Level::Info => Severity::Info,
        Level::Debug | Level::Trace => Severity::Debug,
    }
}

/// Most verbose `log` level that can pass `threshold`
pub fn level_filter(threshold: Severity) -> LevelFilter {
    match threshold {
        Severity::Debug => LevelFilter::Trace,
        Severity::Info => LevelFilter::Info,
        Severity::Warning => LevelFilter::Warn,
        Severity::Error => LevelFilter::Error,
        // `log` has no fatal level
        Severity::Fatal => LevelFilter::Off,
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        Logger::enabled(self, severity_from_level(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        let caller = Caller::new(record.file().unwrap_or("<unknown>"), record.line().unwrap_or(0));
        Logger::emit(self, severity_from_level(record.level()), caller, *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

/// Install `logger` as the process-wide `log` backend
///
/// Fails if any logger was already installed.
pub fn install(logger: ConsoleLogger) -> LogResult<()> {
    let max_level = level_filter(Logger::threshold(&logger));
    log::set_boxed_logger(Box::new(logger)).map_err(|e| LogError::Install(e.to_string()))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::color::{BLUE, MAGENTA, RESET, YELLOW};
    use crate::sink::MemorySink;
    use std::sync::Arc;

    #[test]
    fn test_level_mapping() {
        assert_eq!(severity_from_level(Level::Trace), Severity::Debug);
        assert_eq!(severity_from_level(Level::Debug), Severity::Debug);
        assert_eq!(severity_from_level(Level::Info), Severity::Info);
        assert_eq!(severity_from_level(Level::Warn), Severity::Warning);
        assert_eq!(severity_from_level(Level::Error), Severity::Error);

        assert_eq!(level_filter(Severity::Debug), LevelFilter::Trace);
        assert_eq!(level_filter(Severity::Warning), LevelFilter::Warn);
        assert_eq!(level_filter(Severity::Fatal), LevelFilter::Off);
    }

    #[test]
    fn test_record_goes_through_console_logger() {
        let sink = Arc::new(MemorySink::new());
        let logger = ConsoleLogger::new(sink.clone(), Severity::Debug, true);

        log::Log::log(
            &logger,
            &Record::builder()
                .level(Level::Trace)
                .file(Some("src/worker/pool.rs"))
                .line(Some(17))
                .args(format_args!("spawned {}", 4))
                .build(),
        );

        let output = sink.contents();
        assert!(output.starts_with(&format!("{}[pool.rs:17]{}", MAGENTA, RESET)));
        assert!(output.contains(&format!("{}spawned 4{}", BLUE, RESET)));
    }

    #[test]
    fn test_record_respects_threshold() {
        let sink = Arc::new(MemorySink::new());
        let logger = ConsoleLogger::new(sink.clone(), Severity::Error, false);

        let metadata = Metadata::builder().level(Level::Warn).build();
        assert!(!log::Log::enabled(&logger, &metadata));

        log::Log::log(
            &logger,
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("quiet"))
                .build(),
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_install_routes_log_macros() {
        let sink = Arc::new(MemorySink::new());
        install(ConsoleLogger::new(sink.clone(), Severity::Warning, true)).unwrap();

        log::info!("filtered out");
        log::warn!("disk at {}%", 91);

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[bridge.rs:"));
        assert!(lines[0].contains(&format!("{}disk at 91%{}", YELLOW, RESET)));

        let again = install(ConsoleLogger::stdout(Severity::Debug, false));
        assert!(matches!(again, Err(LogError::Install(_))));
    }
}
