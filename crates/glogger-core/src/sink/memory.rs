//! In-memory sink

use std::io;

use parking_lot::Mutex;

use super::traits::Sink;

/// Sink that keeps every written line in memory
///
/// Useful for tests and for embedders that want to inspect output.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// All lines concatenated in write order
    pub fn contents(&self) -> String {
        self.lines.lock().concat()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_memory_sink_records_lines() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_line("one\n").unwrap();
        sink.write_line("two\n").unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["one\n", "two\n"]);
        assert_eq!(sink.contents(), "one\ntwo\n");

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_memory_sink_thread_safety() {
        let sink = Arc::new(MemorySink::new());
        let mut handles = vec![];

        for i in 0..10 {
            let sink_clone = Arc::clone(&sink);
            handles.push(thread::spawn(move || {
                sink_clone.write_line(&format!("line {}\n", i)).unwrap();
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(sink.len(), 10);
    }
}
