//! Output sinks
//!
//! A sink receives fully composed lines. Loggers never lock around a sink;
//! every sink is `Sync` and keeps each `write_line` call atomic on its own.

mod traits;
mod console;
mod writer;
mod memory;

pub use traits::Sink;
pub use console::{StdoutSink, StderrSink};
pub use writer::WriterSink;
pub use memory::MemorySink;
