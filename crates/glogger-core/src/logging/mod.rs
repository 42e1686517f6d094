//! Leveled logging
//!
//! `ConsoleLogger` is the concrete logger; `Logger` and `LoggerExt` are the
//! seams collaborators depend on.

mod traits;
mod caller;
mod severity;
mod console;
mod noop;
pub mod color;
pub mod bridge;

pub use traits::{Logger, LoggerExt, BoxedLogger, SharedLogger};
pub use caller::Caller;
pub use severity::Severity;
pub use console::ConsoleLogger;
pub use noop::NoOpLogger;
