//! I/O Module
//!
//! Host-facing interfaces (console sink, interaction source) and
//! in-memory doubles for tests and capturing hosts.

pub mod testing;
pub mod types;

pub use testing::{BufferSink, QueuedInput};
pub use types::{ConsoleSink, InputError, InteractionSource};
