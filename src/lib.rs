//! Portal Shell
//!
//! A simulated command shell core: an in-memory virtual file system, a
//! builtin command dispatcher, and a line-oriented script interpreter
//! for `.bat`/`.scc`-style scripts. The crate owns no presentation; the
//! host supplies a console sink and an interaction source and embeds a
//! [`Shell`] per session.

pub mod commands;
pub mod fs;
pub mod interpreter;
pub mod io;
pub mod shell;

pub use commands::{BuiltinDispatcher, Command, CommandContext, CommandOutput, Dispatcher};
pub use fs::{Vfs, VfsError, VfsPath};
pub use interpreter::{EngineConfig, ScriptEngine, ScriptOutcome};
pub use io::{BufferSink, ConsoleSink, InputError, InteractionSource, QueuedInput};
pub use shell::{Shell, ShellOptions};
