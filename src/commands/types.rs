//! Command Types
//!
//! The dispatcher contract the script engine depends on, and the trait
//! every builtin implements.

use async_trait::async_trait;

use crate::fs::{Vfs, VfsPath};

/// The one operation the script engine depends on for pass-through lines.
///
/// `run` is fire-and-forget: builtins write their own diagnostics to the
/// console sink and never report success or failure to the caller. That
/// asymmetry is deliberate; control-flow instructions live in the engine,
/// not here. `prompt` is the current-path prompt text the engine prefixes
/// when echoing script lines.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn run(&self, name: &str, args: &str);

    async fn prompt(&self) -> String;
}

/// Execution context handed to a builtin.
pub struct CommandContext<'a> {
    /// Raw argument string, everything after the command name.
    pub args: &'a str,
    pub vfs: &'a Vfs,
    /// Current directory; `cd` commits a new value here only after it
    /// resolved to an existing directory.
    pub cwd: &'a mut VfsPath,
}

/// What a builtin produced. Output lines are written to the sink by the
/// dispatcher; `script` asks the dispatcher to execute script text after
/// the command returns (the `launch` builtin uses it).
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub clear_screen: bool,
    pub script: Option<String>,
}

impl CommandOutput {
    /// No output at all.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn line(text: impl Into<String>) -> Self {
        Self { lines: vec![text.into()], ..Default::default() }
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self { lines, ..Default::default() }
    }

    pub fn clear() -> Self {
        Self { clear_screen: true, ..Default::default() }
    }

    pub fn run_script(content: String) -> Self {
        Self { script: Some(content), ..Default::default() }
    }
}

/// A builtin command.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Additional names the command answers to.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput;
}
