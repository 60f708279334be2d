//! Interpreter Types
//!
//! The per-run execution context and the collaborator bundle the script
//! engine runs against.

use std::collections::HashMap;
use std::time::Duration;

use crate::commands::Dispatcher;
use crate::io::{ConsoleSink, InteractionSource};

/// The continuation marker: a script line equal to this (case-insensitive)
/// suspends the run until the space key is pressed.
pub const CONTINUE_MARKER: &str = "%continue%";

/// The directive that disables echo for the remainder of a run. There is
/// no corresponding echo-on directive.
pub const ECHO_OFF_DIRECTIVE: &str = "@echo off";

/// Collaborators one script run executes against.
pub struct ScriptEnv<'a> {
    pub sink: &'a dyn ConsoleSink,
    pub input: &'a dyn InteractionSource,
    pub dispatcher: &'a dyn Dispatcher,
}

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Fixed delay after each pass-through command, preserving the
    /// sequential "typed" illusion. Interpreter-native instructions are
    /// not paced.
    pub command_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { command_delay: Duration::from_millis(50) }
    }
}

/// How a script run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// The instruction pointer passed the last line.
    Completed,
    /// A suspension was cancelled by the host; the run halted early.
    Cancelled,
}

/// State owned by exactly one script run, created at the start of
/// `execute` and discarded at its end. Never shared across runs.
#[derive(Debug, Default)]
pub struct ExecContext {
    /// Variable store. Names are canonical upper-case; `None` marks a
    /// variable that was declared but never assigned.
    pub vars: HashMap<String, Option<String>>,
    /// Automatic echo of executed lines; on by default, turned off for
    /// the rest of the run by the echo-off directive.
    pub echo: bool,
    /// Index into the script's line sequence.
    pub ip: usize,
}

impl ExecContext {
    pub fn new() -> Self {
        Self { vars: HashMap::new(), echo: true, ip: 0 }
    }

    /// Canonical form of a variable name.
    pub fn canonical(name: &str) -> String {
        name.trim().to_ascii_uppercase()
    }

    /// Declare a variable with an unset value.
    pub fn declare(&mut self, name: &str) {
        self.vars.insert(Self::canonical(name), None);
    }

    /// Assign a text value, declaring the variable if needed.
    pub fn assign(&mut self, name: &str, value: impl Into<String>) {
        self.vars.insert(Self::canonical(name), Some(value.into()));
    }

    /// Look a name up case-insensitively. Outer `None` means undeclared;
    /// inner `None` means declared but unset.
    pub fn lookup(&self, name: &str) -> Option<Option<&str>> {
        self.vars.get(&Self::canonical(name)).map(|v| v.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = ExecContext::new();
        assert!(ctx.echo);
        assert_eq!(ctx.ip, 0);
        assert!(ctx.vars.is_empty());
    }

    #[test]
    fn test_declare_and_assign_case_insensitive() {
        let mut ctx = ExecContext::new();
        ctx.declare("answer");
        assert_eq!(ctx.lookup("ANSWER"), Some(None));
        assert_eq!(ctx.lookup("Answer"), Some(None));

        ctx.assign("Answer", "42");
        assert_eq!(ctx.lookup("answer"), Some(Some("42")));
        assert_eq!(ctx.lookup("missing"), None);
    }
}
