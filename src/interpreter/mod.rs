//! Script Interpreter
//!
//! Line-oriented execution of `.bat`/`.scc` script text: classification,
//! variable substitution, condition evaluation, block matching, and the
//! engine loop that ties them to the dispatcher.

pub mod blocks;
pub mod condition;
pub mod engine;
pub mod line;
pub mod substitution;
pub mod types;

pub use condition::evaluate_condition;
pub use engine::ScriptEngine;
pub use line::{classify, Instruction};
pub use substitution::substitute_vars;
pub use types::{EngineConfig, ExecContext, ScriptEnv, ScriptOutcome};
