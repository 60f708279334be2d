//! Script Execution Engine
//!
//! Executes `.bat`/`.scc`-style script text line by line against the
//! shared collaborators: the virtual filesystem (through the dispatcher's
//! builtins), the console sink, and the interaction source. One call to
//! `execute` owns one `ExecContext`; runs never share state.

use log::debug;

use super::blocks::{find_block_close, is_else_open};
use super::condition::evaluate_condition;
use super::line::{classify, Instruction};
use super::substitution::substitute_vars;
use super::types::{EngineConfig, ExecContext, ScriptEnv, ScriptOutcome};
use crate::io::InputError;

/// The script interpreter. Stateless between runs; cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct ScriptEngine {
    config: EngineConfig,
}

impl ScriptEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Execute script text to completion or cancellation.
    ///
    /// Lines run in strict source order except where a conditional moves
    /// the instruction pointer. There is no error state: malformed lines
    /// are best-effort-interpreted or ignored, and an unmatched brace
    /// skips to the end of the script.
    pub async fn execute(&self, script: &str, env: &ScriptEnv<'_>) -> ScriptOutcome {
        let lines: Vec<&str> = script.split('\n').collect();
        let mut ctx = ExecContext::new();

        while ctx.ip < lines.len() {
            let raw = lines[ctx.ip].trim();

            // Raw-line forms first: the directive and comment lines are
            // never echoed, and the continuation marker must be matched
            // before substitution can touch its sigils.
            match classify(raw) {
                Instruction::Blank => {
                    ctx.ip += 1;
                    continue;
                }
                Instruction::EchoOff => {
                    ctx.echo = false;
                    ctx.ip += 1;
                    continue;
                }
                Instruction::Comment => {
                    ctx.ip += 1;
                    continue;
                }
                Instruction::PauseForKey => {
                    if ctx.echo {
                        self.echo_line(env, raw).await;
                    }
                    if self.pause_for_space(env).await.is_err() {
                        return ScriptOutcome::Cancelled;
                    }
                    ctx.ip += 1;
                    continue;
                }
                _ => {}
            }

            // Per-line echo suppression: strip the marker, never echo.
            let (body, suppressed) = match raw.strip_prefix('@') {
                Some(rest) => (rest.trim(), true),
                None => (raw, false),
            };

            let line = substitute_vars(body, &ctx);
            if ctx.echo && !suppressed {
                self.echo_line(env, &line).await;
            }

            match classify(&line) {
                Instruction::Blank | Instruction::Comment => {
                    ctx.ip += 1;
                }
                Instruction::EchoOff => {
                    ctx.echo = false;
                    ctx.ip += 1;
                }
                Instruction::PauseForKey => {
                    if self.pause_for_space(env).await.is_err() {
                        return ScriptOutcome::Cancelled;
                    }
                    ctx.ip += 1;
                }
                Instruction::Print(text) => {
                    env.sink.write_line(text);
                    ctx.ip += 1;
                }
                Instruction::Declare(name) => {
                    ctx.declare(name);
                    ctx.ip += 1;
                }
                Instruction::Input(name) => {
                    env.sink.write_line(&format!("{}: ", name));
                    match env.input.await_input_line().await {
                        Ok(text) => ctx.assign(name, text),
                        Err(InputError::Cancelled) => {
                            debug!("input cancelled, halting script");
                            return ScriptOutcome::Cancelled;
                        }
                    }
                    ctx.ip += 1;
                }
                Instruction::Wait(ms) => {
                    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
                    ctx.ip += 1;
                }
                Instruction::IfHeader(condition) => {
                    self.run_conditional(&lines, &mut ctx, condition);
                }
                Instruction::BlockClose { inline_else } => {
                    self.leave_taken_block(&lines, &mut ctx, inline_else);
                }
                Instruction::ElseOpen => {
                    // A bare `else {` reached by normal flow has no taken
                    // branch behind it; skip its block.
                    match find_block_close(&lines, ctx.ip + 1) {
                        Some((close, _)) => ctx.ip = close + 1,
                        None => ctx.ip = lines.len(),
                    }
                }
                Instruction::PassThrough { name, args } => {
                    env.dispatcher.run(name, args).await;
                    tokio::time::sleep(self.config.command_delay).await;
                    ctx.ip += 1;
                }
            }
        }

        ScriptOutcome::Completed
    }

    async fn echo_line(&self, env: &ScriptEnv<'_>, line: &str) {
        let prompt = env.dispatcher.prompt().await;
        env.sink.write_line(&format!("{}{}", prompt, line));
    }

    /// Consume keypresses until the space key arrives.
    async fn pause_for_space(&self, env: &ScriptEnv<'_>) -> Result<(), InputError> {
        loop {
            if env.input.await_keypress().await? == ' ' {
                return Ok(());
            }
        }
    }

    /// Evaluate an `if` header at `ctx.ip`. A true condition continues
    /// into the block; a false one skips to the matching `}`, falling
    /// into a directly following `else {` block when present. The
    /// condition is evaluated on substituted text, the block boundaries
    /// on raw text.
    fn run_conditional(&self, lines: &[&str], ctx: &mut ExecContext, condition: Option<&str>) {
        let Some(condition) = condition else {
            // Malformed header: consumed as a no-op.
            ctx.ip += 1;
            return;
        };
        if evaluate_condition(condition, ctx) {
            ctx.ip += 1;
            return;
        }
        match find_block_close(lines, ctx.ip + 1) {
            Some((close, true)) => ctx.ip = close + 1,
            Some((close, false)) => {
                if lines.get(close + 1).is_some_and(|l| is_else_open(l)) {
                    ctx.ip = close + 2;
                } else {
                    ctx.ip = close + 1;
                }
            }
            None => {
                debug!("unmatched brace in conditional, skipping to end");
                ctx.ip = lines.len();
            }
        }
    }

    /// Reached the `}` of a taken block by normal forward execution. If
    /// an `else` block follows (same line or next), it must not run.
    fn leave_taken_block(&self, lines: &[&str], ctx: &mut ExecContext, inline_else: bool) {
        let else_body_start = if inline_else {
            Some(ctx.ip + 1)
        } else if lines.get(ctx.ip + 1).is_some_and(|l| is_else_open(l)) {
            Some(ctx.ip + 2)
        } else {
            None
        };
        match else_body_start {
            Some(start) => match find_block_close(lines, start) {
                Some((close, _)) => ctx.ip = close + 1,
                None => ctx.ip = lines.len(),
            },
            None => ctx.ip += 1,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
