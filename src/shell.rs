//! Shell Facade
//!
//! The host-facing surface: one `Shell` per session, wired to the host's
//! console sink and interaction source. Submitted lines go through the
//! dispatcher; script text goes through the engine. Optionally seeds a
//! small demo tree so a fresh session has something to explore.

use std::sync::Arc;
use std::time::Duration;

use crate::commands::{BuiltinDispatcher, Dispatcher};
use crate::fs::{Vfs, VfsError, VfsPath};
use crate::interpreter::{EngineConfig, ScriptOutcome};
use crate::io::{ConsoleSink, InteractionSource};

const WELCOME_SCRIPT: &str = "\
@echo off
print >> Welcome! This is a simulated command shell.
print >> Files and directories live only in memory.
print >> Type help to see the available commands.
";

const QUIZ_SCRIPT: &str = "\
@echo off
var ANSWER
print >> What is 6 x 7?
input >> ANSWER
if (ANSWER == 42) {
print >> Correct!
} else {
print >> Not quite. The answer is 42.
}
";

pub struct ShellOptions {
    pub sink: Arc<dyn ConsoleSink>,
    pub input: Arc<dyn InteractionSource>,
    pub command_delay: Duration,
    /// Seed `C:\scripts`, `C:\programs` and a README into the fresh tree.
    pub seed_demo_files: bool,
}

pub struct Shell {
    dispatcher: BuiltinDispatcher,
    sink: Arc<dyn ConsoleSink>,
}

impl Shell {
    pub async fn new(options: ShellOptions) -> Result<Self, VfsError> {
        let vfs = Arc::new(Vfs::new());
        if options.seed_demo_files {
            seed_demo_tree(&vfs).await?;
        }
        let dispatcher = BuiltinDispatcher::new(
            Arc::clone(&vfs),
            Arc::clone(&options.sink),
            options.input,
            EngineConfig { command_delay: options.command_delay },
        );
        Ok(Self { dispatcher, sink: options.sink })
    }

    /// Submit one interactive line, as typed after the prompt.
    pub async fn submit(&self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let name = parts.next().unwrap_or("");
        let args = parts.next().unwrap_or("").trim();
        self.dispatcher.run(name, args).await;
    }

    /// Run script text directly, outside any file.
    pub async fn run_script(&self, script: &str) -> ScriptOutcome {
        self.dispatcher.run_script(script).await
    }

    pub async fn prompt(&self) -> String {
        self.dispatcher.prompt().await
    }

    pub fn print_banner(&self) {
        self.sink.write_line(&format!(
            "Portal Shell [Version {}]",
            env!("CARGO_PKG_VERSION")
        ));
        self.sink.write_line("Type 'help' for a list of commands.");
        self.sink.write_line("");
    }
}

async fn seed_demo_tree(vfs: &Vfs) -> Result<(), VfsError> {
    let root = VfsPath::root();
    vfs.create_dir(&root, "scripts").await?;
    let scripts = vfs.resolve(&root, "scripts").await?;
    vfs.write_file(&scripts, "welcome.bat", WELCOME_SCRIPT).await?;
    vfs.write_file(&scripts, "quiz.scc", QUIZ_SCRIPT).await?;

    vfs.create_dir(&root, "programs").await?;
    let programs = vfs.resolve(&root, "programs").await?;
    vfs.write_file(&programs, "game.exe", "").await?;

    vfs.write_file(
        &root,
        "README.txt",
        "Scripts live in C:\\scripts.\nTry: launch scripts\\welcome.bat",
    )
    .await?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{BufferSink, QueuedInput};

    async fn shell_with(input: QueuedInput) -> (Arc<BufferSink>, Shell) {
        let sink = Arc::new(BufferSink::new());
        let shell = Shell::new(ShellOptions {
            sink: Arc::clone(&sink) as Arc<dyn ConsoleSink>,
            input: Arc::new(input),
            command_delay: Duration::ZERO,
            seed_demo_files: true,
        })
        .await
        .unwrap();
        (sink, shell)
    }

    #[tokio::test]
    async fn test_seeded_tree_listing() {
        let (sink, shell) = shell_with(QueuedInput::new()).await;
        shell.submit("ls").await;
        assert_eq!(
            sink.lines(),
            vec!["<DIR>   scripts", "<DIR>   programs", "        README.txt"]
        );
    }

    #[tokio::test]
    async fn test_welcome_script_full_stack() {
        let (sink, shell) = shell_with(QueuedInput::new()).await;
        shell.submit("launch scripts\\welcome.bat").await;
        assert_eq!(
            sink.lines(),
            vec![
                "Welcome! This is a simulated command shell.",
                "Files and directories live only in memory.",
                "Type help to see the available commands.",
            ]
        );
    }

    #[tokio::test]
    async fn test_quiz_script_with_answer() {
        let (sink, shell) = shell_with(QueuedInput::with_lines(["42"])).await;
        shell.submit("launch scripts/quiz.scc").await;
        assert_eq!(
            sink.lines(),
            vec!["What is 6 x 7?", "ANSWER: ", "Correct!"]
        );
    }

    #[tokio::test]
    async fn test_quiz_script_with_wrong_answer() {
        let (sink, shell) = shell_with(QueuedInput::with_lines(["41"])).await;
        shell.submit("launch scripts/quiz.scc").await;
        assert_eq!(
            sink.lines(),
            vec!["What is 6 x 7?", "ANSWER: ", "Not quite. The answer is 42."]
        );
    }

    #[tokio::test]
    async fn test_session_state_persists_across_submits() {
        let (sink, shell) = shell_with(QueuedInput::new()).await;
        shell.submit("mkdir notes").await;
        shell.submit("cd notes").await;
        assert_eq!(shell.prompt().await, "C:\\notes>");

        shell.submit("touch today.txt").await;
        shell.submit("ls").await;
        assert_eq!(sink.lines(), vec!["        today.txt"]);
    }

    #[tokio::test]
    async fn test_blank_submit_is_ignored() {
        let (sink, shell) = shell_with(QueuedInput::new()).await;
        shell.submit("   ").await;
        assert!(sink.lines().is_empty());
    }

    #[tokio::test]
    async fn test_run_script_directly() {
        let (sink, shell) = shell_with(QueuedInput::new()).await;
        let outcome = shell.run_script("@echo off\ncat README.txt").await;
        assert_eq!(outcome, ScriptOutcome::Completed);
        assert_eq!(
            sink.lines(),
            vec!["Scripts live in C:\\scripts.", "Try: launch scripts\\welcome.bat"]
        );
    }
}
