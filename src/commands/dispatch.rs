//! Builtin Dispatcher
//!
//! Owns the registry, the shared file system, the current directory, and
//! the console. Commands are fire-and-forget from the caller's view; all
//! diagnostics go straight to the sink. A builtin that returns script
//! text (`launch`) is run through the engine with this dispatcher as the
//! pass-through target, so scripts can launch further scripts.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

use super::registry::CommandRegistry;
use super::types::{Command as _, CommandContext, Dispatcher};
use crate::fs::{Vfs, VfsPath};
use crate::interpreter::{EngineConfig, ScriptEngine, ScriptEnv, ScriptOutcome};
use crate::io::{ConsoleSink, InteractionSource};

pub struct BuiltinDispatcher {
    registry: CommandRegistry,
    vfs: Arc<Vfs>,
    cwd: RwLock<VfsPath>,
    sink: Arc<dyn ConsoleSink>,
    input: Arc<dyn InteractionSource>,
    engine: ScriptEngine,
}

impl BuiltinDispatcher {
    pub fn new(
        vfs: Arc<Vfs>,
        sink: Arc<dyn ConsoleSink>,
        input: Arc<dyn InteractionSource>,
        config: EngineConfig,
    ) -> Self {
        Self {
            registry: super::default_registry(),
            vfs,
            cwd: RwLock::new(VfsPath::root()),
            sink,
            input,
            engine: ScriptEngine::new(config),
        }
    }

    pub fn vfs(&self) -> &Arc<Vfs> {
        &self.vfs
    }

    pub async fn cwd(&self) -> VfsPath {
        self.cwd.read().await.clone()
    }

    /// Run script text through the engine against this dispatcher.
    pub async fn run_script(&self, script: &str) -> ScriptOutcome {
        let env = ScriptEnv {
            sink: self.sink.as_ref(),
            input: self.input.as_ref(),
            dispatcher: self,
        };
        self.engine.execute(script, &env).await
    }
}

#[async_trait]
impl Dispatcher for BuiltinDispatcher {
    async fn run(&self, name: &str, args: &str) {
        let Some(command) = self.registry.get(name) else {
            self.sink.write_line(&format!(
                "'{}' is not recognized as a command or file name.",
                name
            ));
            return;
        };
        let command = Arc::clone(command);

        let output = {
            let mut cwd = self.cwd.write().await;
            command
                .execute(CommandContext { args, vfs: &self.vfs, cwd: &mut cwd })
                .await
            // The cwd lock drops here, before any nested script runs.
        };

        if output.clear_screen {
            self.sink.clear();
        }
        for line in &output.lines {
            self.sink.write_line(line);
        }
        if let Some(script) = output.script {
            debug!("command {} chained into a script run", name);
            self.run_script(&script).await;
        }
    }

    async fn prompt(&self) -> String {
        format!("{}>", self.cwd.read().await)
    }
}

// ============================================================================
// Tests
// ============================================================================
