//! Command Registry
//!
//! Builtins are looked up by lower-cased name; aliases share the same
//! command instance.

use std::collections::HashMap;
use std::sync::Arc;

use super::types::Command;

/// Registry of all builtin commands.
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: HashMap::new() }
    }

    /// Register a command under its name and every alias.
    pub fn register(&mut self, command: Arc<dyn Command>) {
        for name in std::iter::once(command.name()).chain(command.aliases().iter().copied()) {
            self.commands.insert(name.to_ascii_lowercase(), Arc::clone(&command));
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(&name.to_ascii_lowercase())
    }

    /// Primary command names, sorted, aliases excluded.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .commands
            .values()
            .map(|c| c.name())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect();
        names.sort_unstable();
        names
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::commands::types::{CommandContext, CommandOutput};

    struct Probe;

    #[async_trait]
    impl Command for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn aliases(&self) -> &'static [&'static str] {
            &["pr"]
        }

        async fn execute(&self, _ctx: CommandContext<'_>) -> CommandOutput {
            CommandOutput::line("probed")
        }
    }

    #[test]
    fn test_lookup_by_name_and_alias() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(Probe));
        assert!(registry.get("probe").is_some());
        assert!(registry.get("PR").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_names_deduplicates_aliases() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(Probe));
        assert_eq!(registry.names(), vec!["probe"]);
    }
}
