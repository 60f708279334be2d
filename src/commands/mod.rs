//! Command Dispatcher and Builtins
//!
//! Interactive commands run against the shared virtual file system. Each
//! builtin lives in its own file and implements the `Command` trait; the
//! dispatcher owns the registry, the current directory, and the console.

pub mod cat;
pub mod cd;
pub mod clear;
pub mod date;
pub mod dispatch;
pub mod echo;
pub mod help;
pub mod launch;
pub mod ls;
pub mod mkdir;
pub mod registry;
pub mod touch;
pub mod tree;
pub mod types;
pub mod ver;

pub use dispatch::BuiltinDispatcher;
pub use registry::CommandRegistry;
pub use types::{Command, CommandContext, CommandOutput, Dispatcher};

use std::sync::Arc;

/// Registry with every builtin registered.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(help::HelpCommand));
    registry.register(Arc::new(ls::LsCommand));
    registry.register(Arc::new(cd::CdCommand));
    registry.register(Arc::new(cat::CatCommand));
    registry.register(Arc::new(mkdir::MkdirCommand));
    registry.register(Arc::new(touch::TouchCommand));
    registry.register(Arc::new(echo::EchoCommand));
    registry.register(Arc::new(tree::TreeCommand));
    registry.register(Arc::new(date::DateCommand));
    registry.register(Arc::new(clear::ClearCommand));
    registry.register(Arc::new(ver::VerCommand));
    registry.register(Arc::new(launch::LaunchCommand));
    registry
}

/// Split a path spec into the directory part and the final name.
///
/// `scripts/tour.bat` becomes `("scripts/", "tour.bat")`; a bare name
/// keeps an empty directory part, which resolves to the base itself. The
/// separator stays on the directory part so a leading `\` still means
/// the root.
pub(crate) fn split_parent(spec: &str) -> (&str, &str) {
    match spec.rfind(['\\', '/']) {
        Some(pos) => (&spec[..pos + 1], &spec[pos + 1..]),
        None => ("", spec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_parent() {
        assert_eq!(split_parent("tour.bat"), ("", "tour.bat"));
        assert_eq!(split_parent("scripts/tour.bat"), ("scripts/", "tour.bat"));
        assert_eq!(split_parent("C:\\scripts\\tour.bat"), ("C:\\scripts\\", "tour.bat"));
        assert_eq!(split_parent("\\top.txt"), ("\\", "top.txt"));
    }
}
