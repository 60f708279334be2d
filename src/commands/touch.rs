use async_trait::async_trait;

use crate::commands::{split_parent, Command, CommandContext, CommandOutput};
use crate::fs::VfsError;

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        if ctx.args.is_empty() {
            return CommandOutput::line("The syntax of the command is incorrect.");
        }
        let (dir, name) = split_parent(ctx.args);
        if name.is_empty() {
            return CommandOutput::line("The syntax of the command is incorrect.");
        }
        let parent = match ctx.vfs.resolve(ctx.cwd, dir).await {
            Ok(path) => path,
            Err(_) => return CommandOutput::line("The system cannot find the path specified."),
        };
        match ctx.vfs.create_file(&parent, name).await {
            // An existing name is left untouched, silently.
            Ok(()) | Err(VfsError::AlreadyExists { .. }) => CommandOutput::none(),
            Err(_) => CommandOutput::line("The system cannot find the path specified."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{Vfs, VfsPath};

    #[tokio::test]
    async fn test_touch_creates_empty_file() {
        let vfs = Vfs::new();
        let mut cwd = VfsPath::root();
        let out = TouchCommand
            .execute(CommandContext { args: "a.txt", vfs: &vfs, cwd: &mut cwd })
            .await;
        assert!(out.lines.is_empty());
        assert_eq!(vfs.read_file(&cwd, "a.txt").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_touch_existing_is_silent_and_preserves() {
        let vfs = Vfs::new();
        let mut cwd = VfsPath::root();
        vfs.write_file(&cwd.clone(), "a.txt", "kept").await.unwrap();
        let out = TouchCommand
            .execute(CommandContext { args: "a.txt", vfs: &vfs, cwd: &mut cwd })
            .await;
        assert!(out.lines.is_empty());
        assert_eq!(vfs.read_file(&cwd, "a.txt").await.unwrap(), "kept");
    }
}
