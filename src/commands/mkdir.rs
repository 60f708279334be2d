use async_trait::async_trait;

use crate::commands::{split_parent, Command, CommandContext, CommandOutput};
use crate::fs::VfsError;

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["md"]
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
        match ctx.vfs.create_dir(&parent, name).await {
            Ok(()) => CommandOutput::none(),
            Err(VfsError::AlreadyExists { .. }) => CommandOutput::line(format!(
                "A subdirectory or file {} already exists.",
                name
            )),
            Err(_) => CommandOutput::line("The system cannot find the path specified."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{NodeKind, Vfs, VfsPath};

    #[tokio::test]
    async fn test_mkdir_creates_directory() {
        let vfs = Vfs::new();
        let mut cwd = VfsPath::root();
        let out = MkdirCommand
            .execute(CommandContext { args: "docs", vfs: &vfs, cwd: &mut cwd })
            .await;
        assert!(out.lines.is_empty());

        let docs = vfs.resolve(&cwd, "docs").await.unwrap();
        assert_eq!(vfs.node_kind(&docs).await, Some(NodeKind::Directory));
    }

    #[tokio::test]
    async fn test_mkdir_duplicate_reports() {
        let vfs = Vfs::new();
        let mut cwd = VfsPath::root();
        vfs.create_dir(&cwd.clone(), "docs").await.unwrap();
        let out = MkdirCommand
            .execute(CommandContext { args: "docs", vfs: &vfs, cwd: &mut cwd })
            .await;
        assert_eq!(out.lines, vec!["A subdirectory or file docs already exists."]);
    }
}
