use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        if ctx.args.is_empty() {
            return CommandOutput::line(ctx.cwd.to_string());
        }
        match ctx.vfs.resolve(ctx.cwd, ctx.args).await {
            Ok(path) => {
                *ctx.cwd = path;
                CommandOutput::none()
            }
            Err(_) => CommandOutput::line("The system cannot find the path specified."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{Vfs, VfsPath};

    #[tokio::test]
    async fn test_cd_changes_directory() {
        let vfs = Vfs::new();
        let root = VfsPath::root();
        vfs.create_dir(&root, "docs").await.unwrap();

        let mut cwd = VfsPath::root();
        let out = CdCommand
            .execute(CommandContext { args: "docs", vfs: &vfs, cwd: &mut cwd })
            .await;
        assert!(out.lines.is_empty());
        assert_eq!(cwd.to_string(), "C:\\docs");
    }

    #[tokio::test]
    async fn test_cd_failure_keeps_cwd() {
        let vfs = Vfs::new();
        let mut cwd = VfsPath::root();
        let out = CdCommand
            .execute(CommandContext { args: "ghost", vfs: &vfs, cwd: &mut cwd })
            .await;
        assert_eq!(out.lines, vec!["The system cannot find the path specified."]);
        assert!(cwd.is_root());
    }

    #[tokio::test]
    async fn test_cd_without_args_prints_cwd() {
        let vfs = Vfs::new();
        let mut cwd = VfsPath::root();
        let out = CdCommand
            .execute(CommandContext { args: "", vfs: &vfs, cwd: &mut cwd })
            .await;
        assert_eq!(out.lines, vec!["C:"]);
    }
}
