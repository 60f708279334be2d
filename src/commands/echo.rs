use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        CommandOutput::line(ctx.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{Vfs, VfsPath};

    #[tokio::test]
    async fn test_echo_repeats_args() {
        let vfs = Vfs::new();
        let mut cwd = VfsPath::root();
        let out = EchoCommand
            .execute(CommandContext { args: "hello world", vfs: &vfs, cwd: &mut cwd })
            .await;
        assert_eq!(out.lines, vec!["hello world"]);
    }
}
