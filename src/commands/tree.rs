use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};

pub struct TreeCommand;

#[async_trait]
impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        CommandOutput::lines(ctx.vfs.render_tree().await)
    }
}
