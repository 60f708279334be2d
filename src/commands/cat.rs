use async_trait::async_trait;

use crate::commands::{split_parent, Command, CommandContext, CommandOutput};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["type"]
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        if ctx.args.is_empty() {
            return CommandOutput::line("The system cannot find the file specified.");
        }
        let (dir, name) = split_parent(ctx.args);
        let parent = match ctx.vfs.resolve(ctx.cwd, dir).await {
            Ok(path) => path,
            Err(_) => return CommandOutput::line("The system cannot find the file specified."),
        };
        match ctx.vfs.read_file(&parent, name).await {
            Ok(content) => CommandOutput::lines(content.split('\n').map(String::from).collect()),
            Err(_) => CommandOutput::line("The system cannot find the file specified."),
        }
    }
}
