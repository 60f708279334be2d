use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};
use crate::fs::NodeKind;

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["dir"]
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        let target = if ctx.args.is_empty() {
            ctx.cwd.clone()
        } else {
            match ctx.vfs.resolve(ctx.cwd, ctx.args).await {
                Ok(path) => path,
                Err(_) => return CommandOutput::line("The system cannot find the path specified."),
            }
        };
        match ctx.vfs.list_children(&target).await {
            Ok(entries) => CommandOutput::lines(
                entries
                    .into_iter()
                    .map(|entry| match entry.kind {
                        NodeKind::Directory => format!("<DIR>   {}", entry.name),
                        NodeKind::File => format!("        {}", entry.name),
                    })
                    .collect(),
            ),
            Err(_) => CommandOutput::line("The system cannot find the path specified."),
        }
    }
}
