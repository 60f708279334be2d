use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["cls"]
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandOutput {
        CommandOutput::clear()
    }
}
