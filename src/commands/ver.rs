use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};

pub struct VerCommand;

#[async_trait]
impl Command for VerCommand {
    fn name(&self) -> &'static str {
        "ver"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandOutput {
        CommandOutput::line(format!("Portal Shell [Version {}]", env!("CARGO_PKG_VERSION")))
    }
}
