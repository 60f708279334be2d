use async_trait::async_trait;
use chrono::Local;

use crate::commands::{Command, CommandContext, CommandOutput};

pub struct DateCommand;

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandOutput {
        CommandOutput::line(Local::now().format("%a %m/%d/%Y %H:%M:%S").to_string())
    }
}
