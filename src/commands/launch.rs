use async_trait::async_trait;

use crate::commands::{split_parent, Command, CommandContext, CommandOutput};

pub struct LaunchCommand;

fn extension(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

#[async_trait]
impl Command for LaunchCommand {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["run"]
    }

    async fn execute(&self, ctx: CommandContext<'_>) -> CommandOutput {
        if ctx.args.is_empty() {
            return CommandOutput::line("The syntax of the command is incorrect.");
        }
        let (dir, name) = split_parent(ctx.args);
        let parent = match ctx.vfs.resolve(ctx.cwd, dir).await {
            Ok(path) => path,
            Err(_) => return CommandOutput::line("The system cannot find the file specified."),
        };
        let content = match ctx.vfs.read_file(&parent, name).await {
            Ok(content) => content,
            Err(_) => return CommandOutput::line("The system cannot find the file specified."),
        };
        match extension(name).map(str::to_ascii_lowercase).as_deref() {
            Some("bat") | Some("scc") => CommandOutput::run_script(content),
            Some("exe") => CommandOutput::line(format!("Running {}... (simulated)", name)),
            _ => CommandOutput::line(format!("'{}' is not a runnable file.", name)),
        }
    }
}
