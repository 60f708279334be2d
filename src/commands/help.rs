use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandOutput};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["commands"]
    }

    async fn execute(&self, _ctx: CommandContext<'_>) -> CommandOutput {
        CommandOutput::lines(
            [
                "Available commands:",
                "  help (commands)      show this list",
                "  ls (dir)             list the current directory",
                "  cd <path>            change directory; no argument prints it",
                "  cat (type) <file>    print a file's content",
                "  mkdir <name>         create a directory",
                "  touch <name>         create an empty file",
                "  echo <text>          print text",
                "  tree                 draw the whole file tree",
                "  date                 show the current date and time",
                "  clear (cls)          clear the screen",
                "  ver                  show the shell version",
                "  launch (run) <file>  run a script or program",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        )
    }
}
