use clap::Parser;

use crate::domain::Command;

#[derive(Parser, Debug)]
#[command(name = "gator")]
#[command(about = "Personal RSS feed aggregator")]
#[command(version)]
#[command(override_usage = "gator <COMMAND> [ARGS]...")]
pub struct Cli {
    /// Command to run (login, register, reset, users, agg, addfeed, feeds, follow, following)
    pub command: Option<String>,

    /// Arguments passed to the command verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// The verb and its arguments, or `None` when no verb was given
    pub fn into_command(self) -> Option<Command> {
        let name = self.command?;
        Some(Command::new(name, self.args))
    }
}
