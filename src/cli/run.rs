/// Main entry point for the i18n-extract CLI.
///
/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with diagnostics and counts
/// - `Err` if the command fails (e.g., invalid config, unwritable output)
use super::{
    args::{Arguments, Command},
    commands::{CommandResult, extract::extract, init::init},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
