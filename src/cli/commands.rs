// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Evaluate a password and print the meter
    Check {
        /// Password to evaluate
        #[arg(required = true)]
        password: String,
    },

    /// Generate a password and print its meter
    Generate,
}
