//! `completions` command handler

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};

/// Write a completion script for the requested shell to stdout.
pub fn run(args: &CompletionsArgs) {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    clap_complete::generate(args.shell, &mut command, bin_name, &mut std::io::stdout());
}
