//! `dsc-docs` - navigation registry for the DSC documentation site

use clap::Parser;

use dsc_docs::cli::args::Cli;
use dsc_docs::cli::commands;
use dsc_docs::error::ExitCode;
use dsc_docs::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
