//! CLI argument definitions
//!
//! All Clap derive structs for `dsc-docs` command-line parsing.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Navigation registry for the DSC documentation site.
#[derive(Parser, Debug)]
#[command(name = "dsc-docs", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Registry data file to use instead of the embedded data set.
    #[arg(long, global = true, env = "DSC_DOCS_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "DSC_DOCS_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true)]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a slug to its topic identifier and title.
    Resolve(ResolveArgs),

    /// Show the display title of a topic.
    Title(TitleArgs),

    /// List categories, or the topics of one category in menu order.
    List(ListArgs),

    /// List known image assets.
    Images(ImagesArgs),

    /// Check the registry data for integrity problems.
    Validate(ValidateArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Category to search.
    pub category: String,

    /// Slug to resolve.
    pub slug: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `title`.
#[derive(Args, Debug)]
pub struct TitleArgs {
    /// Category to search.
    pub category: String,

    /// Topic identifier.
    pub topic: String,

    /// Truncate the title to this many characters.
    #[arg(long)]
    pub max_width: Option<usize>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Category to list; all categories when omitted.
    pub category: Option<String>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `images`.
#[derive(Args, Debug)]
pub struct ImagesArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: clap_complete::Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

impl ColorChoice {
    /// Whether log lines written to stderr should carry ANSI colors.
    #[must_use]
    pub fn stderr_ansi(self) -> bool {
        match self {
            Self::Auto => {
                std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_resolve() {
        let cli = Cli::try_parse_from([
            "dsc-docs",
            "resolve",
            "reference",
            "DSC-filter-syntax-1",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.category, "reference");
                assert_eq!(args.slug, "DSC-filter-syntax-1");
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected resolve, got {other:?}"),
        }
    }

    #[test]
    fn parse_global_registry_after_subcommand() {
        let cli =
            Cli::try_parse_from(["dsc-docs", "validate", "--registry", "data.yaml", "-vv"]).unwrap();
        assert_eq!(cli.registry, Some(PathBuf::from("data.yaml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn parse_list_without_category() {
        let cli = Cli::try_parse_from(["dsc-docs", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(ListArgs { category: None, .. })));
    }

    #[test]
    fn parse_completions_shell() {
        let cli = Cli::try_parse_from(["dsc-docs", "completions", "powershell"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Completions(CompletionsArgs {
                shell: clap_complete::Shell::PowerShell
            })
        ));
        assert!(Cli::try_parse_from(["dsc-docs", "completions", "tcsh"]).is_err());
    }

    #[test]
    fn color_never_and_always_ignore_terminal() {
        assert!(!ColorChoice::Never.stderr_ansi());
        assert!(ColorChoice::Always.stderr_ansi());
    }

    #[test]
    fn resolve_requires_slug() {
        assert!(Cli::try_parse_from(["dsc-docs", "resolve", "reference"]).is_err());
    }
}
