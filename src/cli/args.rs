//! CLI argument definitions
//!
//! All Clap derive structs for `coursework` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Load and validate JSON run configurations.
#[derive(Parser, Debug)]
#[command(name = "coursework", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "COURSEWORK_COLOR")]
    pub color: ColorChoice,

    /// Log output format on stderr.
    #[arg(long, default_value = "human", global = true, env = "COURSEWORK_LOG_FORMAT")]
    pub log_format: LogFormat,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate configuration files.
    Validate(ValidateArgs),

    /// Load a configuration file and print it.
    Show(ShowArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Configuration Commands
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration files to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Reject unrecognized keys instead of ignoring them.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Configuration file to load.
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
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
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
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

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_multiple_files() {
        let cli = Cli::try_parse_from(["coursework", "validate", "a.json", "b.json"]).unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.files.len(), 2);
                assert!(!args.strict);
                assert_eq!(args.format, OutputFormat::Human);
            }
            other => panic!("Expected Validate, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_requires_files() {
        let result = Cli::try_parse_from(["coursework", "validate"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_strict_json() {
        let cli = Cli::try_parse_from([
            "coursework",
            "validate",
            "--strict",
            "--format",
            "json",
            "a.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Validate(args) => {
                assert!(args.strict);
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("Expected Validate, got {other:?}"),
        }
    }

    #[test]
    fn test_show_single_file() {
        let cli = Cli::try_parse_from(["coursework", "show", "config.json"]).unwrap();
        match cli.command {
            Commands::Show(args) => assert_eq!(args.file, PathBuf::from("config.json")),
            other => panic!("Expected Show, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["coursework", "show", "c.json", "-vv", "--color", "never"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_log_format_flag() {
        let cli = Cli::try_parse_from(["coursework", "show", "c.json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Human);

        let cli =
            Cli::try_parse_from(["coursework", "validate", "a.json", "--log-format", "json"])
                .unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["coursework", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["coursework", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
