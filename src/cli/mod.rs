//! CLI module for the strenum generator
//!
//! `strenum <DIR> <TYPE_NAME> <VARIANTS>` generates one enum module and writes it to
//! `<DIR>/<lowercase type name>enum.rs`. `VARIANTS` is a single comma-separated argument.
//!
//! ## Flags
//!
//! - `--stdout` - print the module instead of writing it
//! - `--check` - fail if the file on disk differs from freshly generated output
//! - `--no-must` - do not emit `must_to_strings`
//!
//! ## Design
//!
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::backend::{CodegenConfig, GenerationError};
use crate::spec::EnumSpec;
use crate::version::STRENUM_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// Generation bug, I/O failure or a stale file under `--check`.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Bad input the user can fix.
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl From<GenerationError> for CliError {
    fn from(err: GenerationError) -> Self {
        if err.is_user_error() {
            CliError::usage(format!("Error: {}", err))
        } else {
            CliError::failure(format!("Error: {}", err))
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate a closed, string-backed Rust enum module
#[derive(Parser, Debug)]
#[command(name = "strenum")]
#[command(version = STRENUM_VERSION)]
#[command(about = "Generate a closed, string-backed Rust enum module", long_about = None)]
pub struct Cli {
    /// Directory the module is written to
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Enum type name (for example `Status`)
    #[arg(value_name = "TYPE_NAME")]
    pub type_name: String,

    /// Comma-separated variant strings, in declaration order
    #[arg(value_name = "VARIANTS", value_delimiter = ',', required = true)]
    pub variants: Vec<String>,

    /// Print the module to stdout instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Exit with code 1 if the file on disk is not up to date
    #[arg(long)]
    pub check: bool,

    /// Do not emit the panicking `must_to_strings` helper
    #[arg(long = "no-must")]
    pub no_must: bool,
}

impl Cli {
    /// Generation config for this invocation; the banner records `dir` as given.
    pub fn codegen_config(&self) -> CodegenConfig {
        CodegenConfig::new()
            .with_output_dir(self.dir.to_string_lossy())
            .with_must_helpers(!self.no_must)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code != ExitCode::SUCCESS {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the parsed invocation and return the exit code.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let spec = EnumSpec::new(cli.type_name.as_str(), cli.variants.iter().map(String::as_str))?;
    let config = cli.codegen_config();

    if cli.stdout {
        return commands::emit_stdout(&spec, config);
    }

    commands::validate_output_dir(&cli.dir)?;
    if cli.check {
        commands::check_module(&cli.dir, &spec, config)
    } else {
        commands::write_module(&cli.dir, &spec, config)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_positionals() {
        let cli = Cli::try_parse_from(["strenum", "gen", "main", "Something,Aaa,Bbb,Cc_xxxx_zzz"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("gen"));
        assert_eq!(cli.type_name, "main");
        assert_eq!(cli.variants, ["Something", "Aaa", "Bbb", "Cc_xxxx_zzz"]);
        assert!(!cli.stdout && !cli.check && !cli.no_must);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::try_parse_from(["strenum", "gen", "Status", "done", "--stdout", "--no-must"]).unwrap();
        assert!(cli.stdout);
        assert!(cli.no_must);
        assert!(!cli.codegen_config().must_helpers);
        assert_eq!(cli.codegen_config().banner_dir(), "gen");
    }

    #[test]
    fn test_cli_requires_variants() {
        assert!(Cli::try_parse_from(["strenum", "gen", "Status"]).is_err());
    }

    #[test]
    fn test_cli_stdout_conflicts_with_check() {
        assert!(Cli::try_parse_from(["strenum", "gen", "Status", "done", "--stdout", "--check"]).is_err());
    }

    #[test]
    fn test_generation_errors_map_to_exit_codes() {
        let usage: CliError = GenerationError::InvalidSpec("x".to_string()).into();
        assert_eq!(usage.exit_code, ExitCode::USAGE);
        let failure: CliError = GenerationError::CodegenInvalid("x".to_string()).into();
        assert_eq!(failure.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_execute_rejects_collisions_as_usage_error() {
        let cli = Cli::try_parse_from(["strenum", "gen", "Status", "Aa_b,AaB", "--stdout"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::USAGE);
        assert!(err.message.contains("Aa_b"));
    }

    #[test]
    fn test_execute_writes_then_checks() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("gen");
        let dir_arg = dir.to_string_lossy().to_string();

        let check = |extra: &[&str]| {
            let mut args = vec!["strenum", dir_arg.as_str(), "Status", "backlog,done"];
            args.extend_from_slice(extra);
            execute(Cli::try_parse_from(args).unwrap())
        };

        assert_eq!(check(&["--check"]).unwrap(), ExitCode::FAILURE);
        assert_eq!(check(&[]).unwrap(), ExitCode::SUCCESS);
        assert!(dir.join("statusenum.rs").is_file());
        assert_eq!(check(&["--check"]).unwrap(), ExitCode::SUCCESS);
        assert_eq!(check(&["--no-must", "--check"]).unwrap(), ExitCode::FAILURE);
    }
}
