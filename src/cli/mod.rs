pub mod format;
pub mod toml_config;

use crate::assemble::Assembly;
use crate::load::{self, LoadError};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "lintrc",
    version,
    about = "Assemble layered lint rule sets into one ESLint config"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the assembled configuration.
    Print {
        /// Path to lintrc.toml. Without it the built-in configuration is used.
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Only include rules whose id matches one of these globs.
        #[arg(long = "only")]
        only: Vec<String>,

        /// Write JSON to this file instead of stdout.
        #[arg(short, long, conflicts_with = "format")]
        out: Option<PathBuf>,
    },
    /// Show which layer configured a rule and what it replaced.
    Explain {
        rule: String,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List built-in presets.
    Presets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Process exit code for a successful command.
pub const EXIT_OK: i32 = 0;
/// `explain` was asked about a rule the config does not set.
pub const EXIT_NOT_CONFIGURED: i32 = 1;
/// Config could not be loaded or output could not be written.
pub const EXIT_ERROR: i32 = 2;

fn fail(e: impl std::fmt::Display) -> i32 {
    eprintln!("\x1b[31merror\x1b[0m: {}", e);
    EXIT_ERROR
}

fn assembly_for(config: Option<&Path>) -> Result<Assembly, LoadError> {
    match config {
        Some(path) => load::load_config(path),
        None => Ok(load::builtin_assembly()),
    }
}

/// Execute a parsed command and return the process exit code.
pub fn run(command: Commands) -> i32 {
    match command {
        Commands::Print {
            config,
            format: output_format,
            only,
            out,
        } => {
            let assembly = match assembly_for(config.as_deref())
                .and_then(|a| load::retain_matching(&a, &only))
            {
                Ok(a) => a,
                Err(e) => return fail(e),
            };

            if let Some(out) = out {
                if let Err(e) = format::write_json(&assembly.record, &out) {
                    return fail(format!("failed to write {}: {}", out.display(), e));
                }
                tracing::info!(path = %out.display(), "wrote config");
                return EXIT_OK;
            }

            match output_format {
                OutputFormat::Pretty => format::print_pretty(&assembly),
                OutputFormat::Json => {
                    if let Err(e) = format::print_json(&assembly.record) {
                        return fail(e);
                    }
                }
            }
            EXIT_OK
        }
        Commands::Explain { rule, config } => {
            let assembly = match assembly_for(config.as_deref()) {
                Ok(a) => a,
                Err(e) => return fail(e),
            };
            if format::print_explain(&assembly, &rule) {
                EXIT_OK
            } else {
                EXIT_NOT_CONFIGURED
            }
        }
        Commands::Presets => {
            format::print_presets();
            EXIT_OK
        }
    }
}
