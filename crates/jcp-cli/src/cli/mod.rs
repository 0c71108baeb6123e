//! CLI for the jcp dependency resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use jcp_core::config;

use commands::{run_clear_cache, run_completions, run_resolve};

/// Top-level CLI for the jcp dependency resolver.
#[derive(Debug, Parser)]
#[command(name = "jcp")]
#[command(about = "jcp: resolve Maven dependency locators into a cached classpath", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve dependency locators and print the classpath on stdout.
    Resolve {
        /// Dependency locators, groupId:artifactId:version[:classifier][@type].
        #[arg(required = true, value_name = "LOCATOR")]
        locators: Vec<String>,

        /// Repository reference: <url>, <id>=<url>, or an alias (jcenter,
        /// google, mavenCentral). Repeatable; defaults to jcenter.
        #[arg(long = "repo", value_name = "REF")]
        repos: Vec<String>,

        /// Suppress progress logging; the classpath is still printed.
        #[arg(long)]
        quiet: bool,
    },

    /// Remove the resolution cache so the next resolve starts fresh.
    ClearCache,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve {
                locators,
                repos,
                quiet,
            } => run_resolve(&cfg, &locators, &repos, quiet)?,
            CliCommand::ClearCache => run_clear_cache(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
