//! CLI for previewing completion badges offline.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use actimg_core::config::{self, FilterConfig};

use commands::{run_completions, run_index, run_man, run_normalize, run_render};

/// Top-level CLI for actimg.
#[derive(Debug, Parser)]
#[command(name = "actimg")]
#[command(about = "actimg: activity completion badges for course HTML", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/actimg/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run HTML through the filter against a course snapshot and print the result.
    Render {
        /// Course snapshot JSON (modules, completion, strings).
        #[arg(long, value_name = "FILE")]
        snapshot: PathBuf,

        /// View as this user instead of the snapshot's user.
        #[arg(long, value_name = "ID")]
        user: Option<i64>,

        /// Filter option passed through from the rendering pipeline (repeatable).
        #[arg(long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        options: Vec<(String, String)>,

        /// HTML file to filter; reads stdin when omitted.
        input: Option<PathBuf>,
    },

    /// Print the activity index built from a snapshot.
    Index {
        /// Course snapshot JSON.
        #[arg(long, value_name = "FILE")]
        snapshot: PathBuf,

        /// View as this user instead of the snapshot's user.
        #[arg(long, value_name = "ID")]
        user: Option<i64>,
    },

    /// Show the lookup path each URL normalizes to.
    Normalize {
        /// URLs or hrefs to normalize.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a man page (roff) to stdout.
    Man,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.trim().is_empty() {
        return Err(format!("empty option key in `{s}`"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}

fn load_config(path: Option<&PathBuf>) -> Result<FilterConfig> {
    match path {
        Some(path) => config::load_from(path),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Render {
                snapshot,
                user,
                options,
                input,
            } => {
                let cfg = load_config(cli.config.as_ref())?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_render(cfg, &snapshot, user, options.into_iter().collect(), input.as_deref())?;
            }
            CliCommand::Index { snapshot, user } => run_index(&snapshot, user)?,
            CliCommand::Normalize { urls } => run_normalize(&urls),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}
