//! Command-line interface for override-yaml
//!
//! Reads the three templates, applies the overrides given as flags or
//! `INIT_*` environment variables and prints the result, or saves it in place.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;

pub use args::OverrideArgs;

use crate::config::{ProcessEnv, Sources};
use crate::overrides::{self, Overrides};
use crate::render::{render_stream, save_in_place};
use crate::template::Templates;

/// Override values in deployment YAML templates from flags and environment variables
#[derive(Parser)]
#[command(name = "override-yaml")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Write the results back to the template files instead of stdout
    #[arg(long)]
    pub save: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins when set; otherwise --verbose picks DEBUG over WARN.
    // Logs go to stderr, stdout carries the YAML stream.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    execute(&cli)
}

fn execute(cli: &Cli) -> Result<()> {
    let paths = cli.overrides.template_paths();
    let sources = Sources::standard(cli.overrides.flag_source(), ProcessEnv);
    let resolved = Overrides::resolve(&sources).context("Failed resolving overrides")?;

    let mut templates = Templates::load(&paths)?;
    let applied = overrides::apply(&mut templates, &resolved)?;
    tracing::info!("Applied {} overrides from {} settings", applied.len(), resolved.len());

    if cli.save {
        save_in_place(&templates)?;
        return Ok(());
    }

    let stream = render_stream(&templates)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(stream.as_bytes()).context("Failed writing to stdout")?;
    stdout.flush().context("Failed writing to stdout")?;
    Ok(())
}
