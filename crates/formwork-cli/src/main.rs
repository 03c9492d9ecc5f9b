//! formwork CLI
//!
//! Builds a form from a JSON layout, fills it, validates it and prints the result.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use formwork_cli::{parse_assignment, run, Options};

/// Build, fill and validate a form layout.
#[derive(Parser)]
#[command(name = "formwork")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON layout file.
    layout: PathBuf,

    /// JSON configuration file (marker classes, patterns).
    #[arg(short, long, env = "FORMWORK_CONFIG")]
    config: Option<PathBuf>,

    /// Set a field value before validating, as ID=VALUE. Repeatable.
    #[arg(short = 's', long = "set", value_name = "ID=VALUE", value_parser = parse_assignment)]
    values: Vec<(String, String)>,

    /// Render the form before validating.
    #[arg(short, long)]
    render: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let report = run(&Options {
        layout: cli.layout,
        config: cli.config,
        values: cli.values,
        render: cli.render,
    })?;
    print!("{report}");
    Ok(())
}
