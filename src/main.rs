use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use midiwrite::{config::Config, service::Generator};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Encode a JSON event request into a Standard MIDI File
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// RON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Override the directory files are written into"
    )]
    output_root: Option<PathBuf>,

    /// Request body; read from stdin when absent
    request: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path).context("load config")?,
        None => Config::default(),
    };
    if let Some(root) = args.output_root {
        config.output_root = root;
    }

    let body = match &args.request {
        Some(path) => fs::read(path)
            .with_context(|| format!("read {}", path.display()))?,
        None => {
            let mut body = Vec::new();
            io::stdin().read_to_end(&mut body).context("read stdin")?;
            body
        }
    };

    let generator = Generator::from_config(&config).context("configure generator")?;
    match generator.handle_json(&body) {
        Ok(path) => {
            println!("{}", path.display());
            Ok(())
        }
        Err(e) => {
            let status = e.status();
            error!(%status, error = %e, "request failed");
            bail!("{status}: {e}")
        }
    }
}
