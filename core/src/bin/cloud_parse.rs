//! cloud-parse: laveste skybase pr dag fra ceilometer-logg.
//!
//! ```bash
//! cloud-parse < clouds.log
//! cloud-parse --input clouds.log --json
//! RUST_LOG=debug cloud-parse --config limits.json < clouds.log
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cloudparse_core::{load_config, run, write_json, write_text, AnalyzerConfig};

#[derive(Parser)]
#[command(name = "cloud-parse")]
#[command(about = "Daily minimum cloud base from ceilometer logs")]
struct Cli {
    /// Input log (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// JSON config with window/day limits
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let cfg = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };

    let report = match &cli.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            run(BufReader::new(file), cfg)?
        }
        None => run(io::stdin().lock(), cfg)?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        write_json(&report, &mut out)?;
    } else {
        write_text(&report, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
