//! Generate records from a schema file without running the server.
//!
//! Run with:
//! ```
//! cargo run -p synth-data --bin synth -- schema.json --rows 5 --seed 42
//! ```
//!
//! The schema file has the same shape as the HTTP request body:
//! `{"fields": [{"name": "Age", "type": "int"}], "rows": 10}`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use synth_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "synth")]
#[command(about = "Generate synthetic records from a field schema")]
#[command(long_about = None)]
struct Cli {
    /// Path to a JSON schema file
    schema: PathBuf,

    /// Number of records (overrides the file)
    #[arg(long)]
    rows: Option<usize>,

    /// Seed for reproducible output (overrides the file)
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.schema)
        .with_context(|| format!("Failed to read {}", cli.schema.display()))?;
    let mut request: GenerationRequest = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid schema in {}", cli.schema.display()))?;

    if let Some(rows) = cli.rows {
        request.rows = rows;
    }
    if cli.seed.is_some() {
        request.seed = cli.seed;
    }

    tracing::info!(
        fields = request.fields.len(),
        rows = request.rows,
        "Generating from {}",
        cli.schema.display()
    );

    let response = RecordBuilder::new().generate(&request);

    let out = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{out}");

    Ok(())
}
