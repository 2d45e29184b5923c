//! tagmap-gen CLI
//!
//! Usage:
//!   cargo run --bin tagmap-gen
//!   cargo run --bin tagmap-gen -- --target api/query.go --dry-run
//!
//! With no flags this regenerates `tagMap` in `api/query.go` from the
//! published release database.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tagmap_gen::config::{DEFAULT_SOURCE_URL, DEFAULT_TARGET_PATH, DEFAULT_VAR_NAME};
use tagmap_gen::{pipeline, HttpSource, SyncConfig};

#[derive(Parser, Debug)]
#[command(name = "tagmap-gen")]
#[command(about = "Regenerate the embedded tag translation table")]
struct Args {
    /// URL of the taxonomy database (db.text.json)
    #[arg(long, env = "TAGMAP_SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    url: String,

    /// Source file containing the table declaration
    #[arg(long, env = "TAGMAP_TARGET", default_value = DEFAULT_TARGET_PATH)]
    target: PathBuf,

    /// Identifier of the table declaration
    #[arg(long, env = "TAGMAP_VAR_NAME", default_value = DEFAULT_VAR_NAME)]
    var_name: String,

    /// Print the patched file instead of writing it
    #[arg(long, short = 'n')]
    dry_run: bool,
}

impl From<Args> for SyncConfig {
    fn from(args: Args) -> Self {
        SyncConfig::new()
            .with_source_url(args.url)
            .with_target_path(args.target)
            .with_var_name(args.var_name)
            .with_dry_run(args.dry_run)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SyncConfig::from(Args::parse());
    tracing::info!(target_path = %config.target_path.display(), "updating {}", config.var_name);

    let report = pipeline::run(&config, &HttpSource::new())
        .await
        .map_err(|err| {
            let stage = err.stage();
            anyhow::Error::new(err).context(format!(
                "{stage} stage failed while regenerating {}",
                config.target_path.display()
            ))
        })?;

    if report.written {
        tracing::info!(
            categories = report.categories,
            tags = report.tags,
            "update complete"
        );
    } else {
        print!("{}", report.patched);
    }

    Ok(())
}
