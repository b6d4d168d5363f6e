//! Lexicon glossary API server.
//!
//! Serves a fixed, in-memory catalog of programming terms over HTTP/JSON:
//! listing with compound filters and pagination, per-term related-term
//! lookup, category listing, aggregate statistics, and random sampling.
//!
//! The catalog is compiled into the binary and validated at startup; a
//! structurally invalid definition aborts the process before the listener
//! binds.

use anyhow::{Context, Result};
use clap::Parser;
use lexicon_catalog::Catalog;
use lexicon_server::AppState;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lexicon-server")]
#[command(about = "Programming glossary HTTP API", long_about = None)]
#[command(version)]
struct Cli {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// Include error detail in 500 responses (also enabled by LEXICON_DEV=1)
    #[arg(long)]
    dev: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Startup-time hard failure: an invalid catalog means the process must
    // not start serving. No retry.
    let catalog = Catalog::load().context("failed to load the term catalog")?;

    let dev_mode = cli.dev || std::env::var("LEXICON_DEV").map(|v| v == "1").unwrap_or(false);
    if dev_mode {
        log::info!("Dev mode: 500 responses include error detail");
    }

    let state = Arc::new(AppState::new(catalog, dev_mode));
    let app = lexicon_server::app(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    log::info!("Serving glossary API on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
