use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skill_engine::requests::handle_line;
use skill_engine::{AppState, Config};

fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging. stdout carries responses, so logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("skill_engine={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting Skill Engine v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(&config).context("Failed to build skill index")?;
    info!(
        "Skill index ready ({} skills); reading requests from stdin",
        state.index.len()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut served = 0usize;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read request line")?;
        if line.trim().is_empty() {
            continue;
        }

        let body = match handle_line(&state, &line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Request rejected: {e}");
                e.to_envelope()
            }
        };

        writeln!(stdout, "{body}")?;
        stdout.flush()?;
        served += 1;
    }

    info!("Input closed after {served} requests; shutting down");
    Ok(())
}
