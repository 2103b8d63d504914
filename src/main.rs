//! miniredis - interactive shell over an in-process TTL store
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.
//! Logs go to stderr.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::AsyncWriteExt;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use miniredis::shell::{handle_line, spawn_line_reader, Reply};
use miniredis::{spawn_sweep_task, Config, Store};

/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the store and start the background sweeper
/// 4. Serve stdin until EOF, QUIT or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "miniredis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: sweep_interval={}s, initial_capacity={}",
        config.sweep_interval, config.initial_capacity
    );

    let store = Arc::new(Store::with_capacity(config.initial_capacity));

    let sweeper = config
        .sweeper_enabled()
        .then(|| spawn_sweep_task(store.clone(), config.sweep_interval));
    if sweeper.is_none() {
        info!("Background sweeper disabled");
    }

    // Stdin is read on its own thread so a pending read never delays shutdown
    let lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()));

    let result = tokio::select! {
        result = serve(&store, lines) => result,
        _ = shutdown_signal() => Ok(()),
    };

    if let Some(handle) = sweeper {
        handle.abort();
        warn!("Sweep task aborted");
    }

    let stats = store.stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        expired = stats.expired,
        entries = stats.total_entries,
        "Session finished"
    );
    result
}

/// Answers stdin lines until EOF or QUIT.
async fn serve(
    store: &Store,
    mut lines: mpsc::Receiver<std::io::Result<String>>,
) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.recv().await {
        let line = line.context("failed to read from stdin")?;
        let Some(reply) = handle_line(store, &line) else {
            continue;
        };

        stdout
            .write_all(format!("{}\n", reply).as_bytes())
            .await
            .context("failed to write reply")?;
        stdout.flush().await.context("failed to flush stdout")?;

        if reply == Reply::Bye {
            break;
        }
    }

    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
