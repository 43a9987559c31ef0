mod cli;

use crate::cli::{Cli, GeneratorArg};
use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tinylink_core::Shortener;
use tinylink_gateway::{App, AppState};
use tinylink_generator::{Generator, SeqGenerator, ShuffleGenerator, UuidGenerator};
use tinylink_shortener::ShortenerService;
use tinylink_storage::InMemoryRepository;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Cli::parse();

    tinylink_telemetry::init(config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        status_policy = %config.status_policy,
        generator = %config.generator,
        "starting tinylink server"
    );

    let generator: Box<dyn Generator> = match config.generator {
        GeneratorArg::Shuffle => Box::new(ShuffleGenerator::from_os_rng()),
        GeneratorArg::Uuid => Box::new(UuidGenerator::from_os_rng()),
        GeneratorArg::Seq => Box::new(SeqGenerator::with_prefix(config.generator_prefix)),
    };
    generator
        .validate()
        .with_context(|| format!("invalid settings for the {} generator", config.generator))?;
    let shortener: Arc<dyn Shortener> =
        Arc::new(ShortenerService::new(InMemoryRepository::new(), generator));

    let state = AppState::builder()
        .shortener(shortener)
        .public_base_url(config.public_base_url)
        .policy(config.status_policy.into())
        .build();

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received, draining connections");
}
