use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::{io::AsyncReadExt, net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pinfluencer::{
    app::create_app,
    config::Config,
    processors::{dispatch, Route},
    state::AppState,
};
use pinfluencer_core::api::ApiEvent;

/// Pinfluencer - Match brands with influencers
#[derive(Parser, Debug)]
#[command(name = "pinfluencer")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve every route over HTTP
    Serve {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "3000", env = "PORT")]
        port: u16,
    },
    /// Run one route against an API gateway event and print the response
    Invoke {
        /// Route to run
        #[arg(value_enum)]
        route: Route,

        /// File holding the event JSON (read from stdin when absent)
        #[arg(long)]
        event: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    init_tracing(&config);

    let state = AppState::new(&config).await?;

    match cli.command {
        Command::Serve { host, port } => serve(state, &host, port).await,
        Command::Invoke { route, event } => invoke(state, route, event).await,
    }
}

/// Logs go to stderr so `invoke` keeps stdout for the response.
fn init_tracing(config: &Config) {
    let json = config.log_json;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pinfluencer=debug,tower_http=debug".into()),
        )
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let app = create_app(state.clone());

    let addr = format!("{host}:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    state.close().await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn invoke(state: AppState, route: Route, event_path: Option<PathBuf>) -> Result<()> {
    let raw = match event_path {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read event from {}", path.display()))?,
        None => {
            let mut raw = String::new();
            tokio::io::stdin().read_to_string(&mut raw).await?;
            raw
        }
    };

    let event: ApiEvent = serde_json::from_str(&raw).context("event is not valid JSON")?;
    let response = dispatch(&state, route, &event).await;

    if !response.is_ok() {
        tracing::warn!(?route, status = response.status_code, "Route returned an error");
    }
    println!("{}", serde_json::to_string_pretty(&response.as_lambda_json())?);

    state.close().await?;
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
