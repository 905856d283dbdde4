use std::path::PathBuf;

use anyhow::Context;
use clap::{Args as ClapArgs, Parser};
use podium_server::infra::{
    config::Config,
    startup::{build_app, load_state},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "podium-server")]
#[command(about = "Serve the Podium leaderboards over HTTP")]
struct Cli {
    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,

    /// Algorithm leaderboard JSON
    #[arg(long, env = "ALGORITHM_DATA_PATH")]
    algorithms: Option<PathBuf>,

    /// Model leaderboard JSON
    #[arg(long, env = "MODEL_DATA_PATH")]
    models: Option<PathBuf>,

    /// Root of the evaluation results tree
    #[arg(long, env = "RESULTS_DIR")]
    results_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_file_loaded = dotenvy::dotenv().is_ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if env_file_loaded {
        info!("loaded .env file");
    }

    let config = load_runtime_config(&cli.serve)?;
    run_server(config).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Config> {
    let mut config = Config::from_env().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if let Some(path) = args.algorithms.clone() {
        config.data.algorithm_data_path = path;
    }
    if let Some(path) = args.models.clone() {
        config.data.model_data_path = path;
    }
    if let Some(dir) = args.results_dir.clone() {
        config.results.results_dir = dir;
    }
    Ok(config)
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let addr = config
        .server
        .socket_addr()
        .context("invalid server address")?;
    let state = load_state(config)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "podium server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
