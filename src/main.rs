use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use transposex::config::{AppConfig, LoggingConfig};
use transposex::engine::MusicXmlEngine;
use transposex::http;
use transposex::service::{ScratchMode, TransposeService};

/// TransposeX - MusicXML transposition service
#[derive(Parser)]
#[command(name = "transposex")]
#[command(about = "Transpose MusicXML scores over HTTP and retitle them for the new key")]
#[command(version)]
struct Cli {
    /// Path to configuration file (YAML)
    #[arg(short, long, env = "TRANSPOSEX_CONFIG")]
    config: Option<PathBuf>,

    /// Bind host (overrides config)
    #[arg(long, env = "TRANSPOSEX_HOST")]
    host: Option<String>,

    /// Port for the HTTP server (overrides config)
    #[arg(short, long, env = "TRANSPOSEX_PORT")]
    port: Option<u16>,

    /// Scratch storage for request documents (overrides config)
    #[arg(long, value_enum)]
    scratch: Option<ScratchMode>,

    /// Directory for scratch files (overrides config)
    #[arg(long)]
    scratch_dir: Option<PathBuf>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(mode) = self.scratch {
            config.scratch.mode = mode;
        }
        if let Some(dir) = &self.scratch_dir {
            config.scratch.dir = Some(dir.clone());
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    // init() also routes `log` records from the library into tracing
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    init_logging(&config.logging);

    let address = config.server.bind_address()?;
    let service = Arc::new(TransposeService::new(MusicXmlEngine::new(), config.service_options()));
    let app = http::router(service, &config.server);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    tracing::info!(
        %address,
        scratch = ?config.scratch.mode,
        "TransposeX listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("TransposeX stopped");
    Ok(())
}
