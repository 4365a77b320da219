//! hostinfo: a minimal JSON info service.
//!
//! This is the application entry point. It resolves configuration from
//! defaults, an optional TOML file, the environment and the command line,
//! initializes tracing, builds the Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hostinfo::config::{AppConfig, ConfigOverrides};
use hostinfo::http::start_server;
use hostinfo::{create_router, AppState};

/// hostinfo: report service status and host identity over HTTP
#[derive(Parser, Debug)]
#[command(name = "hostinfo", version, about)]
struct Args {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind (overrides http.host and HOSTINFO_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides http.port and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "hostinfo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Resolve configuration with priority: CLI > env > file > defaults
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.apply_env()?;
    config.apply_overrides(&ConfigOverrides {
        host: args.host,
        port: args.port,
        debug: args.debug,
    });
    config.validate()?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.logging.default_filter().to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        config_file = args.config.as_deref().unwrap_or("<none>"),
        python_version = %config.runtime.python_version,
        environment = %config.runtime.environment,
        debug = config.logging.debug,
        "Loaded configuration"
    );

    let addr = config.socket_addr()?;

    // Create application state and router
    let state = AppState::new(config);
    let app = create_router(state);

    start_server(app, addr).await?;

    Ok(())
}
