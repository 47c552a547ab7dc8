//! Citas Server - Production Bootstrap

use infrastructure::config::LoggingConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use citas_server::bootstrap::{build_router, initialize_server, log_config_summary};

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.format == "pretty" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging = LoggingConfig::from_env()?;
    init_tracing(&logging);

    info!("🚀 Starting Citas Server");

    let server_components = initialize_server().await.map_err(|e| {
        tracing::error!("❌ Failed to initialize server: {}", e);
        e
    })?;

    log_config_summary(&server_components.config);
    info!("🌐 Setting up HTTP routes...");

    let port = server_components.config.server.port;
    let host = server_components.config.server.host.clone();

    let app = build_router(&server_components);
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    info!("✅ Server listening on http://{}:{}", host, port);

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                tracing::error!("❌ HTTP server error: {}", e);
                return Err(e.into());
            }
            info!("🔄 HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("🛑 Received Ctrl-C, initiating graceful shutdown...");
        }
    }

    info!("✅ Server shutdown complete");
    Ok(())
}
