mod error;
mod routes;

pub use routes::{router, AppState};

use crate::prelude::{eprintln, *};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, clap::Args)]
pub struct ServeOptions {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
}

/// Everything the server needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub facts_url: String,
    pub fact_timeout: Duration,
}

impl ServerConfig {
    pub fn new(options: ServeOptions, global: &crate::Global) -> Self {
        Self {
            host: options.host,
            port: options.port,
            facts_url: global.facts_url.clone(),
            fact_timeout: Duration::from_secs(global.fact_timeout),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let config = ServerConfig::new(options, &global);
    let addr = config.addr();

    if global.verbose {
        eprintln!("Starting numclass server on {addr}...");
        eprintln!("Fun fact service: {}", config.facts_url);
    }

    let state = Arc::new(AppState::from_config(&config)?);
    let app_router = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    info!("numclass listening on http://{addr}");
    if global.verbose {
        eprintln!("Classify endpoint: http://{addr}/api/classify-number?number=<n>");
        eprintln!("Health endpoint: http://{addr}/health");
    }

    axum::serve(listener, app_router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    info!("numclass stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
