mod config;
mod errors;
mod routes;
mod server;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={level},tower_http={level}",
                env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Aurora Core API v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.bind_addr()?;
    let listener = server::bind(addr).await?;
    info!("Listening on {}", listener.local_addr().unwrap_or(addr));

    server::serve(listener, build_router(), server::shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}
