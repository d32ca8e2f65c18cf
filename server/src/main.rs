mod config;
mod error;
mod routes;

use std::sync::Arc;

use leptos::prelude::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,reavsuite=debug,tower_http=info")),
        )
        .init();

    let config = Arc::new(SiteConfig::from_env()?);
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    tracing::info!(
        base_domain = %config.base_domain,
        app_host = %config.app_host(),
        dev_port = config.port,
        "site configuration loaded"
    );

    let app = routes::app(conf.leptos_options, config);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "reavsuite listening");
    axum::serve(listener, app).await?;
    Ok(())
}
