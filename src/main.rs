mod catalog;
mod config;
mod db;
mod entities;
mod error;
mod hnb;
mod models;
mod routes;
mod store;
#[cfg(test)]
mod test_support;

use std::{sync::Arc, time::Duration};

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{catalog::CatalogService, config::Config, hnb::HnbClient, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,movies=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("movies/0.1")
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url, config.database_max_connections).await?;
    let store = MovieStore::new(db);
    let rates = HnbClient::new(http, config.hnb_base_url.clone());
    let catalog = CatalogService::new(store, Arc::new(rates));

    let state = Arc::new(AppState { catalog });

    let app = routes::router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, hnb = %config.hnb_base_url, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
