mod config;
mod error;
mod routes;

use clap::Parser;
use layers::LayerSet;
use runtime::{MapStore, ViewState, ViewStateController};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::ServerError;
use crate::routes::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::parse();
    let viewport = config.initial_viewport()?;
    let store = MapStore::new(
        ViewStateController::with_sample_data(),
        ViewState::new(viewport, LayerSet::all()),
    )
    .with_pick_tolerance(config.pick_tolerance()?);

    let app = router(AppState::new(store, config.style_url.as_str()));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("map server listening on http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
