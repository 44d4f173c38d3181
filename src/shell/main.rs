use anyhow::Context;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use activities::modules::activities::adapters::in_memory::InMemoryActivityRegistry;
use activities::modules::activities::catalog::{default_catalog, load_catalog};
use activities::shell::config::AppConfig;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let seeds = match &config.activities_file {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };
    let registry =
        InMemoryActivityRegistry::new(seeds).context("seeding the activity registry")?;
    let state = AppState {
        registry: Arc::new(registry),
    };

    let app = router(state).layer(TraceLayer::new_for_http());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    tracing::info!("Activities API listening on http://{}", address);
    axum::serve(listener, app).await?;
    Ok(())
}
