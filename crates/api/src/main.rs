use std::sync::Arc;

use anyhow::Context;

use catalogd_api::config::Config;
use catalogd_store::MySqlProductStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalogd_observability::init();

    let config = Config::from_env();

    let store = MySqlProductStore::connect(&config.database_url, config.db_max_connections)
        .await
        .context("failed to connect to database")?;

    let app = catalogd_api::app::build_app(Arc::new(store));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
