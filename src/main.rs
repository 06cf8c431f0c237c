//! `supplier-service` binary entrypoint.
//!
//! Loads configuration from the environment, provisions the database and
//! table on first run, and serves the HTTP API.

use supplier_service::{
    app_router, ensure_database_exists, ensure_supplier_table, AppState, ServiceConfig,
    SupplierRepository,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("supplier_service=info".parse()?),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ensure_supplier_table(&pool).await?;

    let state = AppState {
        repo: SupplierRepository::new(pool),
    };
    let app = app_router(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
