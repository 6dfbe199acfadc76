//! Hospital registry server: ensures the database and table exist, wires the
//! store, service, and routes explicitly, and serves.

use axum::Router;
use hospital_registry::{
    common_routes_with_ready, ensure_database_exists, ensure_hospitals_table, hospital_routes,
    AppState, HospitalService, PgHospitalStore,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hospital_registry=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "postgres://localhost/hospitals".into());
    ensure_database_exists(&database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    ensure_hospitals_table(&pool).await?;

    let store = Arc::new(PgHospitalStore::new(pool));
    let service = HospitalService::new(store);
    let state = AppState { service };

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(hospital_routes(state));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
