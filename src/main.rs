use std::sync::Arc;

use person_service as app;
use person_service::storage::db;
use person_service::storage::repo::SeaOrmPersonRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let conn = db::connect(db::DATABASE_URL).await?;
    db::create_schema(&conn).await?;
    tracing::info!(url = db::DATABASE_URL, "database ready");

    let state = app::AppState {
        repo: Arc::new(SeaOrmPersonRepository::new(conn)),
    };

    app::run_server(state).await
}
