use axum::serve;
use petclinic_visits::api::routes::create_router;
use petclinic_visits::config::{AppConfig, StorageBackend};
use petclinic_visits::seed;
use petclinic_visits::store::{InMemoryStore, PostgresStore, Store};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("sqlx", LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{} storage={:?}",
        config.server.host,
        config.server.port,
        config.storage.backend
    );

    match config.storage.backend {
        StorageBackend::Memory => {
            log::info!("Using in-memory storage");
            run_with_store(Arc::new(InMemoryStore::new()), &config).await
        }
        StorageBackend::Postgres => {
            log::info!("Connecting to PostgreSQL...");
            let store = PostgresStore::new(&config.database_url(), config.max_connections()).await?;
            log::info!("Running database migrations...");
            store.migrate().await?;
            run_with_store(Arc::new(store), &config).await
        }
    }
}

async fn run_with_store<S: Store + 'static>(store: Arc<S>, config: &AppConfig) -> anyhow::Result<()> {
    if config.storage.load_seed_data {
        log::info!("Loading seed data...");
        seed::load_seed_data(&*store).await?;
    }

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("PetClinic visits server running on http://{}", bind_address);

    let app: axum::Router = create_router().with_state(store);
    serve(listener, app).await?;

    Ok(())
}
