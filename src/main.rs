use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use orderbook::{
    clock::SystemClock,
    config::{self, StorageKind},
    repository::{mongo, InMemoryOrderRepository, MongoOrderRepository, OrderRepository},
    routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = config::load();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_target(true)
        .init();

    let orders: Arc<dyn OrderRepository> = match settings.storage {
        StorageKind::Mongo => {
            let repo = MongoOrderRepository::connect(&settings.mongodb_uri, &settings.mongodb_db)
                .await
                .context("failed to connect to MongoDB")?;
            if let Err(e) = mongo::ensure_indexes(repo.database()).await {
                tracing::warn!(error = %e, "could not create order indexes");
            }
            tracing::info!(db = %settings.mongodb_db, "using MongoDB storage");
            Arc::new(repo)
        }
        StorageKind::Memory => {
            tracing::info!("using in-memory storage");
            Arc::new(InMemoryOrderRepository::new())
        }
    };

    let state = AppState {
        orders,
        clock: Arc::new(SystemClock),
    };

    let app = routes::app(state);

    let ip = settings
        .host
        .parse::<std::net::IpAddr>()
        .with_context(|| format!("invalid HOST: {}", settings.host))?;
    let addr = SocketAddr::from((ip, settings.port));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
