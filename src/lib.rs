pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

pub use api::routes;

pub use logic::{ClinicError, VisitContext, VisitFlow, VisitFormModel, VisitOutcome, VISIT_FORM_VIEW};

pub use model::*;

pub use store::{InMemoryStore, PostgresStore, Store};

/// Bind `listener` and serve the API backed by `store` until the task is dropped
pub async fn serve_with_store<S: Store + 'static>(
    listener: tokio::net::TcpListener,
    store: std::sync::Arc<S>,
) -> anyhow::Result<()> {
    let app: axum::Router = crate::api::routes::create_router().with_state(store);
    axum::serve(listener, app).await?;
    Ok(())
}
