use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::logic::{load_owner_details, ClinicError, VisitOutcome};
use crate::model::{Id, OwnerDetails, Vet};
use crate::store::traits::Store;

pub type AppState<S> = Arc<S>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(message: &str, status: StatusCode) -> Self {
        Self {
            error: message.to_string(),
            code: status.as_u16(),
        }
    }
}

impl IntoResponse for ClinicError {
    fn into_response(self) -> Response {
        let status = if self.is_not_found() {
            log::warn!("{}", self);
            StatusCode::NOT_FOUND
        } else {
            log::error!("Request failed: {:#}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(ErrorResponse::new(&self.to_string(), status))).into_response()
    }
}

impl IntoResponse for VisitOutcome {
    fn into_response(self) -> Response {
        match self {
            VisitOutcome::Form(model) => (StatusCode::OK, Json(model)).into_response(),
            VisitOutcome::Redirect(location) => Redirect::to(&location).into_response(),
        }
    }
}

pub async fn get_owner<S: Store>(
    State(store): State<AppState<S>>,
    Path(owner_id): Path<Id>,
) -> Result<Json<OwnerDetails>, ClinicError> {
    let details = load_owner_details(&*store, owner_id).await?;
    Ok(Json(details))
}

pub async fn list_vets<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<ListResponse<Vet>>, ClinicError> {
    let vets = store.list_vets().await?;
    let total = vets.len();
    Ok(Json(ListResponse { items: vets, total }))
}
