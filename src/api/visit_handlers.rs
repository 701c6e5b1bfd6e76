use axum::{
    extract::{FromRequest, Path, Request, State},
    response::{IntoResponse, Response},
    Form,
};

use crate::api::handlers::AppState;
use crate::logic::{ClinicError, VisitContext, VisitFlow, VisitOutcome};
use crate::model::{Id, VisitForm};
use crate::store::traits::Store;

/// Parse the visit form out of the request body. Called only once the
/// context has loaded, so missing pets and visits surface as 404 first.
async fn read_form(request: Request) -> Result<VisitForm, Response> {
    let Form(form) = Form::<VisitForm>::from_request(request, &())
        .await
        .map_err(IntoResponse::into_response)?;
    Ok(form)
}

/// `GET /owners/{any}/pets/{pet_id}/visits/new`. The owner segment is not
/// checked on this route.
pub async fn init_new_visit_form<S: Store>(
    State(store): State<AppState<S>>,
    Path((_owner, pet_id)): Path<(String, Id)>,
) -> Result<VisitOutcome, ClinicError> {
    let context = VisitContext::load(&*store, pet_id).await?;
    Ok(VisitFlow::show_new_form(context))
}

pub async fn process_new_visit_form<S: Store>(
    State(store): State<AppState<S>>,
    Path((owner_id, pet_id)): Path<(Id, Id)>,
    request: Request,
) -> Result<VisitOutcome, Response> {
    let context = VisitContext::load_for_owner(&*store, owner_id, pet_id)
        .await
        .map_err(IntoResponse::into_response)?;
    let form = read_form(request).await?;

    VisitFlow::submit_new(&*store, context, owner_id, &form)
        .await
        .map_err(IntoResponse::into_response)
}

pub async fn init_update_visit_form<S: Store>(
    State(store): State<AppState<S>>,
    Path((owner_id, pet_id, visit_id)): Path<(Id, Id, Id)>,
) -> Result<VisitOutcome, ClinicError> {
    let context = VisitContext::load_for_owner(&*store, owner_id, pet_id).await?;
    VisitFlow::show_edit_form(&*store, context, visit_id).await
}

pub async fn process_update_visit_form<S: Store>(
    State(store): State<AppState<S>>,
    Path((owner_id, pet_id, visit_id)): Path<(Id, Id, Id)>,
    request: Request,
) -> Result<VisitOutcome, Response> {
    let context = VisitContext::load_for_owner(&*store, owner_id, pet_id)
        .await
        .map_err(IntoResponse::into_response)?;
    let stored = VisitFlow::find_visit(&*store, pet_id, visit_id)
        .await
        .map_err(IntoResponse::into_response)?;
    let form = read_form(request).await?;

    VisitFlow::submit_edit(&*store, context, owner_id, visit_id, stored, &form)
        .await
        .map_err(IntoResponse::into_response)
}

pub async fn cancel_visit<S: Store>(
    State(store): State<AppState<S>>,
    Path((owner_id, pet_id, visit_id)): Path<(Id, Id, Id)>,
) -> Result<VisitOutcome, ClinicError> {
    let context = VisitContext::load_for_owner(&*store, owner_id, pet_id).await?;
    VisitFlow::cancel(&*store, context, owner_id, visit_id).await
}
