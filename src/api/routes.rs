use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::{handlers, visit_handlers};
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .route("/vets", get(handlers::list_vets::<S>))
        .route("/owners/:owner_id", get(handlers::get_owner::<S>))
        // Visit creation
        .route(
            "/owners/:owner_id/pets/:pet_id/visits/new",
            get(visit_handlers::init_new_visit_form::<S>)
                .post(visit_handlers::process_new_visit_form::<S>),
        )
        // Visit editing
        .route(
            "/owners/:owner_id/:pet_id/visits/:visit_id/edit",
            get(visit_handlers::init_update_visit_form::<S>)
                .post(visit_handlers::process_update_visit_form::<S>),
        )
        // Soft-cancel mutates state, so it is POST only
        .route(
            "/owners/:owner_id/:pet_id/visits/:visit_id/cancel",
            post(visit_handlers::cancel_visit::<S>),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::load_seed_data;
    use crate::store::traits::VisitStore;
    use crate::store::InMemoryStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    async fn app() -> (Router, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        load_seed_data(&*store).await.unwrap();
        (create_router().with_state(store.clone()), store)
    }

    fn form_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_new_visit_form_ignores_owner_segment() {
        let (app, _) = app().await;
        let response = app
            .oneshot(
                Request::get("/owners/anything/pets/7/visits/new")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["view"], "pets/createOrUpdateVisitForm");
        assert_eq!(body["pet"]["id"], 7);
        assert_eq!(body["visit"]["id"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_pet_returns_404() {
        let (app, _) = app().await;
        let response = app
            .oneshot(Request::get("/owners/1/pets/999/visits/new").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn test_create_visit_redirects_to_owner() {
        let (app, store) = app().await;
        let response = app
            .oneshot(form_request(
                Method::POST,
                "/owners/6/pets/7/visits/new",
                "date=2024-03-01&description=annual+checkup",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/owners/6");
        assert_eq!(store.visit_count(), 5);
    }

    #[tokio::test]
    async fn test_create_visit_with_errors_rerenders_form() {
        let (app, store) = app().await;
        let response = app
            .oneshot(form_request(
                Method::POST,
                "/owners/6/pets/7/visits/new",
                "date=2024-03-01&description=",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["errors"][0]["field"], "description");
        assert_eq!(store.visit_count(), 4);
    }

    #[tokio::test]
    async fn test_edit_ignores_body_id() {
        let (app, store) = app().await;
        let response = app
            .oneshot(form_request(
                Method::POST,
                "/owners/6/7/visits/1/edit",
                "id=4&date=2013-01-01&description=checkup",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let edited = store.get_visit(7, 1).await.unwrap().unwrap();
        assert_eq!(edited.description, "checkup");
        let untouched = store.get_visit(7, 4).await.unwrap().unwrap();
        assert_eq!(untouched.description, "spayed");
    }

    #[tokio::test]
    async fn test_cancel_requires_post() {
        let (app, store) = app().await;
        let response = app
            .oneshot(Request::get("/owners/6/7/visits/1/cancel").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(store.get_visit(7, 1).await.unwrap().unwrap().active);
    }

    fn json_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"description": "checkup"}"#))
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_pet_reported_before_body_is_parsed() {
        let (app, _) = app().await;
        let response = app
            .oneshot(json_request("/owners/6/pets/999/visits/new"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_visit_reported_before_body_is_parsed() {
        let (app, _) = app().await;
        let response = app
            .oneshot(json_request("/owners/6/7/visits/42/edit"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_form_body_for_known_pet_is_rejected() {
        let (app, store) = app().await;
        let response = app
            .oneshot(json_request("/owners/6/pets/7/visits/new"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(store.visit_count(), 4);
    }

    #[tokio::test]
    async fn test_pet_of_other_owner_returns_404() {
        let (app, _) = app().await;
        let response = app
            .oneshot(form_request(Method::POST, "/owners/1/7/visits/1/cancel", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
