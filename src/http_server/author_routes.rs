//! Author HTTP Routes
//!
//! Endpoints for the author collection: list, get-by-id, create, and
//! works-list mutation.
//!
//! Every route answers HTTP 200, success and failure alike; failure is
//! carried in the body's `message` field. This mirrors the contract the
//! service's consumers already depend on, so status codes must not be
//! "fixed" to 404 without migrating every caller.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::service::{AuthorService, ServiceError};
use crate::store::AuthorStore;

use super::response::{MessageDataResponse, MessageResponse};

// ==================
// Shared State
// ==================

/// Author state shared across handlers
pub struct AuthorState<S: AuthorStore> {
    pub service: AuthorService<S>,
}

impl<S: AuthorStore> AuthorState<S> {
    pub fn new(service: AuthorService<S>) -> Self {
        Self { service }
    }
}

// ==================
// Request Types
// ==================

/// Body of `POST /authors`. Unknown fields are ignored; no schema
/// validation is asserted by any consumer.
#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    #[serde(default)]
    pub introduction: String,
}

/// Body of the two works-mutation endpoints. Works are poems in this
/// catalog, hence the field name.
#[derive(Debug, Deserialize)]
pub struct WorkRequest {
    #[serde(rename = "poemId")]
    pub poem_id: String,
}

// ==================
// Author Routes
// ==================

/// Create author routes
pub fn author_routes<S: AuthorStore + 'static>(state: Arc<AuthorState<S>>) -> Router {
    Router::new()
        .route("/authors", get(list_authors_handler))
        .route("/authors", post(create_author_handler))
        .route("/authors/{id}", get(get_author_handler))
        .route("/authors/{id}/works", put(add_work_handler))
        .route("/authors/{id}/deleteWork", put(remove_work_handler))
        .with_state(state)
}

/// Render a service error as a 200 body, per the always-200 contract.
fn error_body(err: &ServiceError) -> Response {
    match err {
        ServiceError::NotFound => Json(MessageResponse::author_not_found()).into_response(),
        ServiceError::Internal(_) => Json(MessageResponse::internal_error()).into_response(),
    }
}

// ==================
// Handlers
// ==================

/// `GET /authors` - full author records as a JSON array.
async fn list_authors_handler<S: AuthorStore + 'static>(
    State(state): State<Arc<AuthorState<S>>>,
) -> Response {
    match state.service.list_authors() {
        Ok(authors) => Json(authors).into_response(),
        Err(err) => error_body(&err),
    }
}

/// `GET /authors/{id}` - a single-element array on success. Consumers index
/// `body[0]`, so the array wrapper is load-bearing.
async fn get_author_handler<S: AuthorStore + 'static>(
    State(state): State<Arc<AuthorState<S>>>,
    Path(id): Path<String>,
) -> Response {
    match state.service.get_author(&id) {
        Ok(author) => Json(vec![author]).into_response(),
        Err(err) => error_body(&err),
    }
}

/// `POST /authors` - create and echo the stored record.
async fn create_author_handler<S: AuthorStore + 'static>(
    State(state): State<Arc<AuthorState<S>>>,
    Json(request): Json<CreateAuthorRequest>,
) -> Response {
    match state
        .service
        .create_author(request.name, request.introduction)
    {
        Ok(author) => Json(MessageDataResponse::author_added(author)).into_response(),
        Err(err) => error_body(&err),
    }
}

/// `PUT /authors/{id}/works` - append a work id; echoes the updated record.
async fn add_work_handler<S: AuthorStore + 'static>(
    State(state): State<Arc<AuthorState<S>>>,
    Path(id): Path<String>,
    Json(request): Json<WorkRequest>,
) -> Response {
    match state.service.add_work(&id, request.poem_id) {
        Ok(author) => Json(MessageDataResponse::work_added(author)).into_response(),
        Err(err) => error_body(&err),
    }
}

/// `PUT /authors/{id}/deleteWork` - remove a work id. Success body carries
/// no `data`; removing an absent work id still succeeds.
async fn remove_work_handler<S: AuthorStore + 'static>(
    State(state): State<Arc<AuthorState<S>>>,
    Path(id): Path<String>,
    Json(request): Json<WorkRequest>,
) -> Response {
    match state.service.remove_work(&id, &request.poem_id) {
        Ok(_) => Json(MessageResponse::work_deleted()).into_response(),
        Err(err) => error_body(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_routes_build() {
        let store = Arc::new(MemoryStore::new());
        let state = Arc::new(AuthorState::new(AuthorService::new(store)));
        let _router = author_routes(state);
    }

    #[test]
    fn test_work_request_reads_poem_id() {
        let request: WorkRequest =
            serde_json::from_str(r#"{"poemId":"5dc14e4fb7ee92384c501889"}"#).unwrap();
        assert_eq!(request.poem_id, "5dc14e4fb7ee92384c501889");
    }

    #[test]
    fn test_create_request_introduction_defaults_empty() {
        let request: CreateAuthorRequest = serde_json::from_str(r#"{"name":"Yeats"}"#).unwrap();
        assert_eq!(request.name, "Yeats");
        assert!(request.introduction.is_empty());
    }
}
