//! Book HTTP Routes
//!
//! JSON endpoints for listing, adding, updating, deleting and searching
//! books. Each handler runs exactly one store operation on the blocking
//! pool.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;

use crate::model::{Book, BookInput};
use crate::store::{BookStore, StoreResult};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    pub store: BookStore,
}

impl BookState {
    pub fn new(store: BookStore) -> Self {
        Self { store }
    }

    /// Run one store operation off the async executor
    async fn run<F, T>(&self, op: F) -> ApiResult<T>
    where
        F: FnOnce(&BookStore) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        let result = tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(result?)
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

// ==================
// Book Routes
// ==================

/// Create book routes (mounted under `/api`)
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler).post(add_book_handler))
        .route("/books/:id", put(update_book_handler).delete(delete_book_handler))
        .route("/search_books", get(search_books_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(state): State<Arc<BookState>>) -> ApiResult<Json<Vec<Book>>> {
    let books = state.run(|store| store.list()).await?;
    Ok(Json(books))
}

async fn add_book_handler(
    State(state): State<Arc<BookState>>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(input) = payload?;
    let fields = input.validate()?;

    let id = state.run(move |store| store.insert(&fields)).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Book added successfully.".to_string(),
            id,
        }),
    ))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookInput>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let fields = input.validate()?;

    state.run(move |store| store.update(id, &fields)).await?;

    Ok(Json(MessageResponse {
        message: "Book updated successfully.".to_string(),
    }))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    state.run(move |store| store.delete(id)).await?;

    Ok(Json(MessageResponse {
        message: "Book deleted successfully.".to_string(),
    }))
}

/// Absent or empty `q` falls through to the plain listing.
///
/// The query string is taken as raw pairs so a repeated `q` never rejects
/// the request; the first one wins.
async fn search_books_handler(
    State(state): State<Arc<BookState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Book>>> {
    let q = first_param(params, "q").unwrap_or_default();
    if q.is_empty() {
        return list_books_handler(State(state)).await;
    }

    let books = state.run(move |store| store.search(&q)).await?;
    Ok(Json(books))
}

fn first_param(params: Vec<(String, String)>, name: &str) -> Option<String> {
    params
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn create_test_router() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let store = BookStore::open(dir.path().join("books.db")).unwrap();
        let router = book_routes(Arc::new(BookState::new(store)));
        (dir, router)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_first_param_wins() {
        let params = vec![
            ("page".to_string(), "2".to_string()),
            ("q".to_string(), "dune".to_string()),
            ("q".to_string(), "hyperion".to_string()),
        ];
        assert_eq!(first_param(params, "q").as_deref(), Some("dune"));
        assert_eq!(first_param(Vec::new(), "q"), None);
    }

    #[tokio::test]
    async fn test_list_books_empty() {
        let (_dir, app) = create_test_router();

        let response = app
            .oneshot(Request::builder().uri("/books").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_add_book_missing_author() {
        let (_dir, app) = create_test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/books")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title": "Dune"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Title and author are required.");
    }

    #[tokio::test]
    async fn test_add_book_malformed_body() {
        let (_dir, app) = create_test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/books")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title": 12, "author": "X"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_unknown_book() {
        let (_dir, app) = create_test_router();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/books/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Book not found.");
    }
}
