//! # REST API HTTP Server
//!
//! Axum router and the per-operation handlers for the book resource.
//!
//! Handlers are stateless with respect to the collection: every read goes
//! through the store's query operations behind a read lock, every mutation
//! through its mutation operations behind a write lock, so concurrent
//! requests cannot lose updates or assign duplicate ids.

use std::sync::{Arc, RwLock};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::{BookDraft, BookPatch, BookStore, StoreError};

use super::config::ServerConfig;
use super::errors::{ApiError, ApiResult};
use super::response::{
    BookEnvelope, DeleteEnvelope, ListEnvelope, MutationEnvelope, SearchEnvelope,
};

/// Shared handle to the process-wide store
pub type SharedStore = Arc<RwLock<BookStore>>;

/// Wrap a store for sharing across handlers
pub fn shared(store: BookStore) -> SharedStore {
    Arc::new(RwLock::new(store))
}

/// Creation payload.
///
/// Required fields stay optional at this level so validation can name the
/// first missing one instead of failing wholesale in deserialization.
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub published_year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl CreateBookRequest {
    /// Validate required fields, checked in declaration order so the error
    /// names the first one missing or empty.
    fn into_draft(self) -> ApiResult<BookDraft> {
        let title = require(self.title, "title")?;
        let author = require(self.author, "author")?;
        let language = require(self.language, "language")?;

        Ok(BookDraft {
            title,
            author,
            language,
            isbn: self.isbn,
            published_year: self.published_year,
            genre: self.genre,
        })
    }
}

fn require(field: Option<String>, name: &'static str) -> ApiResult<String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::MissingField(name)),
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: Option<String>,
}

/// Build the router with all book routes and middleware
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/books", get(list_books).post(create_book))
        .route("/api/books/search", get(search_books))
        .route(
            "/api/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Bind and serve until ctrl-c
pub async fn serve(config: &ServerConfig, store: SharedStore) -> std::io::Result<()> {
    let app = router(store);

    let listener = TcpListener::bind(config.socket_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "bookdb listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// List all books
async fn list_books(State(store): State<SharedStore>) -> ApiResult<Json<ListEnvelope>> {
    let store = read_store(&store, "Failed to fetch books")?;
    Ok(Json(ListEnvelope::new(store.books().to_vec())))
}

/// Get a single book by id
async fn get_book(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> ApiResult<Json<BookEnvelope>> {
    let store = read_store(&store, "Failed to fetch book")?;
    let book = store.get(id).cloned().ok_or(StoreError::NotFound(id))?;
    Ok(Json(BookEnvelope::new(book)))
}

/// Create a book from a validated draft
async fn create_book(
    State(store): State<SharedStore>,
    Json(request): Json<CreateBookRequest>,
) -> ApiResult<(StatusCode, Json<MutationEnvelope>)> {
    let draft = request.into_draft()?;

    let mut store = write_store(&store, "Failed to create book")?;
    let book = store.insert(draft);
    tracing::debug!(id = book.id, "book created");

    Ok((StatusCode::CREATED, Json(MutationEnvelope::created(book))))
}

/// Apply a partial update to an existing book
async fn update_book(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
    Json(patch): Json<BookPatch>,
) -> ApiResult<Json<MutationEnvelope>> {
    let mut store = write_store(&store, "Failed to update book")?;
    let book = store.update(id, patch)?;
    Ok(Json(MutationEnvelope::updated(book)))
}

/// Delete a book by id
async fn delete_book(
    State(store): State<SharedStore>,
    Path(id): Path<u64>,
) -> ApiResult<Json<DeleteEnvelope>> {
    let mut store = write_store(&store, "Failed to delete book")?;
    store.remove(id)?;
    tracing::debug!(id, "book deleted");

    Ok(Json(DeleteEnvelope::deleted(id)))
}

/// Search books by title, author, or language
async fn search_books(
    State(store): State<SharedStore>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<SearchEnvelope>> {
    let query = params
        .q
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_lowercase();
    if query.is_empty() {
        return Err(ApiError::MissingQuery);
    }

    let store = read_store(&store, "Failed to search books")?;
    let matches = store.search(&query);
    Ok(Json(SearchEnvelope::new(matches, query)))
}

fn read_store<'a>(
    store: &'a SharedStore,
    context: &'static str,
) -> ApiResult<std::sync::RwLockReadGuard<'a, BookStore>> {
    store.read().map_err(|_| internal(context))
}

fn write_store<'a>(
    store: &'a SharedStore,
    context: &'static str,
) -> ApiResult<std::sync::RwLockWriteGuard<'a, BookStore>> {
    store.write().map_err(|_| internal(context))
}

fn internal(context: &'static str) -> ApiError {
    tracing::error!(context, "store lock poisoned");
    ApiError::Internal(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds() {
        let _router = router(shared(BookStore::new()));
    }

    #[test]
    fn test_create_request_validation_order() {
        let request = CreateBookRequest {
            title: Some("X".to_string()),
            author: None,
            language: None,
            isbn: None,
            published_year: None,
            genre: None,
        };

        // author is checked before language
        match request.into_draft() {
            Err(ApiError::MissingField(field)) => assert_eq!(field, "author"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_create_request_rejects_empty_string() {
        let request = CreateBookRequest {
            title: Some(String::new()),
            author: Some("Y".to_string()),
            language: Some("English".to_string()),
            isbn: None,
            published_year: None,
            genre: None,
        };

        match request.into_draft() {
            Err(ApiError::MissingField(field)) => assert_eq!(field, "title"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_create_request_accepts_optional_fields_absent() {
        let request = CreateBookRequest {
            title: Some("X".to_string()),
            author: Some("Y".to_string()),
            language: Some("English".to_string()),
            isbn: None,
            published_year: None,
            genre: None,
        };

        let draft = request.into_draft().unwrap();
        assert_eq!(draft.title, "X");
        assert_eq!(draft.isbn, None);
    }
}
