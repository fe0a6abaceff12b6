//! Router and request handlers.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

use super::middleware::{cors_headers, log_request, preflight};
use crate::Error;
use crate::models::{Board, SaveAck};
use crate::storage::BoardStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Where the board is kept
    pub store: Arc<dyn BoardStore>,
    /// Static page served at `/`, read on every request
    pub index_file: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn BoardStore>, index_file: impl Into<PathBuf>) -> Self {
        Self {
            store,
            index_file: index_file.into(),
        }
    }
}

/// Build the application router.
///
/// Routes: `GET /`, `GET /api/board`, `POST /api/board`. `OPTIONS` on any
/// path is answered by the preflight middleware; everything else, `HEAD`
/// included, is a JSON 404. Request bodies have no size limit.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index).head(not_found).fallback(not_found))
        .route(
            "/api/board",
            get(get_board)
                .head(not_found)
                .post(replace_board)
                .fallback(not_found),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(preflight))
        .layer(middleware::from_fn(log_request))
        .layer(cors_headers())
        .with_state(state)
}

/// Error returned from handlers.
///
/// Bad input becomes a 400 carrying the error text; anything else is logged
/// and reported as a generic 500.
#[derive(Debug)]
pub struct ApiError(Error);

impl<E> From<E> for ApiError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            err @ (Error::InvalidJsonBody | Error::InvalidBoardFormat) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            err => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Serve the static HTML page
async fn serve_index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = std::fs::read_to_string(&state.index_file)?;
    Ok(Html(html))
}

/// Get the current board
async fn get_board(State(state): State<AppState>) -> Result<Json<Board>, ApiError> {
    let board = state.store.load()?;
    Ok(Json(board))
}

/// Replace the whole board with the request body.
///
/// The acknowledgement echoes the `updatedAt` the client sent, not the
/// timestamp that was stored.
async fn replace_board(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveAck>, ApiError> {
    let mut board = Board::parse_submission(&body)?;
    let submitted_at = board.stamp();

    state.store.save(&board)?;
    tracing::info!(
        location = %state.store.location(),
        lists = board.list_count(),
        tasks = board.task_count(),
        "board saved"
    );

    Ok(Json(SaveAck::new(submitted_at)))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
