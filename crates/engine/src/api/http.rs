//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use spelltrackr_domain::{CacheDocument, CharacterId, CharacterRecord};

use crate::app::App;
use crate::use_cases::characters::CharacterDataError;
use crate::infrastructure::ports::SourceError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/characters",
            get(get_all_characters).delete(delete_cached_data),
        )
        .route("/characters/{char_id}", get(get_one_character))
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
struct AllCharactersQuery {
    /// Comma-separated character ids.
    char_ids: Option<String>,
    #[serde(default)]
    force_update: bool,
}

#[derive(Debug, Deserialize)]
struct OneCharacterQuery {
    #[serde(default)]
    force_update: bool,
}

async fn get_all_characters(
    State(app): State<Arc<App>>,
    Query(query): Query<AllCharactersQuery>,
) -> Result<Json<CacheDocument>, ApiError> {
    let ids = query.char_ids.as_deref().map(parse_char_ids).transpose()?;
    let document = app
        .use_cases
        .characters
        .get_all
        .execute(ids, query.force_update)
        .await?;
    Ok(Json(document))
}

async fn get_one_character(
    State(app): State<Arc<App>>,
    Path(char_id): Path<String>,
    Query(query): Query<OneCharacterQuery>,
) -> Result<Json<CharacterRecord>, ApiError> {
    let id = CharacterId::new(char_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let record = app
        .use_cases
        .characters
        .get_one
        .execute(id, query.force_update)
        .await?;
    Ok(Json(record))
}

async fn delete_cached_data(State(app): State<Arc<App>>) -> Result<StatusCode, ApiError> {
    app.use_cases.characters.delete_cache.execute().await?;
    Ok(StatusCode::ACCEPTED)
}

fn parse_char_ids(raw: &str) -> Result<Vec<CharacterId>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| CharacterId::new(id).map_err(|e| ApiError::BadRequest(e.to_string())))
        .collect()
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// Upstream failure; the service's status code is passed through.
    Upstream { status: u16, message: String },
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Upstream { message: msg, .. }
            | ApiError::Internal(msg) => msg,
        }
    }
}

/// Error body shape the frontend expects: `{"message": ..., "statusCode": ...}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: String,
    status_code: u16,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), message = self.message(), "request failed");
        }
        let body = ErrorBody {
            message: self.message().to_string(),
            status_code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<CharacterDataError> for ApiError {
    fn from(e: CharacterDataError) -> Self {
        match &e {
            CharacterDataError::MissingIds => ApiError::BadRequest(e.to_string()),
            CharacterDataError::NotCached(_) => ApiError::NotFound(e.to_string()),
            CharacterDataError::Source(SourceError::Upstream { status, .. }) => ApiError::Upstream {
                status: *status,
                message: e.to_string(),
            },
            _ => ApiError::Internal(e.to_string()),
        }
    }
}
