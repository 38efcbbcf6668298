//! Submission HTTP Routes
//!
//! Endpoints for submitting, reading, editing, deleting, searching, and
//! counting records. Each handler extracts typed arguments, calls one store
//! operation, and serializes the result; all storage semantics live in the
//! store.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;
use crate::store::{parse_index, Submission, SubmissionStore};

// ==================
// Shared State
// ==================

/// Submission state shared across handlers
pub struct SubmissionState {
    pub store: SubmissionStore,
}

impl SubmissionState {
    pub fn new(store: SubmissionStore) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

/// Incoming record body for `/submit` and `/edit`.
///
/// Every field is optional at the wire level; presence is enforced by store
/// validation so a missing field comes back as a 400, not a deserialization
/// rejection. `stopwatchTime` additionally accepts a JSON number, which is
/// normalized to text.
#[derive(Debug, Deserialize)]
pub struct SubmissionBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default, rename = "stopwatchTime")]
    pub stopwatch_time: Option<Value>,
}

impl SubmissionBody {
    /// Assemble the (possibly incomplete) submission; empty strings stand in
    /// for missing fields and fail store validation.
    fn into_submission(self) -> Submission {
        let stopwatch_time = match self.stopwatch_time {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        Submission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            github: self.github.unwrap_or_default(),
            stopwatch_time,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub index: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: String,
    pub submission: Submission,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: usize,
}

// ==================
// Submission Routes
// ==================

/// Create submission routes
pub fn submission_routes(state: Arc<SubmissionState>) -> Router {
    Router::new()
        .route("/", get(banner_handler))
        .route("/ping", get(ping_handler))
        .route("/submit", post(submit_handler))
        .route("/read", get(read_handler))
        .route("/edit", put(edit_handler))
        .route("/delete", delete(delete_handler))
        .route("/search", get(search_handler))
        .route("/count", get(count_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn banner_handler() -> &'static str {
    "Welcome to the Submission Backend Server!"
}

async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse { success: true })
}

async fn submit_handler(
    State(state): State<Arc<SubmissionState>>,
    Json(body): Json<SubmissionBody>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let submission = state.store.append(body.into_submission()).await?;

    Ok(Json(SubmissionResponse {
        message: "Submission saved successfully!".to_string(),
        submission,
    }))
}

async fn read_handler(
    State(state): State<Arc<SubmissionState>>,
    Query(query): Query<IndexQuery>,
) -> Result<Json<Submission>, ApiError> {
    let index = parse_index(query.index.as_deref())?;
    let submission = state.store.get_at(index).await?;

    Ok(Json(submission))
}

async fn edit_handler(
    State(state): State<Arc<SubmissionState>>,
    Query(query): Query<IndexQuery>,
    Json(body): Json<SubmissionBody>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let index = parse_index(query.index.as_deref())?;
    let submission = state.store.replace_at(index, body.into_submission()).await?;

    Ok(Json(SubmissionResponse {
        message: "Submission updated successfully!".to_string(),
        submission,
    }))
}

async fn delete_handler(
    State(state): State<Arc<SubmissionState>>,
    Query(query): Query<IndexQuery>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let index = parse_index(query.index.as_deref())?;
    let submission = state.store.delete_at(index).await?;

    Ok(Json(SubmissionResponse {
        message: "Submission deleted successfully!".to_string(),
        submission,
    }))
}

async fn search_handler(
    State(state): State<Arc<SubmissionState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let matches = state.store.filter(&query.query).await?;

    Ok(Json(matches))
}

async fn count_handler(
    State(state): State<Arc<SubmissionState>>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = state.store.count().await?;

    Ok(Json(CountResponse { count }))
}
