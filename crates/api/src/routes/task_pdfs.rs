//! Task PDF attachment routes.
//!
//! Attachments hang off any of the attachable resource kinds and are
//! addressed by `/{resource_type}/{resource_id}`. Listing is public; adding
//! and deleting require a bearer token.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::{
    AppState,
    middleware::AuthUser,
    response::{failure, from_app_error, success, success_empty},
};
use lingua_core::attachment::{Attachment, AttachmentError, AttachmentService, PdfCandidate};
use lingua_db::AttachmentRepository;
use lingua_shared::AppError;

/// Creates the routes that need no authentication.
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/{resource_type}/{resource_id}", get(list_pdfs))
}

/// Creates the routes that must sit behind the auth middleware.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/{resource_type}/{resource_id}", post(add_pdfs))
        .route("/{resource_type}/{resource_id}/{id}", delete(delete_pdf))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for adding PDFs.
///
/// Entries stay untyped so that one malformed entry is dropped instead of
/// failing the whole request.
#[derive(Debug, Deserialize)]
pub struct AddPdfsRequest {
    /// Candidate attachment descriptors. Missing and `null` both mean none.
    #[serde(default, rename = "taskPdfs")]
    pub task_pdfs: Option<Vec<Value>>,
}

/// Response for an attachment.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentResponse {
    /// Attachment ID.
    pub id: i32,
    /// Owning resource kind.
    pub resource_type: &'static str,
    /// Owning resource ID.
    pub resource_id: i32,
    /// Location of the PDF.
    pub file_path: String,
    /// Display name.
    pub file_name: String,
    /// File size in bytes.
    pub file_size: Option<i64>,
    /// Upload date (RFC 3339).
    pub upload_date: String,
    /// Created at timestamp (RFC 3339).
    pub created_at: String,
    /// Updated at timestamp (RFC 3339).
    pub updated_at: String,
}

impl From<Attachment> for AttachmentResponse {
    fn from(a: Attachment) -> Self {
        Self {
            id: a.id,
            resource_type: a.resource_type.as_str(),
            resource_id: a.resource_id,
            file_path: a.file_path,
            file_name: a.file_name,
            file_size: a.file_size,
            upload_date: a.upload_date.to_rfc3339(),
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn service(state: &AppState) -> AttachmentService<AttachmentRepository> {
    let repo = AttachmentRepository::new((*state.db).clone());
    AttachmentService::new(state.parents.clone(), Arc::new(repo))
}

/// Read a candidate from one `taskPdfs` entry.
///
/// Fields of the wrong type are treated as absent.
fn parse_candidate(value: &Value) -> PdfCandidate {
    let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);

    PdfCandidate {
        file_path: text("filePath"),
        file_name: text("fileName"),
        file_size: value.get("fileSize").and_then(parse_file_size),
        upload_date: text("uploadDate"),
    }
}

/// Accept a non-negative integer, or a string holding one.
fn parse_file_size(value: &Value) -> Option<i64> {
    let size = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    (size >= 0).then_some(size)
}

fn error_response(err: AttachmentError) -> Response {
    let is_storage = matches!(err, AttachmentError::Repository(_));
    let app_err = AppError::from(err);
    if is_storage {
        error!(code = app_err.error_code(), error = %app_err, "Task PDF storage operation failed");
    } else {
        debug!(code = app_err.error_code(), error = %app_err, "Task PDF request rejected");
    }
    from_app_error(&app_err)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/task-pdfs/{resource_type}/{resource_id}`
/// List the PDFs of a resource, newest first.
async fn list_pdfs(
    State(state): State<AppState>,
    Path((resource_type, resource_id)): Path<(String, String)>,
) -> Response {
    match service(&state).list(&resource_type, &resource_id).await {
        Ok(attachments) => {
            let items: Vec<AttachmentResponse> =
                attachments.into_iter().map(AttachmentResponse::from).collect();
            success(StatusCode::OK, items)
        }
        Err(e) => error_response(e),
    }
}

/// POST `/task-pdfs/{resource_type}/{resource_id}`
/// Add a batch of PDFs to a resource.
async fn add_pdfs(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((resource_type, resource_id)): Path<(String, String)>,
    payload: Result<Json<AddPdfsRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            debug!(error = %rejection, "Rejected task PDF body");
            return failure(StatusCode::BAD_REQUEST, Some(rejection.body_text().as_str()));
        }
    };

    let candidates = payload
        .task_pdfs
        .unwrap_or_default()
        .iter()
        .map(parse_candidate)
        .collect();

    match service(&state)
        .add(&resource_type, &resource_id, candidates)
        .await
    {
        Ok(created) => {
            info!(
                resource_type = %resource_type,
                resource_id = %resource_id,
                count = created.len(),
                subject = auth.subject(),
                "Task PDFs added"
            );
            let items: Vec<AttachmentResponse> =
                created.into_iter().map(AttachmentResponse::from).collect();
            success(StatusCode::CREATED, items)
        }
        Err(e) => error_response(e),
    }
}

/// DELETE `/task-pdfs/{resource_type}/{resource_id}/{id}`
/// Delete one PDF of a resource.
async fn delete_pdf(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((resource_type, resource_id, id)): Path<(String, String, String)>,
) -> Response {
    match service(&state)
        .delete(&resource_type, &resource_id, &id)
        .await
    {
        Ok(()) => {
            info!(
                resource_type = %resource_type,
                resource_id = %resource_id,
                id = %id,
                subject = auth.subject(),
                "Task PDF deleted"
            );
            success_empty()
        }
        Err(e) => error_response(e),
    }
}
