//! `{ success, data | message }` response envelopes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lingua_shared::AppError;
use serde::Serialize;
use serde_json::json;

/// Successful response carrying `data`.
pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    (status, Json(json!({ "success": true, "data": data }))).into_response()
}

/// Successful response without a payload.
pub fn success_empty() -> Response {
    (StatusCode::OK, Json(json!({ "success": true }))).into_response()
}

/// Failure response with an optional message.
pub fn failure(status: StatusCode, message: Option<&str>) -> Response {
    let body = match message {
        Some(message) => json!({ "success": false, "message": message }),
        None => json!({ "success": false }),
    };
    (status, Json(body)).into_response()
}

/// Renders an application error as a failure envelope.
pub fn from_app_error(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    failure(status, err.public_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_has_no_message() {
        let response = from_app_error(&AppError::NotFound("video/9".to_string()));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "success": false }));
    }

    #[tokio::test]
    async fn test_database_error_exposes_message() {
        let response = from_app_error(&AppError::Database("connection reset".to_string()));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "message": "connection reset" })
        );
    }

    #[tokio::test]
    async fn test_success_wraps_data() {
        let response = success(StatusCode::CREATED, vec![1, 2]);

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({ "success": true, "data": [1, 2] })
        );
    }
}
