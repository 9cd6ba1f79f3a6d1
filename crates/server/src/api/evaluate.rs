//! Claim evaluation endpoint.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::debug;
use claimwise_core::EvaluationResponse;

use crate::metrics::UPLOAD_BYTES;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn reject(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// POST /evaluate, POST /api/v1/evaluate
///
/// Multipart form with a text field `query` and a file field `file` holding
/// the policy PDF. The document stays in memory for the length of the request.
///
/// Evaluation failures are reported with status 200 and an `{"error": ...}`
/// body; only a malformed form is a 4xx.
pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<EvaluationResponse>, ApiError> {
    let mut query: Option<String> = None;
    let mut document: Option<Vec<u8>> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(reject(e.status(), e.body_text())),
        };

        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "query" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| reject(e.status(), format!("Failed to read query: {}", e)))?;
                query = Some(text);
            }
            "file" => {
                debug!(filename = ?field.file_name(), "Receiving policy document");
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| reject(e.status(), format!("Failed to read file: {}", e)))?;
                document = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let Some(query) = query else {
        return Err(reject(StatusCode::BAD_REQUEST, "Missing form field: query"));
    };
    let Some(document) = document else {
        return Err(reject(StatusCode::BAD_REQUEST, "Missing form field: file"));
    };

    UPLOAD_BYTES.observe(document.len() as f64);

    Ok(Json(state.pipeline().evaluate(&query, document).await))
}
