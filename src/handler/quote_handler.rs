use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use bytes::BytesMut;
use tracing::{debug, info};

use crate::dto::quote_dto::{FilePart, QuoteResponse};
use crate::model::quote::QuoteSubmission;
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::{HandlerError, ServiceError};

pub async fn submit_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[submit_quote_handler] Handler called");

    let mut quote_data: Option<String> = None;
    let mut files: Vec<FilePart> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HandlerError::bad_request(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        debug!("[submit_quote_handler] Processing field: {}", name);

        if name == "quoteData" {
            let data = field.text().await.map_err(|e| {
                HandlerError::bad_request(format!("Failed to read quoteData field: {}", e))
            })?;
            quote_data = Some(data);
        } else if name == "files" {
            let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_default();
            let mut buf = BytesMut::new();
            let mut stream = field;
            while let Some(chunk) = stream.chunk().await.map_err(|e| {
                HandlerError::bad_request(format!("Failed to read file chunk: {}", e))
            })? {
                buf.extend_from_slice(&chunk);
            }
            info!(
                "[submit_quote_handler] Received file: {} ({} bytes)",
                filename,
                buf.len()
            );
            files.push(FilePart {
                filename,
                content_type,
                size: buf.len(),
                content: buf.to_vec(),
            });
        }
    }

    let raw = quote_data
        .ok_or_else(|| HandlerError::bad_request("Missing quoteData field".to_string()))?;
    let submission: QuoteSubmission = serde_json::from_str(&raw).map_err(|e| {
        debug!("[submit_quote_handler] Invalid JSON: {}", e);
        HandlerError::from(ServiceError::Parse(e.to_string()))
    })?;

    let outcome = service.submit_quote(submission, files).await?;

    Ok(Json(QuoteResponse {
        message: "Quote request submitted successfully".to_string(),
        quote_id: outcome.quote_id,
        notification_sent: outcome.notification_sent,
        confirmation_sent: outcome.confirmation_sent,
    }))
}
