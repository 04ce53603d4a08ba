use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use tracing::{debug, info};

use crate::dto::contact_dto::ContactResponse;
use crate::model::contact::ContactSubmission;
use crate::service::contact_service::{ContactService, ContactServiceImpl};
use crate::util::error::{HandlerError, ServiceError};

pub async fn submit_contact_handler(
    State(service): State<Arc<ContactServiceImpl>>,
    body: Bytes,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[submit_contact_handler] Handler called");

    // Parse the body ourselves so malformed JSON surfaces as the structured
    // 400 shape rather than the framework rejection.
    let submission: ContactSubmission = serde_json::from_slice(&body).map_err(|e| {
        debug!("[submit_contact_handler] Invalid JSON: {}", e);
        HandlerError::from(ServiceError::Parse(e.to_string()))
    })?;

    let outcome = service.submit_contact(submission).await?;

    Ok(Json(ContactResponse {
        message: "Contact form submitted successfully".to_string(),
        notification_sent: outcome.notification_sent,
        confirmation_sent: outcome.confirmation_sent,
    }))
}
