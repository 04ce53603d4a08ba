use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::config::EmailConfig;
use crate::model::contact::ContactSubmission;
use crate::util::email::{EmailMessage, EmailSender};
use crate::util::error::ServiceError;
use crate::util::templates;
use crate::util::validation::collect_violations;

/// Result of a processed contact submission. `notification_sent` is always
/// true on success; a failed notification fails the whole pipeline.
#[derive(Debug, Clone)]
pub struct ContactOutcome {
    pub notification_sent: bool,
    pub confirmation_sent: bool,
}

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactOutcome, ServiceError>;
}

pub struct ContactServiceImpl {
    mailer: Arc<dyn EmailSender>,
    config: EmailConfig,
}

impl ContactServiceImpl {
    pub fn new(mailer: Arc<dyn EmailSender>, config: EmailConfig) -> Self {
        ContactServiceImpl { mailer, config }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, submission), fields(email = %submission.email))]
    async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactOutcome, ServiceError> {
        info!("Processing contact submission");

        // Full validation precedes any email attempt.
        if let Err(errors) = submission.validate() {
            let violations = collect_violations(&errors);
            info!("Contact submission rejected: {} violation(s)", violations.len());
            return Err(ServiceError::Validation(violations));
        }

        let received_at = Utc::now().to_rfc3339();

        // Staff notification. Failure here fails the request and the
        // confirmation is never attempted.
        let (text, html) = templates::contact_notification(&submission, &received_at);
        let notification = EmailMessage::new(
            self.config.contact_email.clone(),
            format!("New Contact Form Submission: {}", submission.subject),
        )
        .with_text_body(text)
        .with_html_body(html);

        if let Err(e) = self.mailer.send_email(notification).await {
            error!("Failed to send contact notification: {}", e);
            return Err(ServiceError::Delivery(e.to_string()));
        }

        // Customer confirmation is best-effort.
        let (text, html) =
            templates::contact_confirmation(&submission.first_name, &self.config.site_url);
        let confirmation = EmailMessage::new(
            submission.email.clone(),
            "Thank you for contacting ClearSpan Glass".to_string(),
        )
        .with_text_body(text)
        .with_html_body(html);

        let confirmation_sent = match self.mailer.send_email(confirmation).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to send contact confirmation: {}", e);
                false
            }
        };

        info!("Contact submission processed");
        Ok(ContactOutcome {
            notification_sent: true,
            confirmation_sent,
        })
    }
}
