use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::config::EmailConfig;
use crate::dto::quote_dto::{FilePart, UploadedFile};
use crate::model::quote::QuoteSubmission;
use crate::util::email::{EmailMessage, EmailSender};
use crate::util::error::ServiceError;
use crate::util::templates;
use crate::util::validation::collect_violations;

/// Per-file attachment size policy.
pub const MAX_FILE_SIZE_BYTES: usize = 10 * 1024 * 1024;

const QUOTE_ID_TOKEN_LEN: usize = 6;
const QUOTE_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Result of a processed quote request.
#[derive(Debug, Clone)]
pub struct QuoteOutcome {
    pub quote_id: String,
    pub notification_sent: bool,
    pub confirmation_sent: bool,
}

#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn submit_quote(
        &self,
        submission: QuoteSubmission,
        files: Vec<FilePart>,
    ) -> Result<QuoteOutcome, ServiceError>;
}

pub struct QuoteServiceImpl {
    mailer: Arc<dyn EmailSender>,
    config: EmailConfig,
}

impl QuoteServiceImpl {
    pub fn new(mailer: Arc<dyn EmailSender>, config: EmailConfig) -> Self {
        QuoteServiceImpl { mailer, config }
    }
}

/// Human-reference token of the form `QT-<millis>-<6 uppercase
/// alphanumerics>`. Unique enough for email correspondence; never checked
/// for collisions and never persisted.
pub fn generate_quote_id() -> String {
    let timestamp = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();
    let token: String = (0..QUOTE_ID_TOKEN_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..QUOTE_ID_CHARSET.len());
            QUOTE_ID_CHARSET[idx] as char
        })
        .collect();
    format!("QT-{}-{}", timestamp, token)
}

/// Turn raw file parts into metadata records. One oversized file aborts the
/// whole batch; nothing is kept from a rejected request.
pub fn process_files(files: &[FilePart]) -> Result<Vec<UploadedFile>, ServiceError> {
    let mut processed = Vec::with_capacity(files.len());
    for file in files {
        if file.size > MAX_FILE_SIZE_BYTES {
            return Err(ServiceError::FileTooLarge {
                filename: file.filename.clone(),
                size: file.size,
            });
        }
        processed.push(UploadedFile {
            name: file.filename.clone(),
            size: file.size,
            content_type: file.content_type.clone(),
            storage_path: format!(
                "/uploads/{}-{}",
                Utc::now().timestamp_millis(),
                file.filename
            ),
        });
    }
    Ok(processed)
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, submission, files), fields(email = %submission.email, file_count = files.len()))]
    async fn submit_quote(
        &self,
        submission: QuoteSubmission,
        files: Vec<FilePart>,
    ) -> Result<QuoteOutcome, ServiceError> {
        info!("Processing quote request");

        // Full validation precedes file processing and any email attempt.
        if let Err(errors) = submission.validate() {
            let violations = collect_violations(&errors);
            info!("Quote request rejected: {} violation(s)", violations.len());
            return Err(ServiceError::Validation(violations));
        }

        let uploaded = process_files(&files)?;
        let quote_id = generate_quote_id();
        info!("Assigned quote reference {}", quote_id);

        let received_at = Utc::now().to_rfc3339();

        // Staff notification. Failure aborts; the confirmation is skipped.
        let (text, html) =
            templates::quote_notification(&submission, &uploaded, &quote_id, &received_at);
        let notification = EmailMessage::new(
            self.config.sales_email.clone(),
            format!(
                "{}New Quote Request: {}",
                submission.urgency.subject_marker(),
                quote_id
            ),
        )
        .with_text_body(text)
        .with_html_body(html);

        if let Err(e) = self.mailer.send_email(notification).await {
            error!("Failed to send quote notification: {}", e);
            return Err(ServiceError::Delivery(e.to_string()));
        }

        // Customer confirmation is best-effort.
        let (text, html) = templates::quote_confirmation(
            &submission.first_name,
            &quote_id,
            &self.config.site_url,
        );
        let confirmation = EmailMessage::new(
            submission.email.clone(),
            "Quote Request Received - ClearSpan Glass".to_string(),
        )
        .with_text_body(text)
        .with_html_body(html);

        let confirmation_sent = match self.mailer.send_email(confirmation).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to send quote confirmation: {}", e);
                false
            }
        };

        info!("Quote request {} processed", quote_id);
        Ok(QuoteOutcome {
            quote_id,
            notification_sent: true,
            confirmation_sent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_id_format() {
        let id = generate_quote_id();
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "QT");
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), QUOTE_ID_TOKEN_LEN);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_quote_ids_are_distinct() {
        let a = generate_quote_id();
        let b = generate_quote_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_process_files_produces_metadata() {
        let files = vec![FilePart {
            filename: "sketch.png".to_string(),
            content_type: "image/png".to_string(),
            content: vec![0u8; 2048],
            size: 2048,
        }];
        let uploaded = process_files(&files).unwrap();
        assert_eq!(uploaded.len(), 1);
        assert_eq!(uploaded[0].name, "sketch.png");
        assert_eq!(uploaded[0].size, 2048);
        assert!(uploaded[0].storage_path.starts_with("/uploads/"));
        assert!(uploaded[0].storage_path.ends_with("-sketch.png"));
    }

    #[test]
    fn test_oversized_file_aborts_batch() {
        let files = vec![
            FilePart {
                filename: "ok.png".to_string(),
                content_type: "image/png".to_string(),
                content: Vec::new(),
                size: 1024,
            },
            FilePart {
                filename: "plan.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                content: Vec::new(),
                size: 11_000_000,
            },
        ];
        match process_files(&files) {
            Err(ServiceError::FileTooLarge { filename, size }) => {
                assert_eq!(filename, "plan.pdf");
                assert_eq!(size, 11_000_000);
            }
            other => panic!("expected FileTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_file_at_limit_is_accepted() {
        let files = vec![FilePart {
            filename: "exact.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            content: Vec::new(),
            size: MAX_FILE_SIZE_BYTES,
        }];
        assert!(process_files(&files).is_ok());
    }
}
