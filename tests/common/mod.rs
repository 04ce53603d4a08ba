use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use clearspan_backend::config::EmailConfig;
use clearspan_backend::router::contact_router::contact_router;
use clearspan_backend::router::quote_router::quote_router;
use clearspan_backend::service::contact_service::ContactServiceImpl;
use clearspan_backend::service::quote_service::QuoteServiceImpl;
use clearspan_backend::util::email::{EmailError, EmailMessage, EmailSender};

/// Fake email delivery collaborator. Records every attempted send and can
/// be told to fail specific calls (0-indexed), so tests can assert both
/// call counts and the notification-before-confirmation ordering.
pub struct MockMailer {
    calls: AtomicUsize,
    fail_calls: Vec<usize>,
    sent: Mutex<Vec<EmailMessage>>,
}

impl MockMailer {
    pub fn succeeding() -> Arc<Self> {
        Self::failing_on(&[])
    }

    pub fn failing_on(calls: &[usize]) -> Arc<Self> {
        Arc::new(MockMailer {
            calls: AtomicUsize::new(0),
            fail_calls: calls.to_vec(),
            sent: Mutex::new(Vec::new()),
        })
    }

    /// Number of send attempts, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every attempted message, in order.
    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockMailer {
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(message);
        if self.fail_calls.contains(&call) {
            return Err(EmailError::SmtpError("simulated SMTP failure".to_string()));
        }
        Ok(())
    }
}

pub fn test_config() -> EmailConfig {
    EmailConfig::from_test_env()
}

#[allow(dead_code)]
pub fn contact_app(mailer: Arc<MockMailer>) -> Router {
    let sender: Arc<dyn EmailSender> = mailer;
    let service = Arc::new(ContactServiceImpl::new(sender, test_config()));
    contact_router(service)
}

#[allow(dead_code)]
pub fn quote_app(mailer: Arc<MockMailer>) -> Router {
    let sender: Arc<dyn EmailSender> = mailer;
    let service = Arc::new(QuoteServiceImpl::new(sender, test_config()));
    quote_router(service)
}
