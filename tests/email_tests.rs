use clearspan_backend::config::EmailConfig;
use clearspan_backend::util::email::{EmailError, EmailMessage, SmtpEmailService};

/// Create test email config
fn create_test_config() -> EmailConfig {
    EmailConfig::from_test_env()
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_email_service_creation_config() {
        let config = create_test_config();
        assert_eq!(config.smtp_host, "localhost");
        assert_eq!(config.smtp_port, 1025);
    }

    #[tokio::test]
    async fn test_email_service_creation() {
        // The SMTP transport needs a tokio runtime for its connection pool.
        let service = SmtpEmailService::new(create_test_config());
        assert!(service.is_ok());
    }

    #[test]
    fn test_email_message_creation() {
        let message = EmailMessage::new(
            "test@example.com".to_string(),
            "Test Subject".to_string(),
        );

        assert_eq!(message.to, "test@example.com");
        assert_eq!(message.subject, "Test Subject");
        assert!(message.text_body.is_none());
        assert!(message.html_body.is_none());
    }

    #[test]
    fn test_email_message_with_bodies() {
        let message = EmailMessage::new(
            "test@example.com".to_string(),
            "Test Subject".to_string(),
        )
        .with_text_body("Text body content".to_string())
        .with_html_body("<h1>HTML body content</h1>".to_string());

        assert_eq!(message.text_body.unwrap(), "Text body content");
        assert_eq!(message.html_body.unwrap(), "<h1>HTML body content</h1>");
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_email_error_display() {
        let errors = vec![
            EmailError::ConfigError("Config error".to_string()),
            EmailError::SmtpError("SMTP error".to_string()),
            EmailError::MessageError("Message error".to_string()),
            EmailError::AddressError("Address error".to_string()),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let mut config = create_test_config();
        config.smtp_host = String::new();
        match SmtpEmailService::new(config) {
            Err(EmailError::ConfigError(_)) => {}
            other => panic!("expected ConfigError, got {:?}", other.map(|_| ())),
        }
    }
}
