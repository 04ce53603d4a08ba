use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::EmailConfig;
use crate::router::contact_router::contact_router;
use crate::router::quote_router::quote_router;
use crate::service::contact_service::ContactServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;
use crate::util::email::{EmailSender, SmtpEmailService};

pub struct App {
    config: AppConfig,
    router: Router,
    pub contact_service: Arc<ContactServiceImpl>,
    pub quote_service: Arc<QuoteServiceImpl>,
}

impl App {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::from_env();
        let email_config = EmailConfig::from_env()?;

        // One SMTP transport shared by both pipelines.
        let mailer: Arc<dyn EmailSender> =
            Arc::new(SmtpEmailService::new(email_config.clone())?);

        let contact_service = Arc::new(ContactServiceImpl::new(
            mailer.clone(),
            email_config.clone(),
        ));
        let quote_service = Arc::new(QuoteServiceImpl::new(mailer, email_config));

        let router = Self::create_router(contact_service.clone(), quote_service.clone());

        Ok(App {
            config,
            router,
            contact_service,
            quote_service,
        })
    }

    fn create_router(
        contact_service: Arc<ContactServiceImpl>,
        quote_service: Arc<QuoteServiceImpl>,
    ) -> Router {
        Router::new()
            .merge(contact_router(contact_service))
            .merge(quote_router(quote_service))
            .route("/health", get(|| async { "OK" }))
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(
            self.config.host.parse().expect("Invalid host"),
            self.config.port,
        );
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind address");
        axum::serve(listener, self.router)
            .await
            .expect("Failed to start server");
    }
}
