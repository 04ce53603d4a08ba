use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::sync::Arc;

use crate::handler::quote_handler::submit_quote_handler;
use crate::service::quote_service::QuoteServiceImpl;

/// Overall multipart body ceiling. Individual files are policed against the
/// 10 MiB per-file limit in the quote service; this only keeps the
/// framework default from rejecting legitimate uploads first.
const MAX_MULTIPART_BODY_BYTES: usize = 64 * 1024 * 1024;

pub fn quote_router(service: Arc<QuoteServiceImpl>) -> Router {
    Router::new()
        .route("/quote", post(submit_quote_handler))
        .layer(DefaultBodyLimit::max(MAX_MULTIPART_BODY_BYTES))
        .with_state(service)
}
