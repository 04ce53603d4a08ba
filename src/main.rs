use clearspan_backend::app::app::App;
use clearspan_backend::util::logger::Logger;
use dotenv::dotenv;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Console + rolling file logging; the guards must outlive the server or
    // buffered file output is dropped.
    let logger = match Logger::new() {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };
    let _guards = logger.guards;

    info!("🚀 Starting ClearSpan Glass backend");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };
    app.start().await;
}
