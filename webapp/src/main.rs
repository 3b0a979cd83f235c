use std::env;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

use secmaster_lookup::FmpClient;

mod handlers;
mod render;

use handlers::AppState;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = FmpClient::from_env().expect("FMP_API_KEY must be configured");
    let state = AppState {
        lookup: Arc::new(client),
    };

    let app = Router::new()
        .route("/", get(handlers::index))
        .route("/lookup", get(handlers::lookup))
        .route("/api/company/:ticker", get(handlers::company_json))
        .with_state(state);

    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    info!("Security master web UI starting on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET /                     - lookup form");
    info!("  GET /lookup?ticker=AAPL   - lookup result page");
    info!("  GET /api/company/:ticker  - company data as JSON");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
