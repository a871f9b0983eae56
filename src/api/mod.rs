//! JSON HTTP API over the estimator and the static pages.
//!
//! Endpoints:
//! - `POST /estimate`: raw profile in, profile + report + breakdown out
//! - `GET /tips`: saving tips table and general tips
//! - `GET /appliances`: appliance comparison table
//! - `GET /about`: about sections and environmental facts

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

pub use types::{AboutResponse, ApiError, ErrorResponse, EstimateResponse, TipsResponse};

/// Builds the axum router with all API routes.
///
/// The router holds no state: every request builds its own profile and
/// report, and the page content is static.
pub fn router() -> Router {
    Router::new()
        .route("/estimate", post(handlers::post_estimate))
        .route("/tips", get(handlers::get_tips))
        .route("/appliances", get(handlers::get_appliances))
        .route("/about", get(handlers::get_about))
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(addr: SocketAddr) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, router()).await
}
