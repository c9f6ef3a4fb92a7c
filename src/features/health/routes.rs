use axum::{routing::get, Router};

use crate::features::health::handler;

/// Health check route (no auth, no state)
pub fn routes() -> Router {
    Router::new().route("/health", get(handler::health_check))
}
