use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::get_involved::handlers;
use crate::features::get_involved::services::GetInvolvedService;

/// Create routes for the get-involved feature (public)
pub fn routes(service: Arc<GetInvolvedService>) -> Router {
    Router::new()
        .route("/api/get-involved", post(handlers::create_get_involved))
        .with_state(service)
}
