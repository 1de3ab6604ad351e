use anyhow::anyhow;
use axum::{routing::get, Router};

mod health_check;
pub use health_check::{HealthData, HealthResponse};

use crate::errors::ServerError;

pub fn router() -> Router {
    Router::new()
        .route("/", get(health_check::health_check_handler))
        .fallback(not_found_handler)
}

async fn not_found_handler() -> ServerError {
    ServerError::NotFound(anyhow!("Not found"))
}
