use axum::Json;
use serde::Serialize;

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub success: bool,
    pub data: HealthData,
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct HealthData {
    pub message: &'static str,
    pub code: u16,
}

impl HealthResponse {
    pub const fn online() -> Self {
        Self {
            status: "online",
            success: true,
            data: HealthData {
                message: "Server is online",
                code: 200,
            },
        }
    }
}

/// Reports that the server is up. Always 200.
pub async fn health_check_handler() -> Json<HealthResponse> {
    tracing::debug!("Health check requested");
    Json(HealthResponse::online())
}
