use anyhow::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub enum ServerError {
    NotFound(Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            ServerError::NotFound(err) => {
                tracing::debug!("{:?}", err);
                HTTPError::new(err)
                    .with_status(StatusCode::NOT_FOUND)
                    .into_response()
            }
        }
    }
}

#[derive(Debug)]
struct HTTPError {
    error: Error,
    status_code: StatusCode,
}

impl HTTPError {
    fn new(error: Error) -> Self {
        Self {
            error,
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }
}

impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        (
            self.status_code,
            Json(json!({ "error": self.error.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[tokio::test]
    async fn test_not_found_renders_json_error() {
        let response = ServerError::NotFound(anyhow!("Not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "Not found" }));
    }

    #[test]
    fn test_http_error_defaults_to_internal() {
        let err = HTTPError::new(anyhow!("boom"));
        assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
