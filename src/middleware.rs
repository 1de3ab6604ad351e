use axum::http::{HeaderName, HeaderValue};
use hyper::Request;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

pub const X_REQUEST_ID: &str = "x-request-id";

#[derive(Clone, Default)]
pub struct Id;

impl MakeRequestId for Id {
    fn make_request_id<B>(&mut self, _: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&uuid::Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}

/// Adds `X-Request-Id` header to request with randomly generated UUID.
pub fn request_id_layer() -> SetRequestIdLayer<Id> {
    let x_request_id = HeaderName::from_static(X_REQUEST_ID);
    SetRequestIdLayer::new(x_request_id, Id)
}

/// Propagate `X-Request-Id`s from requests to responses.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    let x_request_id = HeaderName::from_static(X_REQUEST_ID);
    PropagateRequestIdLayer::new(x_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique_uuids() {
        let req = Request::new(());
        let first = Id.make_request_id(&req).unwrap();
        let second = Id.make_request_id(&req).unwrap();

        let first = first.header_value().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(first).is_ok());
        assert_ne!(first, second.header_value().to_str().unwrap());
    }
}
