use axum::{extract::Request, middleware::Next, response::Response};
use http::{HeaderName, HeaderValue};
use tower_http::request_id::{MakeRequestId, RequestId};

pub const X_REQUEST_ID: &str = "x-request-id";

#[must_use]
pub fn header() -> HeaderName {
    HeaderName::from_static(X_REQUEST_ID)
}

/// Request id as seen by handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XRequestId(pub String);

/// Generates a random v4 uuid for requests that arrive without an id.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _req: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&uuid::Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Copies the `x-request-id` header into request extensions.
pub async fn push_req_id_to_extensions(mut req: Request, next: Next) -> Response {
    let rid = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    if let Some(rid) = rid {
        req.extensions_mut().insert(XRequestId(rid));
    }
    next.run(req).await
}
