use axum::Json;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use serde::Serialize;

pub static PARTIAL_CONTENT_HEADER: HeaderName = HeaderName::from_static("x-partial-content");

/// Success envelope. `PartialContent` keeps the body shape of `OK` and adds
/// the `X-Partial-Content: true` marker so clients can tell a degraded
/// aggregate from a complete one.
pub enum Response<T: Serialize> {
    OK(T),
    PartialContent(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::PartialContent(body) => {
                let mut response =
                    (StatusCode::PARTIAL_CONTENT, Json(body)).into_response();
                response
                    .headers_mut()
                    .insert(PARTIAL_CONTENT_HEADER.clone(), HeaderValue::from_static("true"));
                response
            }
        }
    }
}
