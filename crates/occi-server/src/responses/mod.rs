/// Codec responses.
pub mod codec;
/// Error responses.
pub mod error;

use axum::body::Body;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};

use occi::response::{Format, Response as CodecResponse};

const INTERNAL_ERROR_JSON: &str = r#"{"message":"Internal error","status":500}"#;
const INTERNAL_ERROR_TEXT: &str = "Internal error";

// Headers are appended, so repeated names keep all their occurrences.
pub(crate) fn frame(response: CodecResponse) -> Response {
    let format = response
        .media_type()
        .and_then(Format::from_media_type)
        .unwrap_or(Format::Json);
    let (status, content_type, headers, body) = response.into_parts();

    let mut builder = axum::http::Response::builder().status(status.code());
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    for (name, value) in headers {
        builder = builder.header(name, value);
    }

    builder
        .body(Body::from(body.into_owned()))
        .unwrap_or_else(|e| {
            tracing::error!("Unable to frame the {format} response: {e}");
            internal_error(format)
        })
}

fn internal_error(format: Format) -> Response {
    let body = if format.is_json() {
        INTERNAL_ERROR_JSON
    } else {
        INTERNAL_ERROR_TEXT
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(CONTENT_TYPE, format.content_type())],
        body,
    )
        .into_response()
}
