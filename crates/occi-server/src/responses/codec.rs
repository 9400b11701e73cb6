use axum::response::{IntoResponse, Response};

use occi::response::Response as CodecResponse;

use super::frame;

/// A codec response, framed as an `axum` response.
///
/// A header value which cannot be carried by HTTP turns the whole response
/// into an internal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcciResponse(CodecResponse);

impl OcciResponse {
    /// Returns the wrapped codec response.
    #[must_use]
    #[inline]
    pub const fn as_codec(&self) -> &CodecResponse {
        &self.0
    }
}

impl From<CodecResponse> for OcciResponse {
    fn from(response: CodecResponse) -> Self {
        Self(response)
    }
}

impl IntoResponse for OcciResponse {
    fn into_response(self) -> Response {
        frame(self.0)
    }
}
