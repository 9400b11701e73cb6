use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use occi::config::RenderConfig;
use occi::error::Error;
use occi::render::{render_error, render_status};
use occi::response::Status;

use crate::media::MediaType;

use super::frame;

/// An error envelope, rendered in the negotiated [`MediaType`].
///
/// Request parse errors are answered with status `400`, any other error
/// with status `500`.
pub struct ErrorResponse(Response);

impl ErrorResponse {
    /// Generates an [`ErrorResponse`] from an [`Error`].
    #[must_use]
    #[inline]
    pub fn from_error(media: MediaType, config: &RenderConfig, error: &Error) -> Self {
        Self(frame(render_error(media.format(), config, error)))
    }

    /// Generates an [`ErrorResponse`].
    ///
    /// Requires specifying a status code and a general description.
    #[must_use]
    #[inline]
    pub fn with_description(
        media: MediaType,
        config: &RenderConfig,
        status: StatusCode,
        description: &str,
    ) -> Self {
        Self(frame(render_status(
            media.format(),
            config,
            Status::new(status.as_u16()),
            description,
        )))
    }

    /// Generates an [`ErrorResponse`] for invalid data.
    ///
    /// Requires specifying a general error description.
    #[must_use]
    #[inline]
    pub fn invalid_data(media: MediaType, config: &RenderConfig, description: &str) -> Self {
        Self::with_description(media, config, StatusCode::BAD_REQUEST, description)
    }

    /// Generates an [`ErrorResponse`] for an internal error.
    ///
    /// Requires specifying a general error description.
    #[must_use]
    #[inline]
    pub fn internal(media: MediaType, config: &RenderConfig, description: &str) -> Self {
        Self::with_description(
            media,
            config,
            StatusCode::INTERNAL_SERVER_ERROR,
            description,
        )
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        self.0
    }
}

impl From<ErrorResponse> for Response {
    fn from(response: ErrorResponse) -> Self {
        response.0
    }
}
