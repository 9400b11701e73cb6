use axum::body::Bytes;
use axum::extract::{FromRef, FromRequest, Request};

use occi::config::RenderConfig;
use occi::input::InputData;

use tracing::{debug, warn};

use crate::media::{MediaType, decode};
use crate::responses::error::ErrorResponse;

/// The decoded requests of an HTTP message.
///
/// The request body is decoded with the parser matching its `Content-Type`,
/// while the response media type is negotiated through the `Accept`
/// headers. Decoding failures are rejected with an [`ErrorResponse`] in the
/// response media type.
///
/// As this extractor consumes the body, it must be the last argument of a
/// handler.
#[derive(Debug, Clone, PartialEq)]
pub struct OcciRequest {
    /// Decoded requests.
    pub inputs: Vec<InputData>,
    /// Media type of the request.
    pub request_media: MediaType,
    /// Media type of the response.
    pub response_media: MediaType,
}

impl<S> FromRequest<S> for OcciRequest
where
    S: Send + Sync,
    RenderConfig: FromRef<S>,
{
    type Rejection = ErrorResponse;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_media = MediaType::for_request(request.headers());
        let response_media = MediaType::for_response(request.headers());
        let headers = request.headers().clone();

        let body = Bytes::from_request(request, state).await.map_err(|e| {
            warn!("Unable to read the request body: {e}");
            ErrorResponse::invalid_data(
                response_media,
                &RenderConfig::from_ref(state),
                &e.body_text(),
            )
        })?;

        let inputs = decode(request_media, &headers, &body).map_err(|e| {
            debug!("Rejecting a {request_media} request: {e}");
            ErrorResponse::from_error(response_media, &RenderConfig::from_ref(state), &e)
        })?;

        debug!(
            "Decoded {} request(s) from a {request_media} message",
            inputs.len()
        );

        Ok(Self {
            inputs,
            request_media,
            response_media,
        })
    }
}
