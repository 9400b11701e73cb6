use axum::http::HeaderMap;
use axum::http::header::{ACCEPT, CONTENT_TYPE};

use occi::error::Result;
use occi::input::InputData;
use occi::parser::{parse_body, parse_headers};
use occi::response::Format;

/// The media type of an exchange.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `text/occi`, data carried by headers.
    TextOcci,
    /// `application/json`.
    Json,
    /// `application/occi+json`.
    OcciJson,
}

impl core::fmt::Display for MediaType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.format().fmt(f)
    }
}

impl From<MediaType> for Format {
    fn from(media: MediaType) -> Self {
        media.format()
    }
}

impl From<Format> for MediaType {
    fn from(format: Format) -> Self {
        match format {
            Format::TextOcci => Self::TextOcci,
            Format::Json => Self::Json,
            Format::OcciJson => Self::OcciJson,
        }
    }
}

impl MediaType {
    /// Parses a [`MediaType`] from a `Content-Type` value.
    ///
    /// Parameters are ignored. Returns [`None`] for an unsupported type.
    #[must_use]
    pub fn from_content_type(value: &str) -> Option<Self> {
        Format::from_media_type(value).map(Self::from)
    }

    /// Returns the media type of a request body.
    ///
    /// Falls back to `text/occi` when the `Content-Type` header is absent
    /// or unsupported.
    #[must_use]
    pub fn for_request(headers: &HeaderMap) -> Self {
        headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::from_content_type)
            .unwrap_or(Self::TextOcci)
    }

    /// Returns the media type of a response, picking the first supported
    /// type listed by the `Accept` headers.
    ///
    /// Falls back to `application/json`.
    #[must_use]
    pub fn for_response(headers: &HeaderMap) -> Self {
        headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','))
            .find_map(Self::from_content_type)
            .unwrap_or(Self::Json)
    }

    /// Returns the codec [`Format`].
    #[must_use]
    #[inline]
    pub const fn format(self) -> Format {
        match self {
            Self::TextOcci => Format::TextOcci,
            Self::Json => Format::Json,
            Self::OcciJson => Format::OcciJson,
        }
    }
}

/// Decodes a request with the parser of its media type.
///
/// Header renderings always carry a single request, while a JSON body may
/// carry several of them.
///
/// # Errors
///
/// Fails when the JSON body cannot be decoded.
pub fn decode(media: MediaType, headers: &HeaderMap, body: &[u8]) -> Result<Vec<InputData>> {
    match media {
        MediaType::TextOcci => Ok(vec![parse_headers(headers.iter().filter_map(
            |(name, value)| value.to_str().ok().map(|value| (name.as_str(), value)),
        ))]),
        MediaType::Json | MediaType::OcciJson => parse_body(body),
    }
}
