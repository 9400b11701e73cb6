use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

/// The `text/occi` media type.
pub const TEXT_OCCI: &str = "text/occi";
/// The `application/json` media type.
pub const APPLICATION_JSON: &str = "application/json";
/// The `application/occi+json` media type.
pub const APPLICATION_OCCI_JSON: &str = "application/occi+json";
/// The `text/plain` media type.
pub const TEXT_PLAIN: &str = "text/plain";

/// The `Category` header.
pub const CATEGORY: &str = "Category";
/// The `X-OCCI-Attribute` header.
pub const X_OCCI_ATTRIBUTE: &str = "X-OCCI-Attribute";
/// The `X-OCCI-Location` header.
pub const X_OCCI_LOCATION: &str = "X-OCCI-Location";
/// The `Link` header.
pub const LINK: &str = "Link";
/// The `Server` header.
pub const SERVER: &str = "Server";
/// The `Accept` header.
pub const ACCEPT: &str = "Accept";

/// A wire format.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Format {
    /// The header rendering, `text/occi`.
    TextOcci,
    /// The structured rendering, served as `application/json`.
    Json,
    /// The structured rendering, served as `application/occi+json`.
    OcciJson,
}

impl core::fmt::Display for Format {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.content_type().fmt(f)
    }
}

impl Format {
    /// Returns the media type of the [`Format`].
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::TextOcci => TEXT_OCCI,
            Self::Json => APPLICATION_JSON,
            Self::OcciJson => APPLICATION_OCCI_JSON,
        }
    }

    /// Whether the [`Format`] is a structured rendering.
    #[must_use]
    #[inline]
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json | Self::OcciJson)
    }

    /// Retrieves a [`Format`] from a media type.
    ///
    /// Media type parameters, such as `charset`, are ignored.
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        [Self::TextOcci, Self::Json, Self::OcciJson]
            .into_iter()
            .find(|format| format.content_type().eq_ignore_ascii_case(essence))
    }
}

/// An HTTP status code.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Status(u16);

impl Status {
    /// 200 OK.
    pub const OK: Self = Self(200);
    /// 201 Created.
    pub const CREATED: Self = Self(201);
    /// 204 No Content.
    pub const NO_CONTENT: Self = Self(204);
    /// 400 Bad Request.
    pub const BAD_REQUEST: Self = Self(400);
    /// 404 Not Found.
    pub const NOT_FOUND: Self = Self(404);
    /// 500 Internal Server Error.
    pub const INTERNAL_SERVER_ERROR: Self = Self(500);

    /// Creates a [`Status`] from a numeric code.
    #[must_use]
    #[inline]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    #[inline]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Whether the status is `200 OK`.
    #[must_use]
    #[inline]
    pub const fn is_ok(self) -> bool {
        self.0 == 200
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

/// A framed response, independent of any HTTP library.
///
/// Headers are kept in insertion order, and a header name may occur
/// several times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: Status,
    content_type: Option<&'static str>,
    headers: Vec<(&'static str, String)>,
    body: Cow<'static, [u8]>,
}

impl Response {
    /// Creates an empty [`Response`] with the given [`Status`].
    #[must_use]
    #[inline]
    pub const fn new(status: Status) -> Self {
        Self {
            status,
            content_type: None,
            headers: Vec::new(),
            body: Cow::Borrowed(&[]),
        }
    }

    /// Sets the content type.
    #[must_use]
    #[inline]
    pub const fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Appends a header occurrence.
    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Cow<'static, [u8]>>) -> Self {
        self.body = body.into();
        self
    }

    pub(crate) fn push_header(&mut self, name: &'static str, value: String) {
        self.headers.push((name, value));
    }

    /// Returns the [`Status`].
    #[must_use]
    #[inline]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the content type, if any.
    #[must_use]
    #[inline]
    pub const fn media_type(&self) -> Option<&'static str> {
        self.content_type
    }

    /// Returns all header occurrences in insertion order.
    #[must_use]
    #[inline]
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    /// Returns all values of a header, ignoring the case of its name.
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the body.
    #[must_use]
    #[inline]
    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Returns the body as text, if it is valid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        core::str::from_utf8(&self.body).ok()
    }

    /// Consumes the response, returning its parts.
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        Status,
        Option<&'static str>,
        Vec<(&'static str, String)>,
        Cow<'static, [u8]>,
    ) {
        (self.status, self.content_type, self.headers, self.body)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Format, Response, Status};

    #[test]
    fn media_types() {
        assert_eq!(Format::from_media_type("text/occi"), Some(Format::TextOcci));
        assert_eq!(
            Format::from_media_type("application/json; charset=utf-8"),
            Some(Format::Json)
        );
        assert_eq!(
            Format::from_media_type("Application/OCCI+JSON"),
            Some(Format::OcciJson)
        );
        assert_eq!(Format::from_media_type("text/html"), None);
        assert!(Format::OcciJson.is_json());
        assert!(!Format::TextOcci.is_json());
    }

    #[test]
    fn repeated_headers() {
        let response = Response::new(Status::OK)
            .content_type("text/occi")
            .header("Category", "a")
            .header("X-OCCI-Attribute", "b")
            .header("Category", "c")
            .body(b"ok\n".as_slice());

        assert_eq!(
            response.header_values("category").collect::<Vec<_>>(),
            ["a", "c"]
        );
        assert_eq!(response.body_text(), Some("ok\n"));
        assert_eq!(response.media_type(), Some("text/occi"));
        assert!(response.status().is_ok());
    }
}
