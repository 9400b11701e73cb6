use alloc::borrow::Cow;

/// All possible error kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A category is missing or invalid, the body is not valid JSON, or no
    /// known payload shape matches the input.
    CategoryParse,
    /// An attribute declaration is malformed or a required attribute is
    /// missing.
    AttributeParse,
    /// A value cannot be represented in the requested rendering.
    ResponseParse,
}

impl ErrorKind {
    pub(crate) const fn description(self) -> &'static str {
        match self {
            Self::CategoryParse => "Category Parse",
            Self::AttributeParse => "Attribute Parse",
            Self::ResponseParse => "Response Parse",
        }
    }

    /// Whether the error has been caused by the content of a request.
    #[must_use]
    pub const fn is_request_error(self) -> bool {
        matches!(self, Self::CategoryParse | Self::AttributeParse)
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.description().fmt(f)
    }
}

/// A codec error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    info: Cow<'static, str>,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.kind, self.info)
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates an [`Error`] from an [`ErrorKind`] and a description of
    /// what went wrong.
    pub fn new(kind: ErrorKind, info: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            info: info.into(),
        }
    }

    pub(crate) fn category(info: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::CategoryParse, info)
    }

    pub(crate) fn attribute(info: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::AttributeParse, info)
    }

    pub(crate) fn response(info: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ResponseParse, info)
    }

    /// Returns the [`ErrorKind`].
    #[must_use]
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error description.
    #[must_use]
    #[inline]
    pub fn info(&self) -> &str {
        &self.info
    }
}

/// A specialized [`Result`] type for [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
