use alloc::borrow::Cow;
use alloc::string::String;

/// Default value of the `Server` response header.
pub const DEFAULT_SERVER_HEADER: &str = concat!("occi-rs/", env!("CARGO_PKG_VERSION"), " OCCI/1.2");

/// Default value of the `Accept` response header.
pub const DEFAULT_ACCEPTED_TYPES: &str = "text/occi, application/json, application/occi+json";

/// Default maximum size, in bytes, of the category declarations carried
/// by headers in the header rendering of the discovery document.
pub const DEFAULT_HEADER_BUDGET: usize = 8000;

/// Default maximum number of entities rendered in the header rendering.
pub const DEFAULT_MAX_HEADER_ENTITIES: usize = 1;

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    server_header: Cow<'static, str>,
    accepted_types: Cow<'static, str>,
    header_budget: usize,
    max_header_entities: usize,
    base_uri: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// Creates a [`RenderConfig`] with default values.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            server_header: Cow::Borrowed(DEFAULT_SERVER_HEADER),
            accepted_types: Cow::Borrowed(DEFAULT_ACCEPTED_TYPES),
            header_budget: DEFAULT_HEADER_BUDGET,
            max_header_entities: DEFAULT_MAX_HEADER_ENTITIES,
            base_uri: None,
        }
    }

    /// Sets the value of the `Server` response header.
    #[must_use]
    pub fn server_header(mut self, server_header: impl Into<Cow<'static, str>>) -> Self {
        self.server_header = server_header.into();
        self
    }

    /// Sets the value of the `Accept` response header.
    #[must_use]
    pub fn accepted_types(mut self, accepted_types: impl Into<Cow<'static, str>>) -> Self {
        self.accepted_types = accepted_types.into();
        self
    }

    /// Sets the header budget of the discovery document.
    #[must_use]
    #[inline]
    pub const fn header_budget(mut self, header_budget: usize) -> Self {
        self.header_budget = header_budget;
        self
    }

    /// Sets the maximum number of entities rendered in the header rendering.
    ///
    /// A value of zero is raised to one.
    #[must_use]
    #[inline]
    pub const fn max_header_entities(mut self, max_header_entities: usize) -> Self {
        self.max_header_entities = if max_header_entities == 0 {
            1
        } else {
            max_header_entities
        };
        self
    }

    /// Sets the base URI prefixed to locations in the header rendering.
    ///
    /// A trailing `/` is removed.
    #[must_use]
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        let mut base_uri = base_uri.into();
        while base_uri.ends_with('/') {
            let _ = base_uri.pop();
        }
        self.base_uri = (!base_uri.is_empty()).then_some(base_uri);
        self
    }

    /// Returns the value of the `Server` response header.
    #[must_use]
    #[inline]
    pub fn server(&self) -> &str {
        &self.server_header
    }

    /// Returns the value of the `Accept` response header.
    #[must_use]
    #[inline]
    pub fn accept(&self) -> &str {
        &self.accepted_types
    }

    /// Returns the header budget of the discovery document.
    #[must_use]
    #[inline]
    pub const fn budget(&self) -> usize {
        self.header_budget
    }

    /// Returns the maximum number of entities rendered in the header
    /// rendering.
    #[must_use]
    #[inline]
    pub const fn header_entities(&self) -> usize {
        self.max_header_entities
    }

    /// Returns the base URI.
    #[must_use]
    #[inline]
    pub fn base(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }

    /// Prefixes a location path with the base URI, when one is set.
    #[must_use]
    pub fn absolute_location(&self, location: &str) -> String {
        let mut absolute = String::new();
        if let Some(base) = self.base() {
            absolute.push_str(base);
            if !location.starts_with('/') {
                absolute.push('/');
            }
        }
        absolute.push_str(location);
        absolute
    }
}
