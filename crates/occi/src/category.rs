use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::parser::{escape_quoted, split_unquoted, unquote};

/// A category identifier.
///
/// The identifier of a kind, mixin, or action is the concatenation of its
/// scheme and its term, without any separator. Two identifiers are equal if
/// and only if their concatenated strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a [`CategoryId`] from a scheme and a term.
    #[must_use]
    pub fn new(scheme: &str, term: &str) -> Self {
        let mut id = String::with_capacity(scheme.len() + term.len());
        id.push_str(scheme);
        id.push_str(term);
        Self(id)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the inner string.
    #[must_use]
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CategoryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CategoryId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

/// A category, described by its scheme and its term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    /// Category scheme.
    pub scheme: String,
    /// Category term.
    pub term: String,
}

impl Category {
    /// Creates a [`Category`].
    #[must_use]
    pub fn new(scheme: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            term: term.into(),
        }
    }

    /// Returns the [`CategoryId`] of this category.
    #[must_use]
    pub fn id(&self) -> CategoryId {
        CategoryId::new(&self.scheme, &self.term)
    }
}

/// The class of a category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryClass {
    /// A kind.
    Kind,
    /// A mixin.
    Mixin,
    /// An action.
    Action,
}

impl core::fmt::Display for CategoryClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.name().fmt(f)
    }
}

impl CategoryClass {
    /// Returns the name of the [`CategoryClass`] as it appears on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kind => "kind",
            Self::Mixin => "mixin",
            Self::Action => "action",
        }
    }

    /// Retrieves a [`CategoryClass`] from its name, ignoring the case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Kind, Self::Mixin, Self::Action]
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// A category declaration in the header rendering.
///
/// Its text form is
/// `term; scheme="..."; class="kind|mixin|action"` followed by the optional
/// `title`, `rel`, `location`, `attributes`, and `actions` parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDeclaration {
    /// Category term.
    pub term: String,
    /// Category scheme.
    pub scheme: String,
    /// Category class.
    pub class: CategoryClass,
    /// Human-readable title.
    pub title: Option<String>,
    /// Related categories, space-separated.
    pub rel: Option<String>,
    /// Location path.
    pub location: Option<String>,
    /// Attribute names, space-separated.
    pub attributes: Option<String>,
    /// Action identifiers, space-separated.
    pub actions: Option<String>,
}

impl CategoryDeclaration {
    /// Creates a [`CategoryDeclaration`] without optional parameters.
    #[must_use]
    pub fn new(term: impl Into<String>, scheme: impl Into<String>, class: CategoryClass) -> Self {
        Self {
            term: term.into(),
            scheme: scheme.into(),
            class,
            title: None,
            rel: None,
            location: None,
            attributes: None,
            actions: None,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    /// Sets the related categories.
    #[must_use]
    pub fn rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = non_empty(rel.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = non_empty(location.into());
        self
    }

    /// Sets the attribute names.
    #[must_use]
    pub fn attributes(mut self, attributes: impl Into<String>) -> Self {
        self.attributes = non_empty(attributes.into());
        self
    }

    /// Sets the action identifiers.
    #[must_use]
    pub fn actions(mut self, actions: impl Into<String>) -> Self {
        self.actions = non_empty(actions.into());
        self
    }

    /// Returns the [`CategoryId`] of the declared category.
    #[must_use]
    pub fn id(&self) -> CategoryId {
        CategoryId::new(&self.scheme, &self.term)
    }

    /// Parses a single category declaration.
    ///
    /// A leading `Category:` prefix is accepted. Returns [`None`] when the
    /// text does not match the declaration grammar.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let text = match text.get(..CATEGORY_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(CATEGORY_PREFIX) => {
                &text[CATEGORY_PREFIX.len()..]
            }
            _ => text,
        };

        let mut fragments = split_unquoted(text, ';').into_iter();
        let term = fragments.next()?.trim();
        if term.is_empty() || term.contains(['=', '"']) || term.contains(char::is_whitespace) {
            return None;
        }

        let mut scheme = None;
        let mut class = None;
        let mut declaration = Self::new(term, "", CategoryClass::Kind);

        for fragment in fragments {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                continue;
            }
            let (key, value) = fragment.split_once('=')?;
            let value = unquote(value);
            match key.trim().to_ascii_lowercase().as_str() {
                "scheme" => scheme = Some(value),
                "class" => class = Some(CategoryClass::from_name(&value)?),
                "title" => declaration = declaration.title(value),
                "rel" => declaration = declaration.rel(value),
                "location" => declaration = declaration.location(value),
                "attributes" => declaration = declaration.attributes(value),
                "actions" => declaration = declaration.actions(value),
                _ => {}
            }
        }

        declaration.scheme = scheme.filter(|scheme| !scheme.is_empty())?.into_owned();
        declaration.class = class?;

        Some(declaration)
    }
}

impl core::fmt::Display for CategoryDeclaration {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}; scheme=\"{}\"; class=\"{}\"",
            self.term,
            escape_quoted(&self.scheme),
            self.class
        )?;
        let parameters = [
            ("title", &self.title),
            ("rel", &self.rel),
            ("location", &self.location),
            ("attributes", &self.attributes),
            ("actions", &self.actions),
        ];
        for (name, value) in parameters {
            if let Some(value) = value {
                write!(f, "; {name}=\"{}\"", escape_quoted(value))?;
            }
        }
        Ok(())
    }
}

const CATEGORY_PREFIX: &str = "Category:";

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
