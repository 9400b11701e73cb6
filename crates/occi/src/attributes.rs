use alloc::format;
use alloc::string::{String, ToString};

use hashbrown::DefaultHashBuilder;

use indexmap::IndexMap;

use serde::{Deserialize, Serialize};

use serde_json::{Number, Value};

use crate::parser::escape_quoted;

/// The identifier attribute.
pub const OCCI_CORE_ID: &str = "occi.core.id";
/// The title attribute.
pub const OCCI_CORE_TITLE: &str = "occi.core.title";
/// The summary attribute.
pub const OCCI_CORE_SUMMARY: &str = "occi.core.summary";
/// The link source attribute.
pub const OCCI_CORE_SOURCE: &str = "occi.core.source";
/// The link target attribute.
pub const OCCI_CORE_TARGET: &str = "occi.core.target";

/// Attributes rendered through dedicated fields rather than through the
/// generic attribute map.
pub const RESERVED_ATTRIBUTES: &[&str] = &[
    OCCI_CORE_ID,
    OCCI_CORE_TITLE,
    OCCI_CORE_SUMMARY,
    OCCI_CORE_SOURCE,
    OCCI_CORE_TARGET,
];

/// The prefix carried by entity identifiers on the wire.
pub const URN_UUID_PREFIX: &str = "urn:uuid:";

/// An ordered map of attribute names and values.
pub type AttributeMap = IndexMap<String, Value, DefaultHashBuilder>;

/// Checks whether an attribute name is reserved.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_ATTRIBUTES.contains(&name)
}

/// Adds the [`URN_UUID_PREFIX`] to an entity identifier, when missing.
#[must_use]
pub fn prefixed_id(id: &str) -> String {
    if id.starts_with(URN_UUID_PREFIX) {
        id.to_string()
    } else {
        format!("{URN_UUID_PREFIX}{id}")
    }
}

/// Removes the [`URN_UUID_PREFIX`] from an entity identifier, when present.
#[must_use]
pub fn strip_id_prefix(id: &str) -> &str {
    id.strip_prefix(URN_UUID_PREFIX).unwrap_or(id)
}

/// Numeric subtypes of a number attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberKind {
    /// 32-bit signed integer.
    Integer,
    /// 64-bit signed integer.
    Long,
    /// Single precision floating point.
    Float,
    /// Double precision floating point.
    Double,
    /// Arbitrary precision decimal.
    BigDecimal,
}

impl NumberKind {
    /// Parses a text value into a JSON number of this subtype.
    ///
    /// Returns [`None`] when the text is not a valid number, or when the
    /// number is not finite.
    #[must_use]
    pub fn parse(self, value: &str) -> Option<Number> {
        let value = value.trim();
        match self {
            Self::Integer => value.parse::<i32>().ok().map(Number::from),
            Self::Long => value.parse::<i64>().ok().map(Number::from),
            Self::Float | Self::Double | Self::BigDecimal => value
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64),
        }
    }
}

/// The type of an attribute.
///
/// Enumeration-typed attributes are represented as [`AttributeType::String`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    /// A string.
    String,
    /// A number of the given subtype.
    Number(NumberKind),
    /// A boolean.
    Boolean,
    /// An array, such as a list, a set, or a map.
    Array,
}

// Type names are compared ignoring case. Absent or unknown names are strings.
const TYPE_NAMES: &[(&str, AttributeType)] = &[
    ("integer", AttributeType::Number(NumberKind::Integer)),
    ("int", AttributeType::Number(NumberKind::Integer)),
    ("long", AttributeType::Number(NumberKind::Long)),
    ("float", AttributeType::Number(NumberKind::Float)),
    ("double", AttributeType::Number(NumberKind::Double)),
    ("bigdecimal", AttributeType::Number(NumberKind::BigDecimal)),
    ("list", AttributeType::Array),
    ("set", AttributeType::Array),
    ("collection", AttributeType::Array),
    ("map", AttributeType::Array),
    ("boolean", AttributeType::Boolean),
];

impl AttributeType {
    /// Classifies a free-text type name.
    #[must_use]
    pub fn from_type_name(name: Option<&str>) -> Self {
        let Some(name) = name.map(str::trim) else {
            return Self::String;
        };
        TYPE_NAMES
            .iter()
            .find(|(type_name, _)| type_name.eq_ignore_ascii_case(name))
            .map_or(Self::String, |(_, attribute_type)| *attribute_type)
    }

    /// Returns the type name used on the wire.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number(_) => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
        }
    }

    /// Converts a text value into a JSON value of this type.
    ///
    /// Returns [`None`] when the text cannot be represented as this type.
    #[must_use]
    pub fn coerce(self, value: &str) -> Option<Value> {
        match self {
            Self::String => Some(Value::String(value.into())),
            Self::Number(kind) => kind.parse(value).map(Value::Number),
            Self::Boolean => parse_bool(value).map(Value::Bool),
            Self::Array => serde_json::from_str::<Value>(value)
                .ok()
                .filter(Value::is_array),
        }
    }
}

impl core::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.wire_name().fmt(f)
    }
}

/// Parses a boolean, ignoring the case.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Returns the text form of an attribute value.
///
/// Strings are returned as they are, any other value is returned in its
/// JSON form.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        value => value.to_string(),
    }
}

/// Formats an attribute as a `name="value"` declaration of the header
/// rendering.
///
/// Numbers and booleans are left unquoted. Double quotes and backslashes
/// of a quoted value are escaped with a backslash.
#[must_use]
pub fn format_attribute(name: &str, value: &Value) -> String {
    match value {
        Value::Number(number) => format!("{name}={number}"),
        Value::Bool(boolean) => format!("{name}={boolean}"),
        value => format!("{name}=\"{}\"", escape_quoted(&value_text(value))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{
        AttributeType, NumberKind, format_attribute, is_reserved, parse_bool, prefixed_id,
        strip_id_prefix,
    };

    #[test]
    fn reserved_names() {
        assert!(is_reserved("occi.core.id"));
        assert!(is_reserved("occi.core.target"));
        assert!(!is_reserved("occi.compute.cores"));
    }

    #[test]
    fn id_prefix() {
        assert_eq!(prefixed_id("1234"), "urn:uuid:1234");
        assert_eq!(prefixed_id("urn:uuid:1234"), "urn:uuid:1234");
        assert_eq!(strip_id_prefix("urn:uuid:1234"), "1234");
        assert_eq!(strip_id_prefix("1234"), "1234");
    }

    #[test]
    fn type_names() {
        for (name, expected) in [
            ("Integer", AttributeType::Number(NumberKind::Integer)),
            ("int", AttributeType::Number(NumberKind::Integer)),
            ("LONG", AttributeType::Number(NumberKind::Long)),
            ("float", AttributeType::Number(NumberKind::Float)),
            ("Double", AttributeType::Number(NumberKind::Double)),
            ("BigDecimal", AttributeType::Number(NumberKind::BigDecimal)),
            ("List", AttributeType::Array),
            ("set", AttributeType::Array),
            ("Collection", AttributeType::Array),
            ("Map", AttributeType::Array),
            ("Boolean", AttributeType::Boolean),
            ("String", AttributeType::String),
            ("", AttributeType::String),
            ("Enum", AttributeType::String),
            ("architecture", AttributeType::String),
        ] {
            assert_eq!(AttributeType::from_type_name(Some(name)), expected, "{name}");
        }
        assert_eq!(AttributeType::from_type_name(None), AttributeType::String);
    }

    #[test]
    fn wire_names() {
        assert_eq!(
            AttributeType::Number(NumberKind::Long).wire_name(),
            "number"
        );
        assert_eq!(AttributeType::Array.wire_name(), "array");
        assert_eq!(AttributeType::Boolean.wire_name(), "boolean");
        assert_eq!(AttributeType::String.wire_name(), "string");
    }

    #[test]
    fn coerce_values() {
        let integer = AttributeType::Number(NumberKind::Integer);
        assert_eq!(integer.coerce(" 4 "), Some(json!(4)));
        assert_eq!(integer.coerce("4.5"), None);
        assert_eq!(integer.coerce("9999999999"), None);
        assert_eq!(
            AttributeType::Number(NumberKind::Long).coerce("9999999999"),
            Some(json!(9_999_999_999_i64))
        );
        assert_eq!(
            AttributeType::Number(NumberKind::Float).coerce("2.5"),
            Some(json!(2.5))
        );
        assert_eq!(
            AttributeType::Number(NumberKind::Double).coerce("NaN"),
            None
        );
        assert_eq!(AttributeType::Boolean.coerce("TRUE"), Some(Value::Bool(true)));
        assert_eq!(AttributeType::Boolean.coerce("yes"), None);
        assert_eq!(AttributeType::Array.coerce("[1, 2]"), Some(json!([1, 2])));
        assert_eq!(AttributeType::Array.coerce("{}"), None);
        assert_eq!(AttributeType::String.coerce("x86"), Some(json!("x86")));
    }

    #[test]
    fn booleans() {
        assert_eq!(parse_bool("false"), Some(false));
        assert_eq!(parse_bool(" True"), Some(true));
        assert_eq!(parse_bool("0"), None);
    }

    #[test]
    fn attribute_declarations() {
        assert_eq!(
            format_attribute("occi.compute.hostname", &json!("vm1")),
            r#"occi.compute.hostname="vm1""#
        );
        assert_eq!(format_attribute("occi.compute.cores", &json!(2)), "occi.compute.cores=2");
        assert_eq!(
            format_attribute("occi.network.allocation", &json!(false)),
            "occi.network.allocation=false"
        );
        assert_eq!(format_attribute("empty", &Value::Null), r#"empty="""#);
        assert_eq!(
            format_attribute("occi.core.summary", &json!(r#"say "hi", ok"#)),
            r#"occi.core.summary="say \"hi\", ok""#
        );
    }
}
