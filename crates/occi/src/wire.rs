use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeMap;

/// The member names which mark a payload as a collection.
pub const COLLECTION_MEMBERS: &[&str] = &["resources", "links", "mixins", "actions", "kinds"];

/// The collection members which no single entity, mixin tag, or action
/// declares.
pub const COLLECTION_ONLY_MEMBERS: &[&str] = &["resources", "kinds"];

/// The member names of a single entity, mixin tag, or action invocation.
///
/// Unless a [`COLLECTION_ONLY_MEMBERS`] member is present, a payload carrying
/// one of them owns its `links`, `mixins`, and `actions`.
pub const SINGLE_MEMBERS: &[&str] = &["id", "kind", "source", "target", "term", "action"];

/// A source or target endpoint of a link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireEndpoint {
    /// Location path of the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Kind of the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireResource {
    /// Resource identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Kind identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Resource title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Resource summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Mixin identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixins: Option<Vec<String>>,
    /// Attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
    /// Action identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    /// Nested links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<WireLink>>,
    /// Location path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireLink {
    /// Link identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Kind identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Link title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Link summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Mixin identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixins: Option<Vec<String>>,
    /// Attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
    /// Action identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    /// Source endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<WireEndpoint>,
    /// Target endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<WireEndpoint>,
    /// Location path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A user-defined mixin tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireMixinTag {
    /// Tag term.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Tag scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    /// Tag title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Location path of the tag collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Attributes. A tag must not carry any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
}

/// An action invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireAction {
    /// Action identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Action parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeMap>,
}

/// A collection of resources, links, mixin tags, and action invocations.
///
/// Unknown members are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WireCollection {
    /// Resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<WireResource>>,
    /// Links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<WireLink>>,
    /// Mixin tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixins: Option<Vec<WireMixinTag>>,
    /// Action invocations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<WireAction>>,
    /// Kind identifiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<serde_json::Value>>,
}

impl WireCollection {
    /// Whether the collection declares no resource, link, mixin tag, and
    /// action invocation.
    #[must_use]
    pub fn has_no_content(&self) -> bool {
        self.resources.as_ref().is_none_or(Vec::is_empty)
            && self.links.as_ref().is_none_or(Vec::is_empty)
            && self.mixins.as_ref().is_none_or(Vec::is_empty)
            && self.actions.as_ref().is_none_or(Vec::is_empty)
    }
}

/// A status message envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEnvelope<'a> {
    /// Message text.
    pub message: &'a str,
    /// HTTP status code.
    pub status: u16,
}

/// A locations envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationsEnvelope {
    /// Location paths.
    pub locations: Vec<String>,
}
