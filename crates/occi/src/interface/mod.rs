mod json;
mod text;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::DefaultHashBuilder;

use indexmap::{IndexMap, IndexSet};

use log::{error, warn};

use serde::Serialize;

use serde_json::Value;

use crate::attributes::AttributeType;
use crate::category::{Category, CategoryId};
use crate::config::RenderConfig;
use crate::entity::Model;
use crate::error::Result;
use crate::render::with_common_headers;
use crate::response::{Format, Response, Status};
use crate::schema::{Action, Attribute, Kind, Mixin};

/// Attribute schemas, indexed by attribute name.
pub type AttributeSchemas = IndexMap<String, AttributeSchema, DefaultHashBuilder>;

/// The validation pattern slot of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributePattern {
    /// Wire type the pattern applies to.
    #[serde(rename = "type")]
    pub pattern_type: &'static str,
    /// Validation pattern, empty when unconstrained.
    pub pattern: String,
}

/// The schema of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSchema {
    /// Whether the attribute can be modified after creation.
    pub mutable: bool,
    /// Whether the attribute must be supplied.
    pub required: bool,
    /// Wire type.
    #[serde(rename = "type")]
    pub attribute_type: &'static str,
    /// Attribute description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Default value, coerced into the wire type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Validation pattern, only present for non-string types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<AttributePattern>,
}

/// The description of an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionInterface {
    /// Action scheme.
    pub scheme: String,
    /// Action term.
    pub term: String,
    /// Action title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Action parameters.
    pub attributes: AttributeSchemas,
}

/// The description of a kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindInterface {
    /// Kind scheme.
    pub scheme: String,
    /// Kind term.
    pub term: String,
    /// Kind title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Location path of the kind collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Attribute schemas.
    pub attributes: AttributeSchemas,
    /// Action identifiers.
    pub actions: Vec<String>,
    /// Parent kind identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// The description of a mixin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixinInterface {
    /// Mixin scheme.
    pub scheme: String,
    /// Mixin term.
    pub term: String,
    /// Mixin title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Location path of the mixin collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Attribute schemas.
    pub attributes: AttributeSchemas,
    /// Action identifiers.
    pub actions: Vec<String>,
    /// Identifiers of the mixins this mixin depends on.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends: Vec<String>,
}

/// The kinds, mixins, and actions owned by an extension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInterface {
    /// Extension identifier.
    pub id: String,
    /// Kinds.
    pub kinds: Vec<KindInterface>,
    /// Mixins.
    pub mixins: Vec<MixinInterface>,
    /// Actions of the kinds and mixins, listed once.
    pub actions: Vec<ActionInterface>,
}

/// The discovery document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryDocument {
    /// Extensions, in the order they have been first encountered.
    pub model: Vec<ModelInterface>,
}

// An extension group, with the identifiers of its already listed actions.
struct Group {
    interface: ModelInterface,
    listed_actions: IndexSet<CategoryId, DefaultHashBuilder>,
}

impl Group {
    fn new(id: String) -> Self {
        Self {
            interface: ModelInterface {
                id,
                kinds: Vec::new(),
                mixins: Vec::new(),
                actions: Vec::new(),
            },
            listed_actions: IndexSet::default(),
        }
    }

    fn add_actions(&mut self, actions: &[Action]) {
        for action in actions {
            if self.listed_actions.insert(action.id()) {
                self.interface.actions.push(action_interface(action));
            }
        }
    }
}

/// Builds the discovery document.
///
/// A filter keeps the kinds and mixins whose term or identifier equals it.
/// Kinds and mixins are grouped by the extension owning them. Mixin tags
/// defined by `user` are grouped under their scheme.
///
/// Returns [`None`] when no kind and no mixin remains to be described.
pub fn discovery_document<M: Model + ?Sized>(
    model: &M,
    kinds: &[Kind],
    mixins: &[Mixin],
    filter: Option<&str>,
    user: &str,
) -> Option<DiscoveryDocument> {
    let filter = filter.map(str::trim).filter(|filter| !filter.is_empty());
    let matches = |category: &Category| {
        filter.is_none_or(|filter| category.term == filter || category.id() == filter)
    };

    let mut groups: IndexMap<String, Group, DefaultHashBuilder> = IndexMap::default();

    for kind in kinds.iter().filter(|kind| matches(&kind.category)) {
        let key = extension(model, &kind.category, false, user);
        let group = groups.entry(key.clone()).or_insert_with(|| Group::new(key));
        group.add_actions(&kind.actions);
        group.interface.kinds.push(kind_interface(model, kind));
    }

    for mixin in mixins.iter().filter(|mixin| matches(&mixin.category)) {
        let key = extension(model, &mixin.category, true, user);
        let group = groups.entry(key.clone()).or_insert_with(|| Group::new(key));
        group.add_actions(&mixin.actions);
        group.interface.mixins.push(mixin_interface(model, mixin));
    }

    if groups.is_empty() {
        return None;
    }

    Some(DiscoveryDocument {
        model: groups.into_values().map(|group| group.interface).collect(),
    })
}

/// Renders the discovery document into a [`Response`] of the given
/// [`Format`].
///
/// When no kind and no mixin remains to be described, an empty response
/// with status `204` is returned.
///
/// # Errors
///
/// A [`ResponseParse`](crate::error::ErrorKind::ResponseParse) error is
/// returned when the serialization of the document fails.
pub fn render_interface<M: Model + ?Sized>(
    format: Format,
    config: &RenderConfig,
    model: &M,
    kinds: &[Kind],
    mixins: &[Mixin],
    filter: Option<&str>,
    user: &str,
) -> Result<Response> {
    let response = match discovery_document(model, kinds, mixins, filter, user) {
        None => Response::new(Status::NO_CONTENT),
        Some(document) if format.is_json() => json::render(format, &document)?,
        Some(document) => text::render(config, &document),
    };

    Ok(with_common_headers(response, config))
}

fn extension<M: Model + ?Sized>(
    model: &M,
    category: &Category,
    is_mixin: bool,
    user: &str,
) -> String {
    let id = category.id();
    if is_mixin && model.is_user_mixin_tag(user, &id) {
        return category.scheme.clone();
    }
    model.extension_of(&id).unwrap_or_else(|| {
        warn!("No extension known for the category {id}, grouping it under its scheme");
        category.scheme.clone()
    })
}

fn location<M: Model + ?Sized>(
    model: &M,
    location: Option<&String>,
    category: &Category,
) -> Option<String> {
    location
        .cloned()
        .or_else(|| model.category_location(&category.id()))
}

fn kind_interface<M: Model + ?Sized>(model: &M, kind: &Kind) -> KindInterface {
    KindInterface {
        scheme: kind.category.scheme.clone(),
        term: kind.category.term.clone(),
        title: kind.title.clone(),
        location: location(model, kind.location.as_ref(), &kind.category),
        attributes: attribute_schemas(&kind.attributes),
        actions: action_identifiers(&kind.actions),
        parent: kind.parent.as_ref().map(|parent| parent.as_str().into()),
    }
}

fn mixin_interface<M: Model + ?Sized>(model: &M, mixin: &Mixin) -> MixinInterface {
    MixinInterface {
        scheme: mixin.category.scheme.clone(),
        term: mixin.category.term.clone(),
        title: mixin.title.clone(),
        location: location(model, mixin.location.as_ref(), &mixin.category),
        attributes: attribute_schemas(&mixin.attributes),
        actions: action_identifiers(&mixin.actions),
        depends: mixin
            .depends
            .iter()
            .map(|depend| depend.as_str().into())
            .collect(),
    }
}

fn action_interface(action: &Action) -> ActionInterface {
    ActionInterface {
        scheme: action.category.scheme.clone(),
        term: action.category.term.clone(),
        title: action.title.clone(),
        attributes: attribute_schemas(&action.attributes),
    }
}

fn action_identifiers(actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .map(|action| action.id().into_string())
        .collect()
}

fn attribute_schemas(attributes: &[Attribute]) -> AttributeSchemas {
    attributes
        .iter()
        .map(|attribute| (attribute.name.clone(), attribute_schema(attribute)))
        .collect()
}

fn attribute_schema(attribute: &Attribute) -> AttributeSchema {
    let attribute_type = attribute.attribute_type();

    let default = attribute
        .default
        .as_deref()
        .filter(|default| !default.is_empty())
        .and_then(|default| {
            let value = attribute_type.coerce(default);
            if value.is_none() {
                error!(
                    "Unable to convert the default value `{default}` of the attribute {} into a {attribute_type}",
                    attribute.name
                );
            }
            value
        });

    AttributeSchema {
        mutable: attribute.mutable,
        required: attribute.required,
        attribute_type: attribute_type.wire_name(),
        description: attribute.description.clone(),
        default,
        pattern: (attribute_type != AttributeType::String).then(|| AttributePattern {
            pattern_type: attribute_type.wire_name(),
            pattern: String::new(),
        }),
    }
}
