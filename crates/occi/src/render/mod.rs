mod json;
mod text;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::{error, warn};

use serde_json::Value;

use crate::attributes::{AttributeMap, AttributeType, is_reserved, prefixed_id};
use crate::category::{Category, CategoryId};
use crate::config::RenderConfig;
use crate::entity::{Entity, Model};
use crate::error::{Error, Result};
use crate::response::{ACCEPT, Format, Response, SERVER, Status};

/// An element of a list payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item<'a> {
    /// An entity.
    Entity(&'a Entity),
    /// A location path.
    Location(&'a str),
}

/// A result value to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<'a> {
    /// A raw status, with an optional message.
    Status {
        /// Message text.
        message: Option<&'a str>,
    },
    /// A text message.
    Message(&'a str),
    /// A single entity.
    Entity(&'a Entity),
    /// A list of entities or location paths.
    List(Vec<Item<'a>>),
}

/// An endpoint of a link, resolved through the [`Model`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointView {
    /// Location path of the endpoint entity.
    pub location: String,
    /// Kind of the endpoint entity.
    pub kind: Option<CategoryId>,
}

/// The wire-format independent view of an entity.
///
/// Both renderings serialize this view.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityView {
    /// Identifier, with the `urn:uuid:` prefix.
    pub id: String,
    /// Kind.
    pub kind: Category,
    /// Mixins.
    pub mixins: Vec<Category>,
    /// Actions declared by the kind.
    pub actions: Vec<Category>,
    /// Title.
    pub title: Option<String>,
    /// Summary.
    pub summary: Option<String>,
    /// Location path.
    pub location: Option<String>,
    /// Coerced values of the attributes which are not reserved.
    pub attributes: AttributeMap,
    /// Views of the links of a resource.
    pub links: Vec<EntityView>,
    /// Source endpoint of a link.
    pub source: Option<EndpointView>,
    /// Target endpoint of a link.
    pub target: Option<EndpointView>,
}

impl EntityView {
    /// Builds the view of an entity, querying the [`Model`] for locations,
    /// kinds, and typed attribute values.
    #[must_use]
    pub fn new<M: Model + ?Sized>(model: &M, entity: &Entity) -> Self {
        let attributes = entity
            .attributes
            .iter()
            .filter(|(name, _)| !is_reserved(name))
            .map(|(name, raw)| (name.clone(), coerce(model, entity, name, raw)))
            .collect();

        let (source, target) = match &entity.endpoints {
            Some(endpoints) => (
                Some(endpoint(model, &endpoints.source)),
                Some(endpoint(model, &endpoints.target)),
            ),
            None => (None, None),
        };

        Self {
            id: prefixed_id(&entity.id),
            kind: entity.kind.clone(),
            mixins: entity.mixins.clone(),
            actions: entity.actions.clone(),
            title: entity.title_text().map(Into::into),
            summary: entity.summary_text().map(Into::into),
            location: model.location_of(&entity.id),
            attributes,
            links: entity
                .links
                .iter()
                .map(|link| Self::new(model, link))
                .collect(),
            source,
            target,
        }
    }

    /// Whether the view describes a link.
    #[must_use]
    #[inline]
    pub const fn is_link(&self) -> bool {
        self.source.is_some()
    }
}

// A typed lookup is preferred over the stored text.
fn coerce<M: Model + ?Sized>(model: &M, entity: &Entity, name: &str, raw: &str) -> Value {
    let raw_value = || Value::String(raw.into());
    match model.attribute_type(entity, name) {
        Some(AttributeType::String) => model
            .attribute_as_string(entity, name)
            .map_or_else(raw_value, Value::String),
        Some(AttributeType::Number(kind)) => model
            .attribute_as_number(entity, name)
            .or_else(|| kind.parse(raw))
            .map_or_else(raw_value, Value::Number),
        Some(attribute_type @ (AttributeType::Boolean | AttributeType::Array)) => {
            attribute_type.coerce(raw).unwrap_or_else(raw_value)
        }
        None => model
            .attribute_as_string(entity, name)
            .map(Value::String)
            .or_else(|| model.attribute_as_number(entity, name).map(Value::Number))
            .unwrap_or_else(raw_value),
    }
}

fn endpoint<M: Model + ?Sized>(model: &M, entity_id: &str) -> EndpointView {
    let location = model.location_of(entity_id).unwrap_or_else(|| {
        warn!("No location known for the link endpoint {entity_id}, using its identifier");
        entity_id.into()
    });
    EndpointView {
        location,
        kind: model.kind_of(entity_id),
    }
}

/// Renders a [`Payload`] into a [`Response`] of the given [`Format`].
///
/// # Errors
///
/// A [`ResponseParse`](crate::error::ErrorKind::ResponseParse) error is
/// returned when the payload cannot be represented, such as an empty list,
/// or when its serialization fails.
pub fn render<M: Model + ?Sized>(
    format: Format,
    config: &RenderConfig,
    model: &M,
    payload: &Payload<'_>,
    status: Status,
) -> Result<Response> {
    let response = match payload {
        Payload::Status { message } => render_message(format, status, message.unwrap_or_default()),
        Payload::Message(message) => render_message(format, status, message),
        Payload::Entity(entity) => {
            render_entities(format, config, &[EntityView::new(model, entity)], status)
        }
        Payload::List(items) => render_list(format, config, model, items, status),
    }?;

    Ok(with_common_headers(response, config))
}

/// Renders a [`Payload`], turning any failure into an error envelope of the
/// same [`Format`].
///
/// This function never fails, so the transport always receives a body in
/// the negotiated format.
#[must_use]
pub fn render_or_error<M: Model + ?Sized>(
    format: Format,
    config: &RenderConfig,
    model: &M,
    payload: &Payload<'_>,
    status: Status,
) -> Response {
    render(format, config, model, payload, status)
        .unwrap_or_else(|error| render_error(format, config, &error))
}

/// Renders an [`Error`] as an error envelope.
///
/// Request parse errors are rendered with status `400`, any other error
/// with status `500`.
#[must_use]
pub fn render_error(format: Format, config: &RenderConfig, error: &Error) -> Response {
    let status = if error.kind().is_request_error() {
        Status::BAD_REQUEST
    } else {
        error!("Unable to render the response: {error}");
        Status::INTERNAL_SERVER_ERROR
    };

    let message = error.to_string();
    let response = if format.is_json() {
        json::message(format, status, &message).unwrap_or_else(|e| {
            error!("Unable to render the error envelope: {e}");
            json::internal_error(format)
        })
    } else {
        text::message(status, &message)
    };

    with_common_headers(response, config)
}

/// Renders a status message.
///
/// Unlike [`render_or_error`], no [`Model`] is needed, so this function
/// fits the responses produced before a request reaches the model.
#[must_use]
pub fn render_status(
    format: Format,
    config: &RenderConfig,
    status: Status,
    message: &str,
) -> Response {
    match render_message(format, status, message) {
        Ok(response) => with_common_headers(response, config),
        Err(error) => render_error(format, config, &error),
    }
}

fn render_message(format: Format, status: Status, message: &str) -> Result<Response> {
    if format.is_json() {
        json::message(format, status, message)
    } else {
        Ok(text::message(status, message))
    }
}

fn render_entities(
    format: Format,
    config: &RenderConfig,
    views: &[EntityView],
    status: Status,
) -> Result<Response> {
    if format.is_json() {
        json::entities(format, views, status)
    } else {
        Ok(text::entities(config, views, status))
    }
}

fn render_list<M: Model + ?Sized>(
    format: Format,
    config: &RenderConfig,
    model: &M,
    items: &[Item<'_>],
    status: Status,
) -> Result<Response> {
    let mut views = Vec::new();
    let mut locations = Vec::new();
    for item in items {
        match item {
            Item::Entity(entity) => views.push(EntityView::new(model, entity)),
            Item::Location(location) => locations.push(*location),
        }
    }

    match (views.is_empty(), locations.is_empty()) {
        (true, true) => Err(Error::response("Cannot represent this value, the list is empty")),
        (true, false) => {
            if format.is_json() {
                json::locations(format, &locations, status)
            } else {
                Ok(text::locations(config, &locations, status))
            }
        }
        (false, dropped) => {
            if !dropped {
                warn!(
                    "The list mixes entities and locations, dropping {} locations",
                    locations.len()
                );
            }
            render_entities(format, config, &views, status)
        }
    }
}

pub(crate) fn with_common_headers(response: Response, config: &RenderConfig) -> Response {
    response
        .header(SERVER, config.server())
        .header(ACCEPT, config.accept())
}
