use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use log::{debug, warn};

use serde::Deserialize;

use serde_json::Value;

use crate::attributes::{
    AttributeMap, OCCI_CORE_ID, OCCI_CORE_SOURCE, OCCI_CORE_SUMMARY, OCCI_CORE_TARGET,
    OCCI_CORE_TITLE, prefixed_id, strip_id_prefix,
};
use crate::category::CategoryId;
use crate::error::{Error, Result};
use crate::input::InputData;
use crate::wire::{
    COLLECTION_MEMBERS, COLLECTION_ONLY_MEMBERS, SINGLE_MEMBERS, WireAction, WireCollection,
    WireLink, WireMixinTag, WireResource,
};

// The outcome of a single shape attempt.
//
// A mismatch lets the next shape be attempted, while an `Err` returned by
// the attempt stops the detection immediately.
enum Attempt {
    Decoded(Vec<InputData>),
    Mismatch(String),
}

type Decoder = fn(&Value) -> Result<Attempt>;

// Shapes in priority order.
const SHAPES: &[(&str, Decoder)] = &[
    ("collection", decode_collection),
    ("resource", decode_resource),
    ("link", decode_link),
    ("mixin tag", decode_mixin_tag),
    ("action", decode_action),
];

/// Parses the body of an `application/occi+json` request.
///
/// An empty body, or an empty JSON object, produces a single empty
/// [`InputData`].
///
/// Otherwise the body is decoded as the first matching shape among a
/// collection, a single resource, a single link, a single mixin tag, and a
/// single action invocation. A collection produces an [`InputData`] for each
/// of its resources, followed by the links nested in those resources, its
/// links, its mixin tags, and its action invocations.
///
/// # Errors
///
/// A [`CategoryParse`](crate::error::ErrorKind::CategoryParse) error is
/// returned when the body is not valid JSON, when no shape matches, when a
/// resource or a link has no kind, when a mixin tag misses its term, scheme,
/// or location, and when a collection declares no content.
///
/// An [`AttributeParse`](crate::error::ErrorKind::AttributeParse) error is
/// returned when a link misses an endpoint location, and when a mixin tag
/// carries attributes.
pub fn parse_body(body: &[u8]) -> Result<Vec<InputData>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(vec![InputData::new()]);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| Error::category(format!("Invalid json input: {e}")))?;

    if value.as_object().is_some_and(serde_json::Map::is_empty) {
        return Ok(vec![InputData::new()]);
    }

    let mut mismatches = Vec::with_capacity(SHAPES.len());
    for (shape, decode) in SHAPES {
        match decode(&value)? {
            Attempt::Decoded(inputs) => {
                debug!("Json input decoded as {shape}");
                return Ok(inputs);
            }
            Attempt::Mismatch(reason) => mismatches.push(format!("{shape}: {reason}")),
        }
    }

    Err(Error::category(format!(
        "Unknown json input, please check your payload. {}",
        mismatches.join("; ")
    )))
}

fn decode_collection(value: &Value) -> Result<Attempt> {
    let Some(object) = value.as_object() else {
        return Ok(Attempt::Mismatch("not a json object".into()));
    };
    let has_any = |members: &[&str]| members.iter().any(|member| object.contains_key(*member));

    if !has_any(COLLECTION_MEMBERS) {
        return Ok(Attempt::Mismatch(format!(
            "none of the {} members",
            COLLECTION_MEMBERS.join(", ")
        )));
    }

    // `links`, `mixins`, and `actions` are shared with single entities.
    if !has_any(COLLECTION_ONLY_MEMBERS) && has_any(SINGLE_MEMBERS) {
        return Ok(Attempt::Mismatch(format!(
            "a single payload member among {} without any of {}",
            SINGLE_MEMBERS.join(", "),
            COLLECTION_ONLY_MEMBERS.join(", ")
        )));
    }

    let collection = match WireCollection::deserialize(value) {
        Ok(collection) => collection,
        Err(e) => return Ok(Attempt::Mismatch(e.to_string())),
    };

    if collection.has_no_content() {
        if collection.kinds.as_ref().is_some_and(|kinds| !kinds.is_empty()) {
            debug!("Json collection declares only kinds, nothing to decode");
            return Ok(Attempt::Decoded(Vec::new()));
        }
        return Err(Error::category("No content found in the json collection"));
    }

    let mut inputs = Vec::new();
    let mut nested_links = Vec::new();

    for resource in collection.resources.unwrap_or_default() {
        let (input, links) = resource_input(resource)?;
        inputs.push(input);
        nested_links.extend(links);
    }

    for link in nested_links
        .into_iter()
        .chain(collection.links.unwrap_or_default())
    {
        inputs.push(link_input(link)?);
    }

    for tag in collection.mixins.unwrap_or_default() {
        inputs.push(mixin_tag_input(tag)?);
    }

    inputs.extend(
        collection
            .actions
            .unwrap_or_default()
            .into_iter()
            .map(action_input),
    );

    Ok(Attempt::Decoded(inputs))
}

fn decode_resource(value: &Value) -> Result<Attempt> {
    let resource = match WireResource::deserialize(value) {
        Ok(resource) => resource,
        Err(e) => return Ok(Attempt::Mismatch(e.to_string())),
    };

    let (input, links) = resource_input(resource)?;
    let mut inputs = Vec::with_capacity(1 + links.len());
    inputs.push(input);
    for link in links {
        inputs.push(link_input(link)?);
    }

    Ok(Attempt::Decoded(inputs))
}

fn decode_link(value: &Value) -> Result<Attempt> {
    match WireLink::deserialize(value) {
        Ok(link) => Ok(Attempt::Decoded(vec![link_input(link)?])),
        Err(e) => Ok(Attempt::Mismatch(e.to_string())),
    }
}

fn decode_mixin_tag(value: &Value) -> Result<Attempt> {
    match WireMixinTag::deserialize(value) {
        Ok(tag) => Ok(Attempt::Decoded(vec![mixin_tag_input(tag)?])),
        Err(e) => Ok(Attempt::Mismatch(e.to_string())),
    }
}

fn decode_action(value: &Value) -> Result<Attempt> {
    match WireAction::deserialize(value) {
        Ok(action) => Ok(Attempt::Decoded(vec![action_input(action)])),
        Err(e) => Ok(Attempt::Mismatch(e.to_string())),
    }
}

fn resource_input(resource: WireResource) -> Result<(InputData, Vec<WireLink>)> {
    let mut input = entity_input(
        resource.attributes,
        resource.id,
        resource.title,
        resource.summary,
        resource.mixins,
    );

    input.kind = Some(required_kind(resource.kind, "resource", &input)?);
    input.location = resource.location;

    let mut actions = resource.actions.unwrap_or_default().into_iter();
    input.action = actions.next().map(CategoryId::from);
    let ignored: Vec<String> = actions.collect();
    if !ignored.is_empty() {
        warn!(
            "Only the first action of a resource is taken into account, ignoring {}",
            ignored.join(", ")
        );
    }

    Ok((input, resource.links.unwrap_or_default()))
}

fn link_input(link: WireLink) -> Result<InputData> {
    let mut input = entity_input(
        link.attributes,
        link.id,
        link.title,
        link.summary,
        link.mixins,
    );

    input.kind = Some(required_kind(link.kind, "link", &input)?);
    input.location = link.location;

    let source = non_empty(link.source.and_then(|source| source.location))
        .ok_or_else(|| Error::attribute("No source location set on the link"))?;
    let target = non_empty(link.target.and_then(|target| target.location))
        .ok_or_else(|| Error::attribute("No target location set on the link"))?;

    let _ = input
        .attributes
        .insert(OCCI_CORE_SOURCE.into(), Value::String(source));
    let _ = input
        .attributes
        .insert(OCCI_CORE_TARGET.into(), Value::String(target));

    Ok(input)
}

fn mixin_tag_input(tag: WireMixinTag) -> Result<InputData> {
    if tag.attributes.as_ref().is_some_and(|attributes| !attributes.is_empty()) {
        return Err(Error::attribute(
            "A mixin tag must not declare any attribute",
        ));
    }

    let (Some(term), Some(scheme), Some(location)) = (
        non_empty(tag.term),
        non_empty(tag.scheme),
        non_empty(tag.location),
    ) else {
        return Err(Error::category(
            "A mixin tag requires a term, a scheme, and a location",
        ));
    };

    Ok(InputData {
        mixin_tag: Some(CategoryId::new(&scheme, &term)),
        mixin_tag_title: tag.title,
        location: Some(location),
        ..InputData::default()
    })
}

fn action_input(action: WireAction) -> InputData {
    if action.action.is_none() {
        debug!("Json action invocation without an action identifier");
    }

    InputData {
        action: action.action.map(CategoryId::from),
        attributes: action.attributes.unwrap_or_default(),
        ..InputData::default()
    }
}

// Fills the fields which are shared by resources and links.
fn entity_input(
    attributes: Option<AttributeMap>,
    id: Option<String>,
    title: Option<String>,
    summary: Option<String>,
    mixins: Option<Vec<String>>,
) -> InputData {
    let mut input = InputData {
        attributes: attributes.unwrap_or_default(),
        ..InputData::default()
    };

    if let Some(id) = non_empty(id) {
        input.entity_id = Some(strip_id_prefix(&id).into());
        let _ = input
            .attributes
            .insert(OCCI_CORE_ID.into(), Value::String(prefixed_id(&id)));
    }

    if let Some(title) = non_empty(title) {
        let _ = input
            .attributes
            .insert(OCCI_CORE_TITLE.into(), Value::String(title));
    }

    if let Some(summary) = non_empty(summary) {
        let _ = input
            .attributes
            .insert(OCCI_CORE_SUMMARY.into(), Value::String(summary));
    }

    input.mixins = mixins
        .unwrap_or_default()
        .into_iter()
        .map(CategoryId::from)
        .collect();

    input
}

fn required_kind(kind: Option<String>, entity: &str, input: &InputData) -> Result<CategoryId> {
    non_empty(kind).map(CategoryId::from).ok_or_else(|| {
        Error::category(format!(
            "Kind is not defined for the {entity} {}",
            input.entity_id.as_deref().unwrap_or("without identifier")
        ))
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
