use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::Serialize;

use crate::category::Category;
use crate::error::{Error, Result};
use crate::response::{Format, Response, Status};
use crate::wire::{
    LocationsEnvelope, MessageEnvelope, WireCollection, WireEndpoint, WireLink, WireResource,
};

use super::{EndpointView, EntityView};

const EMPTY_OBJECT_MESSAGE: &str = "{ }";

const INTERNAL_ERROR: &[u8] = br#"{"message":"Internal error","status":500}"#;

pub(super) fn message(format: Format, status: Status, message: &str) -> Result<Response> {
    if message == EMPTY_OBJECT_MESSAGE {
        return Ok(Response::new(status)
            .content_type(format.content_type())
            .body(EMPTY_OBJECT_MESSAGE.as_bytes()));
    }

    let message = if status.is_ok() { "ok" } else { message };
    to_response(
        format,
        status,
        &MessageEnvelope {
            message,
            status: status.code(),
        },
    )
}

pub(super) fn internal_error(format: Format) -> Response {
    Response::new(Status::INTERNAL_SERVER_ERROR)
        .content_type(format.content_type())
        .body(INTERNAL_ERROR)
}

// A single entity is rendered as a bare resource or link, several entities
// as a collection.
pub(super) fn entities(format: Format, views: &[EntityView], status: Status) -> Result<Response> {
    match views {
        [view] if view.is_link() => to_response(format, status, &link(view)),
        [view] => to_response(format, status, &resource(view)),
        views => {
            let (links, resources): (Vec<&EntityView>, Vec<&EntityView>) =
                views.iter().partition(|view| view.is_link());
            let collection = WireCollection {
                resources: (!resources.is_empty())
                    .then(|| resources.into_iter().map(resource).collect()),
                links: (!links.is_empty()).then(|| links.into_iter().map(link).collect()),
                ..WireCollection::default()
            };
            to_response(format, status, &collection)
        }
    }
}

pub(super) fn locations(format: Format, locations: &[&str], status: Status) -> Result<Response> {
    to_response(
        format,
        status,
        &LocationsEnvelope {
            locations: locations.iter().map(ToString::to_string).collect(),
        },
    )
}

fn to_response<T: Serialize>(format: Format, status: Status, value: &T) -> Result<Response> {
    serde_json::to_vec(value)
        .map(|body| {
            Response::new(status)
                .content_type(format.content_type())
                .body(body)
        })
        .map_err(|e| Error::response(format!("Json serialization failed: {e}")))
}

fn resource(view: &EntityView) -> WireResource {
    WireResource {
        id: Some(view.id.clone()),
        kind: Some(view.kind.id().into_string()),
        title: view.title.clone(),
        summary: view.summary.clone(),
        mixins: Some(identifiers(&view.mixins)),
        attributes: Some(view.attributes.clone()),
        actions: Some(identifiers(&view.actions)),
        links: (!view.links.is_empty()).then(|| view.links.iter().map(link).collect()),
        location: view.location.clone(),
    }
}

fn link(view: &EntityView) -> WireLink {
    WireLink {
        id: Some(view.id.clone()),
        kind: Some(view.kind.id().into_string()),
        title: view.title.clone(),
        summary: view.summary.clone(),
        mixins: Some(identifiers(&view.mixins)),
        attributes: Some(view.attributes.clone()),
        actions: Some(identifiers(&view.actions)),
        source: view.source.as_ref().map(endpoint),
        target: view.target.as_ref().map(endpoint),
        location: view.location.clone(),
    }
}

fn endpoint(view: &EndpointView) -> WireEndpoint {
    WireEndpoint {
        location: Some(absolute_path(&view.location)),
        kind: view.kind.as_ref().map(ToString::to_string),
    }
}

fn identifiers(categories: &[Category]) -> Vec<String> {
    categories
        .iter()
        .map(|category| category.id().into_string())
        .collect()
}

fn absolute_path(location: &str) -> String {
    if location.starts_with('/') {
        location.into()
    } else {
        format!("/{location}")
    }
}
