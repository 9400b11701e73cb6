use alloc::format;
use alloc::string::{String, ToString};

use crate::attributes::{
    OCCI_CORE_ID, OCCI_CORE_SOURCE, OCCI_CORE_SUMMARY, OCCI_CORE_TARGET, OCCI_CORE_TITLE,
    format_attribute,
};
use crate::category::{CategoryClass, CategoryDeclaration};
use crate::config::RenderConfig;
use crate::parser::escape_quoted;
use crate::response::{
    CATEGORY, Format, LINK, Response, Status, X_OCCI_ATTRIBUTE, X_OCCI_LOCATION,
};

use super::EntityView;

const OK_BODY: &str = "ok";

pub(super) fn message(status: Status, message: &str) -> Response {
    let body = if status.is_ok() {
        OK_BODY.into()
    } else {
        String::from(message)
    };
    Response::new(status)
        .content_type(Format::TextOcci.content_type())
        .body(body.into_bytes())
}

// At most `max_header_entities` entities are rendered.
pub(super) fn entities(config: &RenderConfig, views: &[EntityView], status: Status) -> Response {
    let mut response = ok_response(status);
    for view in views.iter().take(config.header_entities()) {
        entity_headers(&mut response, config, view);
    }
    response
}

pub(super) fn locations(config: &RenderConfig, locations: &[&str], status: Status) -> Response {
    let mut response = ok_response(status);
    for location in locations {
        response.push_header(X_OCCI_LOCATION, config.absolute_location(location));
    }
    response
}

fn ok_response(status: Status) -> Response {
    Response::new(status)
        .content_type(Format::TextOcci.content_type())
        .body(OK_BODY.as_bytes())
}

fn entity_headers(response: &mut Response, config: &RenderConfig, view: &EntityView) {
    response.push_header(
        CATEGORY,
        CategoryDeclaration::new(&view.kind.term, &view.kind.scheme, CategoryClass::Kind)
            .to_string(),
    );
    for mixin in &view.mixins {
        response.push_header(
            CATEGORY,
            CategoryDeclaration::new(&mixin.term, &mixin.scheme, CategoryClass::Mixin)
                .to_string(),
        );
    }

    let mut attribute = |name: &str, value: &str| {
        response.push_header(
            X_OCCI_ATTRIBUTE,
            format!("{name}=\"{}\"", escape_quoted(value)),
        );
    };
    attribute(OCCI_CORE_ID, &view.id);
    if let Some(source) = &view.source {
        attribute(OCCI_CORE_SOURCE, &source.location);
    }
    if let Some(target) = &view.target {
        attribute(OCCI_CORE_TARGET, &target.location);
    }
    if let Some(title) = &view.title {
        attribute(OCCI_CORE_TITLE, title);
    }
    if let Some(summary) = &view.summary {
        attribute(OCCI_CORE_SUMMARY, summary);
    }
    for (name, value) in &view.attributes {
        response.push_header(X_OCCI_ATTRIBUTE, format_attribute(name, value));
    }

    let Some(location) = &view.location else {
        return;
    };
    let location = config.absolute_location(location);
    for action in &view.actions {
        response.push_header(
            LINK,
            format!(
                "<{location}>; rel=\"{}\"; title=\"{}\"",
                action.id(),
                action.term
            ),
        );
    }
    response.push_header(X_OCCI_LOCATION, location);
}
