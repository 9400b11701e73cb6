use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::category::{CategoryClass, CategoryDeclaration};
use crate::config::RenderConfig;
use crate::response::{CATEGORY, Format, Response, Status};

use super::{AttributeSchemas, DiscoveryDocument};

const BODY_PREFIX: &str = "Category: ";

// Declarations move into the body once their overall size exceeds the
// header budget.
pub(super) fn render(config: &RenderConfig, document: &DiscoveryDocument) -> Response {
    let declarations = declarations(document);
    let size: usize = declarations.iter().map(String::len).sum();

    let mut response = Response::new(Status::OK).content_type(Format::TextOcci.content_type());
    if size > config.budget() {
        let mut body = String::with_capacity(size + declarations.len() * (BODY_PREFIX.len() + 1));
        for declaration in &declarations {
            body.push_str(BODY_PREFIX);
            body.push_str(declaration);
            body.push('\n');
        }
        return response.body(body.into_bytes());
    }

    for declaration in declarations {
        response.push_header(CATEGORY, declaration);
    }
    response.body("ok".as_bytes())
}

fn declarations(document: &DiscoveryDocument) -> Vec<String> {
    let mut declarations = Vec::new();

    for group in &document.model {
        for kind in &group.kinds {
            let declaration =
                CategoryDeclaration::new(&kind.term, &kind.scheme, CategoryClass::Kind)
                    .title(kind.title.clone().unwrap_or_default())
                    .rel(kind.parent.clone().unwrap_or_default())
                    .location(kind.location.clone().unwrap_or_default())
                    .attributes(attribute_names(&kind.attributes))
                    .actions(kind.actions.join(" "));
            declarations.push(declaration.to_string());
        }

        for mixin in &group.mixins {
            let declaration =
                CategoryDeclaration::new(&mixin.term, &mixin.scheme, CategoryClass::Mixin)
                    .title(mixin.title.clone().unwrap_or_default())
                    .rel(mixin.depends.join(" "))
                    .location(mixin.location.clone().unwrap_or_default())
                    .attributes(attribute_names(&mixin.attributes))
                    .actions(mixin.actions.join(" "));
            declarations.push(declaration.to_string());
        }

        for action in &group.actions {
            let declaration =
                CategoryDeclaration::new(&action.term, &action.scheme, CategoryClass::Action)
                    .title(action.title.clone().unwrap_or_default())
                    .attributes(attribute_names(&action.attributes));
            declarations.push(declaration.to_string());
        }
    }

    declarations
}

// Names are followed by `{immutable required}` markers, when they apply.
fn attribute_names(attributes: &AttributeSchemas) -> String {
    attributes
        .iter()
        .map(|(name, schema)| {
            let markers: Vec<&str> = [
                (!schema.mutable).then_some("immutable"),
                schema.required.then_some("required"),
            ]
            .into_iter()
            .flatten()
            .collect();
            if markers.is_empty() {
                name.clone()
            } else {
                format!("{name}{{{}}}", markers.join(" "))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
