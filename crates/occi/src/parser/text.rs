use alloc::string::ToString;

use log::debug;

use serde_json::Value;

use crate::attributes::{OCCI_CORE_ID, strip_id_prefix};
use crate::category::{CategoryClass, CategoryDeclaration};
use crate::input::InputData;
use crate::response::{CATEGORY, X_OCCI_ATTRIBUTE, X_OCCI_LOCATION};

use super::{split_unquoted, unquote};

/// Parses the headers of a `text/occi` request into an [`InputData`].
///
/// Header names are compared ignoring their case. Headers other than
/// `Category`, `X-OCCI-Attribute`, and `X-OCCI-Location` are ignored, as
/// well as any malformed declaration.
///
/// A request without a kind is not rejected here. Whether a kind is
/// needed depends on the operation the request is applied to.
pub fn parse_headers<'a, I>(headers: I) -> InputData
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut input = InputData::new();

    for (name, value) in headers {
        if name.eq_ignore_ascii_case(CATEGORY) {
            parse_categories(&mut input, value);
        } else if name.eq_ignore_ascii_case(X_OCCI_ATTRIBUTE) {
            parse_attributes(&mut input, value);
        } else if name.eq_ignore_ascii_case(X_OCCI_LOCATION) {
            input.extra_locations.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|location| !location.is_empty())
                    .map(ToString::to_string),
            );
        }
    }

    input
}

fn parse_categories(input: &mut InputData, value: &str) {
    for text in split_unquoted(value, ',') {
        if text.trim().is_empty() {
            continue;
        }

        let Some(declaration) = CategoryDeclaration::parse(text) else {
            debug!("Skipping malformed category declaration `{}`", text.trim());
            continue;
        };

        let id = declaration.id();
        match declaration.class {
            CategoryClass::Kind => input.kind = Some(id),
            CategoryClass::Action => input.action = Some(id),
            CategoryClass::Mixin => match declaration.location {
                Some(location) => {
                    input.mixin_tag = Some(id);
                    input.location = Some(location);
                    input.mixin_tag_title = declaration.title;
                }
                None => input.mixins.add(id),
            },
        }
    }
}

fn parse_attributes(input: &mut InputData, value: &str) {
    for text in split_unquoted(value, ',') {
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        let Some((name, value)) = text.split_once('=') else {
            debug!("Skipping attribute declaration without a value `{text}`");
            continue;
        };

        let name = name.trim();
        if name.is_empty() {
            debug!("Skipping attribute declaration without a name `{text}`");
            continue;
        }

        let value = unquote(value);
        if name == OCCI_CORE_ID {
            input.entity_id = Some(strip_id_prefix(&value).into());
        }
        let _ = input
            .attributes
            .insert(name.into(), Value::String(value.into_owned()));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use serde_json::json;

    use crate::category::CategoryId;
    use crate::fixtures::{INFRASTRUCTURE, TAGS};

    use super::parse_headers;

    #[test]
    fn kind_declaration() {
        let input = parse_headers([(
            "Category",
            r#"compute; scheme="http://schemas.ogf.org/occi/infrastructure#"; class="kind""#,
        )]);

        assert_eq!(
            input.kind,
            Some(CategoryId::from(
                "http://schemas.ogf.org/occi/infrastructure#compute"
            ))
        );
        assert!(input.mixins.is_empty());
        assert!(input.attributes.is_empty());
    }

    #[test]
    fn several_categories() {
        let input = parse_headers([
            (
                "category",
                r#"compute; scheme="http://schemas.ogf.org/occi/infrastructure#"; class="kind", os_tpl; scheme="http://schemas.ogf.org/occi/infrastructure#"; class="mixin""#,
            ),
            (
                "CATEGORY",
                r#"resource_tpl; scheme="http://schemas.ogf.org/occi/infrastructure#"; class="mixin""#,
            ),
            (
                "Category",
                r#"start; scheme="http://schemas.ogf.org/occi/infrastructure/compute/action#"; class="action""#,
            ),
        ]);

        assert_eq!(
            input.kind,
            Some(CategoryId::new(INFRASTRUCTURE, "compute"))
        );
        assert_eq!(input.mixins.len(), 2);
        assert!(
            input
                .mixins
                .contains(&CategoryId::new(INFRASTRUCTURE, "resource_tpl"))
        );
        assert_eq!(
            input.action,
            Some(CategoryId::from(
                "http://schemas.ogf.org/occi/infrastructure/compute/action#start"
            ))
        );
    }

    #[test]
    fn last_kind_wins() {
        let input = parse_headers([
            (
                "Category",
                r#"compute; scheme="http://schemas.ogf.org/occi/infrastructure#"; class="kind""#,
            ),
            (
                "Category",
                r#"network; scheme="http://schemas.ogf.org/occi/infrastructure#"; class="kind""#,
            ),
        ]);

        assert_eq!(
            input.kind,
            Some(CategoryId::new(INFRASTRUCTURE, "network"))
        );
    }

    #[test]
    fn mixin_tag_declaration() {
        let input = parse_headers([(
            "Category",
            r#"my_stuff; scheme="http://example.com/tags#"; class="mixin"; location="/my_stuff/"; title="Mine, all mine""#,
        )]);

        assert_eq!(input.mixin_tag, Some(CategoryId::new(TAGS, "my_stuff")));
        assert_eq!(input.location.as_deref(), Some("/my_stuff/"));
        assert_eq!(input.mixin_tag_title.as_deref(), Some("Mine, all mine"));
        assert!(input.mixins.is_empty());
    }

    #[test]
    fn malformed_categories_are_skipped() {
        let input = parse_headers([(
            "Category",
            r#"broken; class="kind", compute; scheme="http://schemas.ogf.org/occi/infrastructure#"; class="kind", ; "#,
        )]);

        assert_eq!(
            input.kind,
            Some(CategoryId::new(INFRASTRUCTURE, "compute"))
        );
    }

    #[test]
    fn attributes() {
        let input = parse_headers([
            (
                "X-OCCI-Attribute",
                r#"occi.core.title="vm1", occi.compute.cores=2"#,
            ),
            (
                "x-occi-attribute",
                r#"occi.core.summary="a=b, c", broken, occi.compute.hostname = "vm1.example.com""#,
            ),
            ("X-OCCI-Attribute", r#"occi.core.id="urn:uuid:1234""#),
        ]);

        assert_eq!(input.attributes.len(), 5);
        assert_eq!(input.attributes["occi.core.title"], json!("vm1"));
        assert_eq!(input.attributes["occi.compute.cores"], json!("2"));
        assert_eq!(input.attributes["occi.core.summary"], json!("a=b, c"));
        assert_eq!(
            input.attributes["occi.compute.hostname"],
            json!("vm1.example.com")
        );
        assert_eq!(input.attributes["occi.core.id"], json!("urn:uuid:1234"));
        assert_eq!(input.entity_id.as_deref(), Some("1234"));
    }

    #[test]
    fn locations() {
        let input = parse_headers([
            ("X-OCCI-Location", "/compute/1, /compute/2"),
            ("Content-Type", "text/occi"),
            ("X-OCCI-Location", " ,/network/3"),
        ]);

        assert_eq!(
            input.extra_locations,
            ["/compute/1", "/compute/2", "/network/3"]
        );
        assert_eq!(input.location, None);
    }

    #[test]
    fn no_headers() {
        let input = parse_headers(Vec::<(&str, &str)>::new());
        assert!(input.is_empty());
    }
}
