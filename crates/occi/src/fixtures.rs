use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use serde_json::Number;

use crate::attributes::{AttributeType, NumberKind};
use crate::category::{Category, CategoryId};
use crate::entity::{Entity, Model};
use crate::schema::{Action, Attribute, Kind, Mixin};

pub(crate) const CORE: &str = "http://schemas.ogf.org/occi/core#";
pub(crate) const INFRASTRUCTURE: &str = "http://schemas.ogf.org/occi/infrastructure#";
pub(crate) const COMPUTE_ACTION: &str = "http://schemas.ogf.org/occi/infrastructure/compute/action#";
pub(crate) const TAGS: &str = "http://example.com/tags#";
pub(crate) const UNKNOWN: &str = "http://unknown.org/extension#";

const CORE_EXTENSION: &str = "http://schemas.ogf.org/occi/core";
const INFRASTRUCTURE_EXTENSION: &str = "http://schemas.ogf.org/occi/infrastructure";

pub(crate) const USER: &str = "alice";

// A read-only model store holding a compute `1`, a network `2`, and a
// network interface `l1` linking them.
pub(crate) struct TestModel;

impl Model for TestModel {
    fn location_of(&self, entity_id: &str) -> Option<String> {
        match entity_id {
            "1" => Some("compute/1".into()),
            "2" => Some("/network/2".into()),
            "l1" => Some("/networkinterface/l1".into()),
            _ => None,
        }
    }

    fn kind_of(&self, entity_id: &str) -> Option<CategoryId> {
        let term = match entity_id {
            "1" => "compute",
            "2" => "network",
            "l1" => "networkinterface",
            _ => return None,
        };
        Some(CategoryId::new(INFRASTRUCTURE, term))
    }

    fn attribute_type(&self, _entity: &Entity, name: &str) -> Option<AttributeType> {
        match name {
            "occi.compute.cores" | "occi.network.vlan" => {
                Some(AttributeType::Number(NumberKind::Integer))
            }
            "occi.compute.memory" => Some(AttributeType::Number(NumberKind::Float)),
            "occi.compute.hostname" | "occi.compute.state" => Some(AttributeType::String),
            "occi.compute.ephemeral" => Some(AttributeType::Boolean),
            _ => None,
        }
    }

    fn attribute_as_string(&self, _entity: &Entity, name: &str) -> Option<String> {
        (name == "occi.compute.state").then(|| "active".into())
    }

    fn attribute_as_number(&self, _entity: &Entity, name: &str) -> Option<Number> {
        (name == "occi.network.vlan").then(|| Number::from(12))
    }

    fn extension_of(&self, category: &CategoryId) -> Option<String> {
        let id = category.as_str();
        if id.starts_with(INFRASTRUCTURE_EXTENSION) {
            Some(INFRASTRUCTURE_EXTENSION.into())
        } else if id.starts_with(CORE_EXTENSION) {
            Some(CORE_EXTENSION.into())
        } else {
            None
        }
    }

    fn is_user_mixin_tag(&self, user: &str, category: &CategoryId) -> bool {
        user == USER && category.as_str().starts_with(TAGS)
    }

    fn category_location(&self, category: &CategoryId) -> Option<String> {
        let (_, term) = category.as_str().rsplit_once('#')?;
        Some(format!("/{term}/"))
    }
}

pub(crate) fn start_action() -> Action {
    Action::new(COMPUTE_ACTION, "start")
        .title("Start the compute")
        .attribute(Attribute::new("method").type_name("Enum"))
}

pub(crate) fn stop_action() -> Action {
    Action::new(COMPUTE_ACTION, "stop").title("Stop the compute")
}

pub(crate) fn resource_kind() -> Kind {
    Kind::new(CORE, "resource")
        .title("Resource")
        .location("/resource/")
        .attribute(Attribute::new("occi.core.summary").type_name("String"))
}

pub(crate) fn compute_kind() -> Kind {
    Kind::new(INFRASTRUCTURE, "compute")
        .title("Compute Resource")
        .location("/compute/")
        .parent(CategoryId::new(CORE, "resource"))
        .attribute(
            Attribute::new("occi.compute.cores")
                .type_name("Integer")
                .description("Number of CPU cores")
                .default_value("1"),
        )
        .attribute(
            Attribute::new("occi.compute.memory")
                .type_name("Float")
                .default_value("not a number"),
        )
        .attribute(
            Attribute::new("occi.compute.state")
                .type_name("Enum")
                .immutable()
                .required()
                .default_value("inactive"),
        )
        .action(start_action())
        .action(stop_action())
}

pub(crate) fn os_tpl_mixin() -> Mixin {
    Mixin::new(INFRASTRUCTURE, "os_tpl")
        .title("OS Template")
        .depends(CategoryId::new(INFRASTRUCTURE, "resource_tpl"))
        .attribute(
            Attribute::new("occi.os.packages")
                .type_name("List")
                .default_value("[\"openssh\"]"),
        )
        .attribute(
            Attribute::new("occi.os.enabled")
                .type_name("Boolean")
                .default_value("true"),
        )
        .action(start_action())
}

pub(crate) fn user_tag() -> Mixin {
    Mixin::new(TAGS, "my_stuff")
        .title("My stuff")
        .location("/my_stuff/")
}

pub(crate) fn unknown_mixin() -> Mixin {
    Mixin::new(UNKNOWN, "gpu")
}

pub(crate) fn kinds() -> Vec<Kind> {
    vec![resource_kind(), compute_kind()]
}

pub(crate) fn mixins() -> Vec<Mixin> {
    vec![os_tpl_mixin(), user_tag()]
}

pub(crate) fn compute() -> Entity {
    Entity::resource("1", Category::new(INFRASTRUCTURE, "compute"))
        .action(Category::new(COMPUTE_ACTION, "start"))
        .action(Category::new(COMPUTE_ACTION, "stop"))
        .mixin(Category::new(INFRASTRUCTURE, "os_tpl"))
        .title("vm1")
        .attribute("occi.compute.cores", "2")
        .attribute("occi.compute.hostname", "vm1.example.com")
}

pub(crate) fn network_interface() -> Entity {
    Entity::link(
        "l1",
        Category::new(INFRASTRUCTURE, "networkinterface"),
        "1",
        "2",
    )
    .attribute("occi.networkinterface.interface", "eth0")
}
