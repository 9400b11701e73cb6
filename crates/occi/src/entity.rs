use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::DefaultHashBuilder;

use indexmap::IndexMap;

use serde_json::Number;

use crate::attributes::{AttributeType, OCCI_CORE_SUMMARY, OCCI_CORE_TITLE};
use crate::category::{Category, CategoryId};

/// Attribute states of an entity, stored as raw text values.
pub type AttributeStates = IndexMap<String, String, DefaultHashBuilder>;

/// The endpoints of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Identifier of the source entity.
    pub source: String,
    /// Identifier of the target entity.
    pub target: String,
}

/// An entity instance, either a resource or a link.
///
/// Titles and summaries are stored as `occi.core.title` and
/// `occi.core.summary` attribute states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity identifier, without the `urn:uuid:` prefix.
    pub id: String,
    /// Entity kind.
    pub kind: Category,
    /// Actions declared by the entity kind.
    pub actions: Vec<Category>,
    /// Mixins applied to the entity.
    pub mixins: Vec<Category>,
    /// Attribute states.
    pub attributes: AttributeStates,
    /// Links of a resource.
    pub links: Vec<Entity>,
    /// Endpoints of a link. Always [`None`] for resources.
    pub endpoints: Option<Endpoints>,
}

impl Entity {
    /// Creates a resource.
    #[must_use]
    pub fn resource(id: impl Into<String>, kind: Category) -> Self {
        Self {
            id: id.into(),
            kind,
            actions: Vec::new(),
            mixins: Vec::new(),
            attributes: AttributeStates::default(),
            links: Vec::new(),
            endpoints: None,
        }
    }

    /// Creates a link between a source and a target entity.
    #[must_use]
    pub fn link(
        id: impl Into<String>,
        kind: Category,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        let mut link = Self::resource(id, kind);
        link.endpoints = Some(Endpoints {
            source: source.into(),
            target: target.into(),
        });
        link
    }

    /// Adds an action declared by the entity kind.
    #[must_use]
    pub fn action(mut self, action: Category) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a mixin.
    #[must_use]
    pub fn mixin(mut self, mixin: Category) -> Self {
        self.mixins.push(mixin);
        self
    }

    /// Sets an attribute state.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let _ = self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn title(self, title: impl Into<String>) -> Self {
        self.attribute(OCCI_CORE_TITLE, title)
    }

    /// Sets the summary.
    #[must_use]
    pub fn summary(self, summary: impl Into<String>) -> Self {
        self.attribute(OCCI_CORE_SUMMARY, summary)
    }

    /// Adds a link to a resource.
    #[must_use]
    pub fn with_link(mut self, link: Entity) -> Self {
        self.links.push(link);
        self
    }

    /// Whether the entity is a link.
    #[must_use]
    #[inline]
    pub const fn is_link(&self) -> bool {
        self.endpoints.is_some()
    }

    /// Returns the title, if any.
    #[must_use]
    pub fn title_text(&self) -> Option<&str> {
        self.non_empty_attribute(OCCI_CORE_TITLE)
    }

    /// Returns the summary, if any.
    #[must_use]
    pub fn summary_text(&self) -> Option<&str> {
        self.non_empty_attribute(OCCI_CORE_SUMMARY)
    }

    fn non_empty_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// The domain model collaborator.
///
/// The model store owns the live kinds, mixins, and entities. The codec only
/// reads from it, so an implementation is expected to be a cheap lookup.
pub trait Model {
    /// Returns the location path of an entity.
    fn location_of(&self, entity_id: &str) -> Option<String>;

    /// Returns the kind of an entity.
    fn kind_of(&self, entity_id: &str) -> Option<CategoryId>;

    /// Returns the declared type of an entity attribute.
    fn attribute_type(&self, _entity: &Entity, _name: &str) -> Option<AttributeType> {
        None
    }

    /// Returns the typed string value of an entity attribute.
    fn attribute_as_string(&self, _entity: &Entity, _name: &str) -> Option<String> {
        None
    }

    /// Returns the typed numeric value of an entity attribute.
    fn attribute_as_number(&self, _entity: &Entity, _name: &str) -> Option<Number> {
        None
    }

    /// Returns the identifier of the extension owning a category.
    fn extension_of(&self, category: &CategoryId) -> Option<String>;

    /// Whether a category is a mixin tag defined by the given user.
    fn is_user_mixin_tag(&self, _user: &str, _category: &CategoryId) -> bool {
        false
    }

    /// Returns the location path of a category collection.
    fn category_location(&self, _category: &CategoryId) -> Option<String> {
        None
    }
}

impl<M: Model + ?Sized> Model for &M {
    fn location_of(&self, entity_id: &str) -> Option<String> {
        (**self).location_of(entity_id)
    }

    fn kind_of(&self, entity_id: &str) -> Option<CategoryId> {
        (**self).kind_of(entity_id)
    }

    fn attribute_type(&self, entity: &Entity, name: &str) -> Option<AttributeType> {
        (**self).attribute_type(entity, name)
    }

    fn attribute_as_string(&self, entity: &Entity, name: &str) -> Option<String> {
        (**self).attribute_as_string(entity, name)
    }

    fn attribute_as_number(&self, entity: &Entity, name: &str) -> Option<Number> {
        (**self).attribute_as_number(entity, name)
    }

    fn extension_of(&self, category: &CategoryId) -> Option<String> {
        (**self).extension_of(category)
    }

    fn is_user_mixin_tag(&self, user: &str, category: &CategoryId) -> bool {
        (**self).is_user_mixin_tag(user, category)
    }

    fn category_location(&self, category: &CategoryId) -> Option<String> {
        (**self).category_location(category)
    }
}

#[cfg(test)]
mod tests {
    use crate::category::Category;

    use super::Entity;

    #[test]
    fn resource_builder() {
        let compute = Entity::resource(
            "1",
            Category::new("http://schemas.ogf.org/occi/infrastructure#", "compute"),
        )
        .title("vm1")
        .summary("")
        .attribute("occi.compute.cores", "2");

        assert!(!compute.is_link());
        assert_eq!(compute.title_text(), Some("vm1"));
        assert_eq!(compute.summary_text(), None);
        assert_eq!(compute.attributes.len(), 3);
    }

    #[test]
    fn link_builder() {
        let link = Entity::link(
            "l1",
            Category::new("http://schemas.ogf.org/occi/infrastructure#", "networkinterface"),
            "c1",
            "n1",
        );

        assert!(link.is_link());
        let endpoints = link.endpoints.unwrap();
        assert_eq!(endpoints.source, "c1");
        assert_eq!(endpoints.target, "n1");
    }
}
