use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeType;
use crate::category::{Category, CategoryId};

/// An attribute definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Free-text type name, such as `string`, `integer`, or `list`.
    pub type_name: Option<String>,
    /// Whether the attribute can be modified after creation.
    pub mutable: bool,
    /// Whether the attribute must be supplied.
    pub required: bool,
    /// Attribute description.
    pub description: Option<String>,
    /// Default value in its text form.
    pub default: Option<String>,
}

impl Attribute {
    /// Creates a mutable and optional [`Attribute`] of an unspecified type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            mutable: true,
            required: false,
            description: None,
            default: None,
        }
    }

    /// Sets the type name.
    #[must_use]
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Marks the attribute as immutable.
    #[must_use]
    #[inline]
    pub fn immutable(mut self) -> Self {
        self.mutable = false;
        self
    }

    /// Marks the attribute as required.
    #[must_use]
    #[inline]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Returns the [`AttributeType`] classifying the type name.
    #[must_use]
    pub fn attribute_type(&self) -> AttributeType {
        AttributeType::from_type_name(self.type_name.as_deref())
    }
}

/// An action definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Action category.
    pub category: Category,
    /// Action title.
    pub title: Option<String>,
    /// Action parameters.
    pub attributes: Vec<Attribute>,
}

impl Action {
    /// Creates an [`Action`] without a title and parameters.
    #[must_use]
    pub fn new(scheme: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            category: Category::new(scheme, term),
            title: None,
            attributes: Vec::new(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a parameter.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Returns the action [`CategoryId`].
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.category.id()
    }
}

/// A kind definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kind {
    /// Kind category.
    pub category: Category,
    /// Kind title.
    pub title: Option<String>,
    /// Location path of the kind collection.
    pub location: Option<String>,
    /// Parent kind.
    pub parent: Option<CategoryId>,
    /// Attribute definitions.
    pub attributes: Vec<Attribute>,
    /// Invokable actions.
    pub actions: Vec<Action>,
}

impl Kind {
    /// Creates a [`Kind`] without a title, a location, and a parent.
    #[must_use]
    pub fn new(scheme: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            category: Category::new(scheme, term),
            title: None,
            location: None,
            parent: None,
            attributes: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the parent kind.
    #[must_use]
    pub fn parent(mut self, parent: impl Into<CategoryId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Adds an attribute definition.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds an action.
    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Returns the kind [`CategoryId`].
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.category.id()
    }
}

/// A mixin definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mixin {
    /// Mixin category.
    pub category: Category,
    /// Mixin title.
    pub title: Option<String>,
    /// Location path of the mixin collection.
    pub location: Option<String>,
    /// Mixins this mixin depends on.
    pub depends: Vec<CategoryId>,
    /// Attribute definitions.
    pub attributes: Vec<Attribute>,
    /// Invokable actions.
    pub actions: Vec<Action>,
}

impl Mixin {
    /// Creates a [`Mixin`] without a title, a location, and dependencies.
    #[must_use]
    pub fn new(scheme: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            category: Category::new(scheme, term),
            title: None,
            location: None,
            depends: Vec::new(),
            attributes: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Adds a dependency.
    #[must_use]
    pub fn depends(mut self, mixin: impl Into<CategoryId>) -> Self {
        self.depends.push(mixin.into());
        self
    }

    /// Adds an attribute definition.
    #[must_use]
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Adds an action.
    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Returns the mixin [`CategoryId`].
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.category.id()
    }
}
