use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::DefaultHashBuilder;

use indexmap::set::{IndexSet, IntoIter, Iter};

use serde::{Deserialize, Serialize};

use crate::attributes::AttributeMap;
use crate::category::CategoryId;
use crate::macros::set;

set! {
  /// A collection of mixin identifiers.
  ///
  /// Two collections are equal when they hold the same identifiers,
  /// regardless of the insertion order.
  #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
  pub struct Mixins(IndexSet<CategoryId, DefaultHashBuilder>);
}

/// A decoded unit of work, independent of the wire format it came from.
///
/// A structured request may decode into several [`InputData`], one per
/// declared resource, link, mixin tag, or action invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputData {
    /// Kind of the declared resource or link.
    pub kind: Option<CategoryId>,
    /// Mixins applied to the declared resource or link.
    pub mixins: Mixins,
    /// Identifier of a user-defined mixin tag.
    pub mixin_tag: Option<CategoryId>,
    /// Title of the user-defined mixin tag.
    pub mixin_tag_title: Option<String>,
    /// Action to invoke.
    pub action: Option<CategoryId>,
    /// Attribute values.
    pub attributes: AttributeMap,
    /// Entity identifier, without the `urn:uuid:` prefix.
    pub entity_id: Option<String>,
    /// Location path.
    pub location: Option<String>,
    /// Additional location paths, declared through headers.
    pub extra_locations: Vec<String>,
}

impl InputData {
    /// Creates an empty [`InputData`].
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field has been filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.mixins.is_empty()
            && self.mixin_tag.is_none()
            && self.mixin_tag_title.is_none()
            && self.action.is_none()
            && self.attributes.is_empty()
            && self.entity_id.is_none()
            && self.location.is_none()
            && self.extra_locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::category::CategoryId;

    use super::{InputData, Mixins};

    #[test]
    fn mixins_ignore_order() {
        let first = Mixins::new()
            .insert(CategoryId::from("http://x#a"))
            .insert(CategoryId::from("http://x#b"));
        let second = Mixins::new()
            .insert(CategoryId::from("http://x#b"))
            .insert(CategoryId::from("http://x#a"))
            .insert(CategoryId::from("http://x#a"));

        assert_eq!(first, second);
        assert_eq!(second.len(), 2);
        assert!(first.contains(&CategoryId::from("http://x#b")));
    }

    #[test]
    fn empty_input() {
        let mut input = InputData::new();
        assert!(input.is_empty());

        input.mixins.add(CategoryId::from("http://x#a"));
        assert!(!input.is_empty());
    }
}
