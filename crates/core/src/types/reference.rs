//! Dual-form entity references.
//!
//! The remote store is inconsistent about how it embeds related entities in a
//! product record: depending on whether the endpoint populated the relation,
//! `colors` and `categories` hold either bare id strings or fully embedded
//! entity objects. Both forms are accepted at the deserialization boundary
//! and normalized through [`Reference::id`] in exactly one place, instead of
//! shape-sniffing at every call site.

use serde::{Deserialize, Serialize};

/// An entity with a typed id.
pub trait Entity {
    /// The id newtype for this entity.
    type Id: core::fmt::Debug + Clone + PartialEq + Eq + core::hash::Hash;

    /// Get this entity's id.
    fn id(&self) -> &Self::Id;
}

/// A reference to an entity, either bare or embedded.
///
/// Deserializes from a JSON string (bare id) or a JSON object (embedded
/// entity); the untagged representation matches what the remote store emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
#[serde(bound(
    serialize = "T: Serialize, T::Id: Serialize",
    deserialize = "T: Deserialize<'de>, T::Id: Deserialize<'de>"
))]
pub enum Reference<T: Entity> {
    /// A bare id, with no entity data attached.
    Id(T::Id),
    /// A fully embedded entity.
    Embedded(T),
}

impl<T: Entity> Reference<T> {
    /// Normalize the reference to its id, whichever form it holds.
    pub fn id(&self) -> &T::Id {
        match self {
            Self::Id(id) => id,
            Self::Embedded(entity) => entity.id(),
        }
    }

    /// The embedded entity, if this reference carries one.
    pub const fn entity(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Embedded(entity) => Some(entity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::catalog::Color;
    use crate::types::id::ColorId;

    #[test]
    fn test_deserialize_bare_id() {
        let reference: Reference<Color> = serde_json::from_str("\"c-1\"").unwrap();
        assert_eq!(reference.id(), &ColorId::new("c-1"));
        assert!(reference.entity().is_none());
    }

    #[test]
    fn test_deserialize_embedded_entity() {
        let json = r#"{"_id": "c-2", "name": "Rosa"}"#;
        let reference: Reference<Color> = serde_json::from_str(json).unwrap();
        assert_eq!(reference.id(), &ColorId::new("c-2"));
        assert_eq!(reference.entity().map(|c| c.name.as_str()), Some("Rosa"));
    }

    #[test]
    fn test_mixed_sequence_normalizes_uniformly() {
        let json = r#"["c-1", {"_id": "c-2", "name": "Negro"}]"#;
        let references: Vec<Reference<Color>> = serde_json::from_str(json).unwrap();
        let ids: Vec<&ColorId> = references.iter().map(Reference::id).collect();
        assert_eq!(ids, vec![&ColorId::new("c-1"), &ColorId::new("c-2")]);
    }
}
