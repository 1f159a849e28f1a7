// src/model/relationship.rs
//! Typed, directed dependency edges between code elements.

use serde::{Deserialize, Serialize};
use std::ops::BitOr;

use super::element::{ElementId, SourceLocation};

/// Semantic kind of a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    Calls,
    Uses,
    Creates,
    Inherits,
    Implements,
    Overrides,
    /// Event-handler edge to the event it handles. Points in the "wrong"
    /// direction for dependency analysis and is excluded from cycles.
    Handles,
    Invokes,
    UsesAttribute,
}

impl RelationshipType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Calls => "calls",
            Self::Uses => "uses",
            Self::Creates => "creates",
            Self::Inherits => "inherits",
            Self::Implements => "implements",
            Self::Overrides => "overrides",
            Self::Handles => "handles",
            Self::Invokes => "invokes",
            Self::UsesAttribute => "uses-attribute",
        }
    }
}

/// Bit-set of independent edge attributes. `NONE` is the zero value;
/// flags are checked individually via [`RelationshipAttrs::has`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipAttrs(u16);

impl RelationshipAttrs {
    pub const NONE: Self = Self(0);
    pub const INSTANCE_CALL: Self = Self(1);
    pub const METHOD_GROUP: Self = Self(1 << 1);
    pub const EVENT_REGISTRATION: Self = Self(1 << 2);
    pub const EVENT_UNREGISTRATION: Self = Self(1 << 3);

    #[must_use]
    pub fn has(self, flag: Self) -> bool {
        self.0 & flag.0 == flag.0 && flag.0 != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, flag: Self) {
        self.0 |= flag.0;
    }
}

impl BitOr for RelationshipAttrs {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A directed dependency edge. One edge can aggregate multiple call
/// sites, hence the location list.
///
/// The target id may reference an element absent from the graph
/// (an external dependency); algorithms treat that as "no node".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub source: ElementId,
    pub target: ElementId,
    pub relationship_type: RelationshipType,
    pub attrs: RelationshipAttrs,
    pub locations: Vec<SourceLocation>,
}

impl Relationship {
    #[must_use]
    pub fn new(
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relationship_type,
            attrs: RelationshipAttrs::NONE,
            locations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: RelationshipAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.locations.push(location);
        self
    }
}
