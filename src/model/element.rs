// src/model/element.rs
//! Nodes of the code hierarchy: assemblies, namespaces, types, members.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::relationship::Relationship;

/// Stable identifier of a code element. Elements are stored in a central
/// arena and reference each other by id, never by pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of a code element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    Assembly,
    Namespace,
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
    Record,
    Method,
    Property,
    Field,
    Event,
    Other,
}

impl ElementType {
    /// Returns true for type-level elements (class, interface, struct,
    /// enum, delegate, record).
    #[must_use]
    pub fn is_type(self) -> bool {
        matches!(
            self,
            Self::Class
                | Self::Interface
                | Self::Struct
                | Self::Enum
                | Self::Delegate
                | Self::Record
        )
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Assembly => "ASSEMBLY",
            Self::Namespace => "NAMESPACE",
            Self::Class => "CLASS",
            Self::Interface => "INTERFACE",
            Self::Struct => "STRUCT",
            Self::Enum => "ENUM",
            Self::Delegate => "DELEGATE",
            Self::Record => "RECORD",
            Self::Method => "METHOD",
            Self::Property => "PROPERTY",
            Self::Field => "FIELD",
            Self::Event => "EVENT",
            Self::Other => "OTHER",
        }
    }
}

/// A file/line/column position in the analyzed sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self { file: file.into(), line, column }
    }
}

/// A node in the code hierarchy.
///
/// Parent and children are stored as ids into the owning [`CodeGraph`]
/// arena. The parent chain is a strict tree: at most one parent per
/// element, terminating at a root with no parent.
///
/// [`CodeGraph`]: super::graph::CodeGraph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeElement {
    pub id: ElementId,
    pub element_type: ElementType,
    pub name: String,
    pub full_name: String,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    /// Outgoing edges; every relationship's source id equals `self.id`.
    pub relationships: Vec<Relationship>,
    pub attributes: BTreeSet<String>,
    pub locations: Vec<SourceLocation>,
    /// True for elements outside the analyzed codebase (framework types
    /// reached via a `Uses` edge, for example).
    pub is_external: bool,
}

impl CodeElement {
    #[must_use]
    pub fn new(
        id: impl Into<ElementId>,
        element_type: ElementType,
        name: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            element_type,
            name: name.into(),
            full_name: full_name.into(),
            parent: None,
            children: Vec::new(),
            relationships: Vec::new(),
            attributes: BTreeSet::new(),
            locations: Vec::new(),
            is_external: false,
        }
    }

    /// Sets the parent id. The graph wires the matching child link on insert.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<ElementId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub fn external(mut self) -> Self {
        self.is_external = true;
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.locations.push(location);
        self
    }
}
