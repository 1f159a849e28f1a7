// src/model/mod.rs
//! The graph model every engine operates on: a typed hierarchy of code
//! elements plus a flat set of typed dependency edges.

pub mod element;
pub mod graph;
pub mod relationship;

pub use element::{CodeElement, ElementId, ElementType, SourceLocation};
pub use graph::CodeGraph;
pub use relationship::{Relationship, RelationshipAttrs, RelationshipType};
