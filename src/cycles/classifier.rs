// src/cycles/classifier.rs
//! Edge relevance for cycle analysis.
//!
//! Not every dependency edge should feed the cycle detector. Handler
//! edges point from the handler to the event it handles, which is the
//! inverse of the actual dependency, and member-level implements/overrides
//! edges duplicate the dependency already captured by the declaring type.

use crate::model::{CodeElement, CodeGraph, ElementType, Relationship, RelationshipType};

/// Decides whether an edge participates in cycle detection.
///
/// Pure and stateless. Edges whose endpoints are missing from the graph
/// keep their default relevance; the member-level exclusions need both
/// element types to apply.
#[must_use]
pub fn is_relevant_for_cycle(graph: &CodeGraph, relationship: &Relationship) -> bool {
    if relationship.relationship_type == RelationshipType::Handles {
        return false;
    }

    let (Some(source), Some(target)) = (
        graph.get(&relationship.source),
        graph.get(&relationship.target),
    ) else {
        return true;
    };

    !is_member_level_duplicate(source, target, relationship.relationship_type)
}

fn is_member_level_duplicate(
    source: &CodeElement,
    target: &CodeElement,
    relationship_type: RelationshipType,
) -> bool {
    let method_to_method = source.element_type == ElementType::Method
        && target.element_type == ElementType::Method;
    let property_to_property = source.element_type == ElementType::Property
        && target.element_type == ElementType::Property;

    match relationship_type {
        RelationshipType::Implements => method_to_method || property_to_property,
        RelationshipType::Overrides => method_to_method,
        _ => false,
    }
}
