// src/model/graph.rs
//! The central element arena and its traversal queries.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::element::{CodeElement, ElementId};
use super::relationship::Relationship;

/// The code-structure graph: an arena of elements keyed by id.
///
/// Built once per analysis run by an external parser, then treated as an
/// immutable snapshot by the cycle and rule engines. Iteration order of
/// the arena is not stable across builds; callers requiring determinism
/// must sort.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeGraph {
    nodes: HashMap<ElementId, CodeElement>,
}

impl CodeGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an element, keeping parent/child links mutually consistent
    /// in both arrival orders: the new element is wired into an already
    /// present parent, and already present elements naming the new one as
    /// parent are wired into its child list. Replaces any element with
    /// the same id.
    pub fn insert(&mut self, mut element: CodeElement) {
        if let Some(parent_id) = element.parent.clone() {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                if !parent.children.contains(&element.id) {
                    parent.children.push(element.id.clone());
                }
            }
        }

        let mut early_children: Vec<ElementId> = self
            .nodes
            .values()
            .filter(|e| e.parent.as_ref() == Some(&element.id))
            .map(|e| e.id.clone())
            .collect();
        early_children.sort();
        for child in early_children {
            if !element.children.contains(&child) {
                element.children.push(child);
            }
        }

        self.nodes.insert(element.id.clone(), element);
    }

    /// Attaches an outgoing edge to its source element. Ignored when the
    /// source is absent (the edge would violate edge ownership).
    pub fn add_relationship(&mut self, relationship: Relationship) {
        if let Some(source) = self.nodes.get_mut(&relationship.source) {
            source.relationships.push(relationship);
        }
    }

    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&CodeElement> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn elements(&self) -> impl Iterator<Item = &CodeElement> {
        self.nodes.values()
    }

    /// All element ids, sorted. The stable iteration order the arena
    /// itself does not provide.
    #[must_use]
    pub fn ids_sorted(&self) -> Vec<ElementId> {
        let mut ids: Vec<_> = self.nodes.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Flattens every element's outgoing edges into one sequence.
    pub fn all_relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.nodes.values().flat_map(|e| e.relationships.iter())
    }

    /// Looks up an element by full name, case-insensitively. Linear scan;
    /// pattern resolution is the only caller and runs once per rule.
    #[must_use]
    pub fn element_by_full_name(&self, full_name: &str) -> Option<&CodeElement> {
        let wanted = full_name.to_lowercase();
        self.nodes
            .values()
            .find(|e| e.full_name.to_lowercase() == wanted)
    }

    /// Walks the parent chain of `id`, nearest ancestor first. The chain
    /// is a strict tree, but a seen-set guards traversal against
    /// malformed input.
    #[must_use]
    pub fn ancestors(&self, id: &ElementId) -> Vec<ElementId> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = self.nodes.get(id).and_then(|e| e.parent.clone());

        while let Some(ancestor_id) = current {
            if !seen.insert(ancestor_id.clone()) {
                break;
            }
            current = self
                .nodes
                .get(&ancestor_id)
                .and_then(|e| e.parent.clone());
            chain.push(ancestor_id);
        }
        chain
    }

    /// Direct children of `id` that exist in the arena.
    #[must_use]
    pub fn children(&self, id: &ElementId) -> Vec<ElementId> {
        self.nodes.get(id).map_or_else(Vec::new, |e| {
            e.children
                .iter()
                .filter(|c| self.nodes.contains_key(c))
                .cloned()
                .collect()
        })
    }

    /// The element plus all of its descendants, transitively.
    #[must_use]
    pub fn children_including_self(&self, id: &ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut seen = HashSet::new();
        let mut pending = vec![id.clone()];

        while let Some(current) = pending.pop() {
            if !seen.insert(current.clone()) {
                continue;
            }
            let Some(element) = self.nodes.get(&current) else {
                continue;
            };
            pending.extend(element.children.iter().cloned());
            result.push(current);
        }
        result
    }
}
