// src/cycles/search.rs
//! Projection of the code graph into the abstract graph the SCC pass
//! runs on.
//!
//! Construction is two passes: first collect every element that is the
//! source or target of a relevant edge and wire the dependencies, then
//! close over ancestor chains so the group assembler can classify a
//! cycle's display granularity. Ancestors carry no dependencies of their
//! own; containment is not a cycle-relevant dependency.

use std::collections::{BTreeSet, HashMap};

use super::classifier::is_relevant_for_cycle;
use super::tarjan::SearchableGraph;
use crate::model::{CodeGraph, ElementId};

/// A vertex of the abstract search graph. Keyed by element id in a dense
/// map; the builder guarantees at most one node per id.
#[derive(Debug, Clone, Default)]
pub struct SearchNode {
    pub dependencies: BTreeSet<ElementId>,
}

/// The abstract graph handed to Tarjan.
#[derive(Debug, Clone, Default)]
pub struct SearchGraph {
    nodes: HashMap<ElementId, SearchNode>,
}

impl SearchGraph {
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// True when the vertex has an edge back onto itself.
    #[must_use]
    pub fn has_self_edge(&self, id: &ElementId) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|n| n.dependencies.contains(id))
    }

    fn node_mut(&mut self, id: &ElementId) -> &mut SearchNode {
        self.nodes.entry(id.clone()).or_default()
    }
}

impl SearchableGraph for SearchGraph {
    type Vertex = ElementId;

    fn vertices(&self) -> Vec<ElementId> {
        self.nodes.keys().cloned().collect()
    }

    fn neighbors(&self, vertex: &ElementId) -> Vec<ElementId> {
        self.nodes
            .get(vertex)
            .map_or_else(Vec::new, |n| n.dependencies.iter().cloned().collect())
    }
}

/// Builds the search graph for one analysis run.
#[must_use]
pub fn build(graph: &CodeGraph) -> SearchGraph {
    let mut search = SearchGraph::default();
    collect_participants(graph, &mut search);
    close_over_ancestors(graph, &mut search);
    search
}

fn collect_participants(graph: &CodeGraph, search: &mut SearchGraph) {
    for element in graph.elements() {
        for relationship in &element.relationships {
            if !is_relevant_for_cycle(graph, relationship) {
                continue;
            }
            search.node_mut(&relationship.source);
            // Edges to elements outside the graph cannot close a cycle.
            if graph.contains(&relationship.target) {
                search.node_mut(&relationship.target);
                search
                    .node_mut(&relationship.source)
                    .dependencies
                    .insert(relationship.target.clone());
            }
        }
    }
}

fn close_over_ancestors(graph: &CodeGraph, search: &mut SearchGraph) {
    let participants: Vec<ElementId> = search.nodes.keys().cloned().collect();
    for id in participants {
        for ancestor in graph.ancestors(&id) {
            search.node_mut(&ancestor);
        }
    }
}
