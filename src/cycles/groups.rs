// src/cycles/groups.rs
//! Assembly of raw SCCs into presentable cycle groups.
//!
//! A component is only a cycle when it can reach itself: more than one
//! vertex, or a single vertex with a self-edge. Each group carries a
//! reconstructed sub-graph (members + ancestor chains + the original
//! relationships between members, locations and attributes intact) and
//! a classification of the most meaningful containment level.

use serde::Serialize;
use std::collections::HashSet;

use super::classifier::is_relevant_for_cycle;
use super::search::SearchGraph;
use crate::model::{CodeElement, CodeGraph, ElementId, ElementType};

/// Containment level a cycle group is best reported at.
///
/// A cycle between two methods of two mutually-dependent classes is more
/// usefully reported as a class-level cycle, and a cycle spanning whole
/// namespaces at namespace granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CycleLevel {
    Assembly,
    Namespace,
    Type,
    Other,
}

impl CycleLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Assembly => "ASSEMBLY",
            Self::Namespace => "NAMESPACE",
            Self::Type => "TYPE",
            Self::Other => "OTHER",
        }
    }

    fn surfaces(self, element_type: ElementType) -> bool {
        match self {
            Self::Assembly => element_type == ElementType::Assembly,
            Self::Namespace => element_type == ElementType::Namespace,
            Self::Type => element_type.is_type(),
            Self::Other => true,
        }
    }
}

/// One circular-dependency group: a sub-graph of the analyzed code plus
/// presentation metadata. Derived, read-only.
#[derive(Debug, Clone, Serialize)]
pub struct CycleGroup {
    pub name: String,
    pub level: CycleLevel,
    pub graph: CodeGraph,
    /// Elements surfaced at the group's level, sorted by full name.
    pub high_level_elements: Vec<ElementId>,
}

impl CycleGroup {
    /// Ids of the group's sub-graph, sorted. Ancestor context included.
    #[must_use]
    pub fn member_ids(&self) -> Vec<ElementId> {
        self.graph.ids_sorted()
    }
}

/// Turns one SCC into a cycle group, or `None` when the component is not
/// actually cyclic.
#[must_use]
pub fn assemble(
    graph: &CodeGraph,
    search: &SearchGraph,
    component: &[ElementId],
) -> Option<CycleGroup> {
    if !is_cyclic(search, component) {
        return None;
    }

    let included = include_with_ancestors(graph, component);
    let sub_graph = reconstruct_sub_graph(graph, &included);
    let level = classify_level(&sub_graph);
    let surfaced = surfaced_elements(&sub_graph, level);
    let name = group_name(&sub_graph, level, &surfaced);

    Some(CycleGroup { name, level, graph: sub_graph, high_level_elements: surfaced })
}

fn is_cyclic(search: &SearchGraph, component: &[ElementId]) -> bool {
    match component {
        [] => false,
        [only] => search.has_self_edge(only),
        _ => true,
    }
}

fn include_with_ancestors(graph: &CodeGraph, component: &[ElementId]) -> HashSet<ElementId> {
    let mut included: HashSet<ElementId> = component.iter().cloned().collect();
    for id in component {
        included.extend(graph.ancestors(id));
    }
    included
}

/// Clones the included elements, keeping only child links and relevant
/// relationships that stay inside the group. Relationships are re-fetched
/// from the source graph so call sites and attributes survive.
fn reconstruct_sub_graph(graph: &CodeGraph, included: &HashSet<ElementId>) -> CodeGraph {
    let mut sub = CodeGraph::new();
    let mut members: Vec<&CodeElement> = included
        .iter()
        .filter_map(|id| graph.get(id))
        .collect();
    // Parents before children so insert() can wire child links.
    members.sort_by_key(|e| graph.ancestors(&e.id).len());

    for element in members {
        let mut clone = element.clone();
        clone.children.retain(|c| included.contains(c));
        clone.relationships.retain(|r| {
            included.contains(&r.target) && is_relevant_for_cycle(graph, r)
        });
        sub.insert(clone);
    }
    sub
}

fn classify_level(sub_graph: &CodeGraph) -> CycleLevel {
    let mut has_namespace = false;
    let mut has_type = false;

    for element in sub_graph.elements() {
        match element.element_type {
            ElementType::Assembly => return CycleLevel::Assembly,
            ElementType::Namespace => has_namespace = true,
            t if t.is_type() => has_type = true,
            _ => {}
        }
    }

    if has_namespace {
        CycleLevel::Namespace
    } else if has_type {
        CycleLevel::Type
    } else {
        CycleLevel::Other
    }
}

fn surfaced_elements(sub_graph: &CodeGraph, level: CycleLevel) -> Vec<ElementId> {
    let mut surfaced: Vec<&CodeElement> = sub_graph
        .elements()
        .filter(|e| level.surfaces(e.element_type))
        .collect();
    surfaced.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    surfaced.into_iter().map(|e| e.id.clone()).collect()
}

fn group_name(sub_graph: &CodeGraph, level: CycleLevel, surfaced: &[ElementId]) -> String {
    let first = surfaced
        .first()
        .and_then(|id| sub_graph.get(id))
        .map_or("<unnamed>", |e| e.full_name.as_str());

    match surfaced.len() {
        0 | 1 => format!("{} cycle: {first}", level.label()),
        n => format!("{} cycle: {first} (+{} more)", level.label(), n - 1),
    }
}
