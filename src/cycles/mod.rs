// src/cycles/mod.rs
//! Circular-dependency detection.
//!
//! Pipeline: classify edge relevance, project the code graph into an
//! abstract search graph, run Tarjan's SCC, then assemble each cyclic
//! component into a presentable group with ancestor context.

pub mod classifier;
pub mod groups;
pub mod search;
pub mod tarjan;

pub use classifier::is_relevant_for_cycle;
pub use groups::{CycleGroup, CycleLevel};
pub use tarjan::{strongly_connected_components, SearchableGraph};

use crate::model::CodeGraph;

/// Finds all circular-dependency groups in the graph.
///
/// Pure and synchronous; the graph must not be mutated for the duration
/// of the call. Returns an empty list for acyclic graphs.
#[must_use]
pub fn find_cycle_groups(graph: &CodeGraph) -> Vec<CycleGroup> {
    let search = search::build(graph);
    let components = tarjan::strongly_connected_components(&search);

    components
        .iter()
        .filter_map(|component| groups::assemble(graph, &search, component))
        .collect()
}
