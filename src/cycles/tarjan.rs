// src/cycles/tarjan.rs
//! Tarjan's strongly-connected-components algorithm.
//!
//! Generic over anything exposing vertices and neighbors. Single-pass
//! depth-first search assigning each vertex a discovery index and a
//! low-link; a vertex whose low-link equals its own index roots a
//! component, emitted by popping the explicit stack down to that root.
//! The search itself runs on an explicit frame stack, so depth is bounded
//! by the heap, not the call stack. O(V + E).

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Minimal vertex/neighbor contract the algorithm needs.
pub trait SearchableGraph {
    type Vertex: Clone + Eq + Hash + Ord;

    fn vertices(&self) -> Vec<Self::Vertex>;
    fn neighbors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;
}

/// Computes all strongly connected components.
///
/// Every vertex appears in exactly one component; size-1 components are
/// emitted too, and it is the consumer's job to decide whether they
/// constitute a cycle (they do only with a self-edge). Vertices are
/// visited in sorted order so output is deterministic for testing.
#[must_use]
pub fn strongly_connected_components<G: SearchableGraph>(graph: &G) -> Vec<Vec<G::Vertex>> {
    let mut state = TarjanState::default();

    let mut roots = graph.vertices();
    roots.sort();

    for vertex in roots {
        if !state.indices.contains_key(&vertex) {
            strong_connect(&vertex, graph, &mut state);
        }
    }

    state.components
}

struct TarjanState<V> {
    next_index: usize,
    indices: HashMap<V, usize>,
    low_links: HashMap<V, usize>,
    stack: Vec<V>,
    on_stack: HashSet<V>,
    components: Vec<Vec<V>>,
}

impl<V> Default for TarjanState<V> {
    fn default() -> Self {
        Self {
            next_index: 0,
            indices: HashMap::new(),
            low_links: HashMap::new(),
            stack: Vec::new(),
            on_stack: HashSet::new(),
            components: Vec::new(),
        }
    }
}

struct Frame<V> {
    vertex: V,
    neighbors: Vec<V>,
    next: usize,
}

fn strong_connect<G: SearchableGraph>(
    root: &G::Vertex,
    graph: &G,
    state: &mut TarjanState<G::Vertex>,
) {
    let mut frames = vec![open_frame(root, graph, state)];

    while !frames.is_empty() {
        let top = frames.len() - 1;
        let pending = {
            let frame = &mut frames[top];
            let neighbor = frame.neighbors.get(frame.next).cloned();
            if neighbor.is_some() {
                frame.next += 1;
            }
            neighbor
        };

        match pending {
            Some(neighbor) => {
                if !state.indices.contains_key(&neighbor) {
                    frames.push(open_frame(&neighbor, graph, state));
                } else if state.on_stack.contains(&neighbor) {
                    let vertex = frames[top].vertex.clone();
                    lower_low_link(&vertex, state.indices[&neighbor], state);
                }
            }
            None => {
                let Some(frame) = frames.pop() else {
                    break;
                };
                if state.low_links[&frame.vertex] == state.indices[&frame.vertex] {
                    emit_component(&frame.vertex, state);
                }
                if let Some(parent) = frames.last() {
                    let parent_vertex = parent.vertex.clone();
                    lower_low_link(&parent_vertex, state.low_links[&frame.vertex], state);
                }
            }
        }
    }
}

fn open_frame<G: SearchableGraph>(
    vertex: &G::Vertex,
    graph: &G,
    state: &mut TarjanState<G::Vertex>,
) -> Frame<G::Vertex> {
    let index = state.next_index;
    state.next_index += 1;
    state.indices.insert(vertex.clone(), index);
    state.low_links.insert(vertex.clone(), index);
    state.stack.push(vertex.clone());
    state.on_stack.insert(vertex.clone());

    let mut neighbors = graph.neighbors(vertex);
    neighbors.sort();
    Frame { vertex: vertex.clone(), neighbors, next: 0 }
}

fn lower_low_link<V: Clone + Eq + Hash>(vertex: &V, candidate: usize, state: &mut TarjanState<V>) {
    let current = state.low_links[vertex];
    if candidate < current {
        state.low_links.insert(vertex.clone(), candidate);
    }
}

fn emit_component<V: Clone + Eq + Hash>(root: &V, state: &mut TarjanState<V>) {
    let mut component = Vec::new();
    loop {
        let Some(member) = state.stack.pop() else {
            break;
        };
        state.on_stack.remove(&member);
        let done = member == *root;
        component.push(member);
        if done {
            break;
        }
    }
    state.components.push(component);
}
