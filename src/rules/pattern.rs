// src/rules/pattern.rs
//! Hierarchical glob resolution against the code graph.
//!
//! Patterns name sets of elements by full name, case-insensitively, and
//! never inspect relationships:
//!
//! - `A.B`    — the element plus all of its descendants. An exact match
//!   is self-inclusive: a rule naming a class also covers its members.
//! - `A.B.*`  — the element plus its direct children only.
//! - `A.B.**` — the element plus all descendants, transitively.
//!
//! Unmatched, empty, and whitespace-only patterns all resolve to the
//! empty set; none of these is an error.

use std::collections::BTreeSet;

use crate::model::{CodeGraph, ElementId};

/// Resolves a pattern to the concrete set of element ids it covers.
#[must_use]
pub fn resolve_pattern(graph: &CodeGraph, pattern: &str) -> BTreeSet<ElementId> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return BTreeSet::new();
    }

    if let Some(base) = pattern.strip_suffix(".**") {
        return resolve_recursive(graph, base);
    }
    if let Some(base) = pattern.strip_suffix(".*") {
        return resolve_direct(graph, base);
    }
    resolve_recursive(graph, pattern)
}

fn resolve_recursive(graph: &CodeGraph, full_name: &str) -> BTreeSet<ElementId> {
    match graph.element_by_full_name(full_name) {
        Some(element) => graph
            .children_including_self(&element.id)
            .into_iter()
            .collect(),
        None => BTreeSet::new(),
    }
}

fn resolve_direct(graph: &CodeGraph, full_name: &str) -> BTreeSet<ElementId> {
    let Some(element) = graph.element_by_full_name(full_name) else {
        return BTreeSet::new();
    };
    let mut set: BTreeSet<ElementId> = graph.children(&element.id).into_iter().collect();
    set.insert(element.id.clone());
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CodeElement, ElementType};

    fn business_graph() -> CodeGraph {
        let mut g = CodeGraph::new();
        g.insert(CodeElement::new("ns", ElementType::Namespace, "Business", "MyApp.Business"));
        g.insert(
            CodeElement::new("c1", ElementType::Class, "Orders", "MyApp.Business.Orders")
                .with_parent("ns"),
        );
        g.insert(
            CodeElement::new("c2", ElementType::Class, "Billing", "MyApp.Business.Billing")
                .with_parent("ns"),
        );
        g.insert(
            CodeElement::new("m1", ElementType::Method, "Ship", "MyApp.Business.Orders.Ship")
                .with_parent("c1"),
        );
        g
    }

    #[test]
    fn test_one_level_wildcard_stops_at_direct_children() {
        let g = business_graph();
        let set = resolve_pattern(&g, "MyApp.Business.*");
        assert_eq!(set.len(), 3, "namespace + two classes, no grandchild");
        assert!(!set.contains(&"m1".into()));
    }

    #[test]
    fn test_recursive_wildcard_includes_grandchildren() {
        let g = business_graph();
        let set = resolve_pattern(&g, "MyApp.Business.**");
        assert_eq!(set.len(), 4);
        assert!(set.contains(&"m1".into()));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let g = business_graph();
        let set = resolve_pattern(&g, "myapp.BUSINESS.orders");
        assert!(set.contains(&"c1".into()));
        assert!(set.contains(&"m1".into()), "exact match is self-inclusive");
    }

    #[test]
    fn test_whitespace_pattern_is_empty() {
        let g = business_graph();
        assert!(resolve_pattern(&g, "   ").is_empty());
    }
}
