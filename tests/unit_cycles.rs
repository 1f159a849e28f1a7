// tests/unit_cycles.rs
//! Tests for cycle-group detection and level classification.

use gridlock_core::cycles::{find_cycle_groups, CycleLevel};
use gridlock_core::model::{
    CodeElement, CodeGraph, ElementId, ElementType, Relationship, RelationshipType,
};

fn id(s: &str) -> ElementId {
    ElementId::from(s)
}

/// Namespace with classes a, b, c, d and the given call edges.
fn class_graph(edges: &[(&str, &str)]) -> CodeGraph {
    let mut g = CodeGraph::new();
    g.insert(CodeElement::new("ns", ElementType::Namespace, "N", "N"));
    for name in ["a", "b", "c", "d"] {
        g.insert(
            CodeElement::new(name, ElementType::Class, name.to_uppercase(), format!("N.{name}"))
                .with_parent("ns"),
        );
    }
    for (from, to) in edges {
        g.add_relationship(Relationship::new(*from, *to, RelationshipType::Calls));
    }
    g
}

#[test]
fn test_triangle_yields_one_group() {
    let g = class_graph(&[("a", "b"), ("b", "c"), ("c", "a")]);
    let groups = find_cycle_groups(&g);

    assert_eq!(groups.len(), 1);
    let members = groups[0].member_ids();
    assert!(members.contains(&id("a")));
    assert!(members.contains(&id("b")));
    assert!(members.contains(&id("c")));
    assert!(!members.contains(&id("d")));
}

#[test]
fn test_entry_edge_does_not_join_group() {
    let g = class_graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")]);
    let groups = find_cycle_groups(&g);

    assert_eq!(groups.len(), 1);
    assert!(!groups[0].member_ids().contains(&id("d")));
}

#[test]
fn test_acyclic_graph_has_no_groups() {
    let g = class_graph(&[("a", "b"), ("b", "c")]);
    assert!(find_cycle_groups(&g).is_empty());
}

#[test]
fn test_self_loop_is_a_group() {
    let g = class_graph(&[("a", "a")]);
    let groups = find_cycle_groups(&g);
    assert_eq!(groups.len(), 1);
    assert!(groups[0].member_ids().contains(&id("a")));
}

#[test]
fn test_handles_edges_never_form_cycles() {
    let mut g = class_graph(&[("a", "b")]);
    g.add_relationship(Relationship::new("b", "a", RelationshipType::Handles));

    assert!(
        find_cycle_groups(&g).is_empty(),
        "the back edge is a handler edge, not a dependency"
    );
}

#[test]
fn test_member_level_override_edges_never_form_cycles() {
    let mut g = CodeGraph::new();
    g.insert(CodeElement::new("c1", ElementType::Class, "C1", "N.C1"));
    g.insert(CodeElement::new("c2", ElementType::Class, "C2", "N.C2"));
    g.insert(CodeElement::new("m1", ElementType::Method, "M1", "N.C1.M1").with_parent("c1"));
    g.insert(CodeElement::new("m2", ElementType::Method, "M2", "N.C2.M2").with_parent("c2"));
    g.add_relationship(Relationship::new("m1", "m2", RelationshipType::Calls));
    g.add_relationship(Relationship::new("m2", "m1", RelationshipType::Overrides));

    assert!(find_cycle_groups(&g).is_empty());
}

#[test]
fn test_method_cycle_reports_at_type_level() {
    let mut g = CodeGraph::new();
    g.insert(CodeElement::new("c1", ElementType::Class, "C1", "N.C1"));
    g.insert(CodeElement::new("c2", ElementType::Class, "C2", "N.C2"));
    g.insert(CodeElement::new("m1", ElementType::Method, "M1", "N.C1.M1").with_parent("c1"));
    g.insert(CodeElement::new("m2", ElementType::Method, "M2", "N.C2.M2").with_parent("c2"));
    g.add_relationship(Relationship::new("m1", "m2", RelationshipType::Calls));
    g.add_relationship(Relationship::new("m2", "m1", RelationshipType::Calls));

    let groups = find_cycle_groups(&g);
    assert_eq!(groups.len(), 1);

    let group = &groups[0];
    assert_eq!(group.level, CycleLevel::Type);
    assert_eq!(
        group.high_level_elements,
        vec![id("c1"), id("c2")],
        "only the ancestor classes surface, sorted by full name"
    );
    assert!(group.member_ids().contains(&id("m1")), "methods stay in the sub-graph");
}

#[test]
fn test_namespace_level_wins_over_type_level() {
    let mut g = CodeGraph::new();
    g.insert(CodeElement::new("ns1", ElementType::Namespace, "N1", "N1"));
    g.insert(CodeElement::new("ns2", ElementType::Namespace, "N2", "N2"));
    g.insert(CodeElement::new("c1", ElementType::Class, "C1", "N1.C1").with_parent("ns1"));
    g.insert(CodeElement::new("c2", ElementType::Class, "C2", "N2.C2").with_parent("ns2"));
    g.add_relationship(Relationship::new("c1", "c2", RelationshipType::Uses));
    g.add_relationship(Relationship::new("c2", "c1", RelationshipType::Uses));

    let groups = find_cycle_groups(&g);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].level, CycleLevel::Namespace);
    assert_eq!(groups[0].high_level_elements, vec![id("ns1"), id("ns2")]);
}

#[test]
fn test_sub_graph_keeps_original_edge_details() {
    use gridlock_core::model::{RelationshipAttrs, SourceLocation};

    let mut g = CodeGraph::new();
    g.insert(CodeElement::new("a", ElementType::Class, "A", "N.A"));
    g.insert(CodeElement::new("b", ElementType::Class, "B", "N.B"));
    g.add_relationship(
        Relationship::new("a", "b", RelationshipType::Calls)
            .with_attrs(RelationshipAttrs::INSTANCE_CALL)
            .with_location(SourceLocation::new("a.cs", 10, 4)),
    );
    g.add_relationship(Relationship::new("b", "a", RelationshipType::Calls));

    let groups = find_cycle_groups(&g);
    assert_eq!(groups.len(), 1);

    let sub = &groups[0].graph;
    let edge = sub
        .get(&id("a"))
        .unwrap()
        .relationships
        .first()
        .expect("edge a -> b survives reconstruction");
    assert!(edge.attrs.has(RelationshipAttrs::INSTANCE_CALL));
    assert_eq!(edge.locations.len(), 1);
    assert_eq!(edge.locations[0].file, "a.cs");
}

#[test]
fn test_disjoint_cycles_yield_separate_groups() {
    let mut g = class_graph(&[("a", "b"), ("b", "a"), ("c", "d"), ("d", "c")]);
    g.add_relationship(Relationship::new("b", "c", RelationshipType::Calls));

    let groups = find_cycle_groups(&g);
    assert_eq!(groups.len(), 2, "bridge edge does not merge the cycles");
}
