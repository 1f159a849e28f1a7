// src/rules/engine.rs
//! Rule evaluation over the full relationship set.
//!
//! DENY and ISOLATE rules evaluate independently. RESTRICT rules sharing
//! an identical source pattern merge into one group whose allowed-target
//! set is the union of the members' resolved targets; a bare RESTRICT
//! rule is a configuration error. Each rule or group scans every edge
//! once, and one edge can appear in several violations.

use std::collections::{BTreeSet, HashMap};

use super::pattern::resolve_pattern;
use super::types::{RestrictRuleGroup, Rule, RuleKind, Violation};
use crate::error::{GridlockError, Result};
use crate::model::{CodeGraph, Relationship};

/// Validates all enabled rules, concatenating violations across rules
/// and groups. DENY and ISOLATE results come first in input order, then
/// one result per RESTRICT group in first-appearance order.
#[must_use]
pub fn validate_rules(graph: &CodeGraph, rules: &[Rule]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut group_order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Rule>> = HashMap::new();

    for rule in rules.iter().filter(|r| r.is_enabled()) {
        match rule {
            Rule::Deny { .. } | Rule::Isolate { .. } => {
                violations.extend(validate_single(graph, rule));
            }
            Rule::Restrict { source, .. } => {
                let members = groups.entry(source.as_str()).or_default();
                if members.is_empty() {
                    group_order.push(source.as_str());
                }
                members.push(rule);
            }
        }
    }

    for source in group_order {
        let group = build_restrict_group(graph, source, &groups[source]);
        violations.extend(validate_restrict_group(graph, &group));
    }

    violations
}

/// Validates one DENY or ISOLATE rule.
///
/// # Errors
///
/// Returns [`GridlockError::UngroupedRestrict`] for a RESTRICT rule;
/// restrict semantics only exist at group level.
pub fn validate_rule(graph: &CodeGraph, rule: &Rule) -> Result<Option<Violation>> {
    if let Rule::Restrict { text, .. } = rule {
        return Err(GridlockError::UngroupedRestrict { rule: text.clone() });
    }
    if !rule.is_enabled() {
        return Ok(None);
    }
    Ok(validate_single(graph, rule))
}

fn validate_single(graph: &CodeGraph, rule: &Rule) -> Option<Violation> {
    match rule {
        Rule::Deny { source, target, text, .. } => {
            let sources = resolve_pattern(graph, source);
            let targets = resolve_pattern(graph, target);
            let edges = collect_edges(graph, |r| {
                sources.contains(&r.source) && targets.contains(&r.target)
            });
            violation(RuleKind::Deny, text, edges)
        }
        Rule::Isolate { source, text, .. } => {
            let sources = resolve_pattern(graph, source);
            let edges = collect_edges(graph, |r| {
                sources.contains(&r.source) && !sources.contains(&r.target)
            });
            violation(RuleKind::Isolate, text, edges)
        }
        Rule::Restrict { .. } => None,
    }
}

/// Merges the member rules' resolved targets into one allowed set.
#[must_use]
pub fn build_restrict_group(
    graph: &CodeGraph,
    source: &str,
    members: &[&Rule],
) -> RestrictRuleGroup {
    let mut allowed_targets = BTreeSet::new();
    let mut rule_texts = Vec::new();

    for member in members {
        if let Rule::Restrict { target, text, .. } = member {
            allowed_targets.extend(resolve_pattern(graph, target));
            rule_texts.push(text.clone());
        }
    }

    RestrictRuleGroup {
        source: source.to_string(),
        rule_texts,
        allowed_targets,
    }
}

/// Validates one RESTRICT group: every edge from the restricted set to a
/// target outside the allowed union is a breach.
#[must_use]
pub fn validate_restrict_group(graph: &CodeGraph, group: &RestrictRuleGroup) -> Option<Violation> {
    let sources = resolve_pattern(graph, &group.source);
    let edges = collect_edges(graph, |r| {
        sources.contains(&r.source) && !group.allowed_targets.contains(&r.target)
    });
    violation(RuleKind::Restrict, &group.describe(), edges)
}

fn collect_edges<F>(graph: &CodeGraph, mut breaks_rule: F) -> Vec<Relationship>
where
    F: FnMut(&Relationship) -> bool,
{
    let mut edges: Vec<Relationship> = graph
        .all_relationships()
        .filter(|r| breaks_rule(r))
        .cloned()
        .collect();
    edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
    edges
}

fn violation(kind: RuleKind, text: &str, edges: Vec<Relationship>) -> Option<Violation> {
    if edges.is_empty() {
        return None;
    }
    Some(Violation {
        kind,
        rule_text: text.to_string(),
        relationships: edges,
    })
}
