// src/report.rs
//! Console and machine-readable output formatting for analysis results.

use colored::Colorize;
use serde::Serialize;
use std::collections::HashMap;

use crate::cycles::CycleGroup;
use crate::rules::{RuleKind, Violation};

/// Combined result of one analysis run, for JSON consumers.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub cycle_groups: &'a [CycleGroup],
    pub violations: &'a [Violation],
}

/// Renders both result sets as pretty-printed JSON.
///
/// # Errors
///
/// Returns error if serialization fails.
pub fn to_json(groups: &[CycleGroup], violations: &[Violation]) -> anyhow::Result<String> {
    let report = AnalysisReport { cycle_groups: groups, violations };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Prints a summary of detected cycle groups.
pub fn print_cycle_report(groups: &[CycleGroup]) {
    println!(
        "\n{} {} group(s)",
        "CYCLE SCAN".cyan().bold(),
        format_count(groups.len()),
    );

    if groups.is_empty() {
        println!("{}", "  ✓ No circular dependencies.".green());
        return;
    }

    for group in groups {
        print_group(group);
    }
}

fn print_group(group: &CycleGroup) {
    println!("  {} {}", group.level.label().yellow().bold(), group.name);
    for id in &group.high_level_elements {
        if let Some(element) = group.graph.get(id) {
            println!("    ↻ {}", element.full_name);
        }
    }
}

/// Prints rule violations grouped by rule kind.
pub fn print_violation_report(violations: &[Violation]) {
    let total_edges: usize = violations.iter().map(Violation::relationship_count).sum();
    println!(
        "\n{} {} rule(s) broken | {} offending edge(s)",
        "RULE CHECK".cyan().bold(),
        format_count(violations.len()),
        format_count(total_edges),
    );

    if violations.is_empty() {
        println!("{}", "  ✓ All architectural rules hold.".green());
        return;
    }

    let mut by_kind: HashMap<RuleKind, Vec<&Violation>> = HashMap::new();
    for violation in violations {
        by_kind.entry(violation.kind).or_default().push(violation);
    }

    for kind in [RuleKind::Deny, RuleKind::Restrict, RuleKind::Isolate] {
        if let Some(group) = by_kind.get(&kind) {
            print_kind(kind, group);
        }
    }
}

fn print_kind(kind: RuleKind, violations: &[&Violation]) {
    println!("  {}", kind.label().red().bold());
    for violation in violations {
        println!("    {}", violation.rule_text);
        for edge in &violation.relationships {
            println!(
                "      ✗ {} {} {}",
                edge.source,
                edge.relationship_type.label().dimmed(),
                edge.target,
            );
        }
    }
}

fn format_count(n: usize) -> String {
    if n == 0 {
        n.to_string().green().to_string()
    } else {
        n.to_string().red().to_string()
    }
}
