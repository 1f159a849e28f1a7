// src/rules/mod.rs
//! Architectural rule validation: DENY, RESTRICT, and ISOLATE layering
//! policies expressed as hierarchical glob patterns over the code graph.

pub mod engine;
pub mod parser;
pub mod pattern;
pub mod types;

pub use engine::{validate_rule, validate_rules};
pub use parser::parse_rules;
pub use pattern::resolve_pattern;
pub use types::{RestrictRuleGroup, Rule, RuleKind, Violation};
