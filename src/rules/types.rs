// src/rules/types.rs
//! Rule variants and validation results.
//!
//! Rules form a closed tagged union instead of a class hierarchy, so the
//! engine matches exhaustively and "a RESTRICT rule is only meaningful in
//! its group" becomes a visible error branch rather than a convention.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::model::{ElementId, Relationship};

/// Kind of an architectural rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Deny,
    Restrict,
    Isolate,
}

impl RuleKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Deny => "DENY",
            Self::Restrict => "RESTRICT",
            Self::Isolate => "ISOLATE",
        }
    }
}

/// A user-authored layering rule. `text` is the rule line kept for
/// reporting: the raw input when parsed, a canonical form when built
/// programmatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Rule {
    /// No dependency from `source` to `target`.
    Deny {
        source: String,
        target: String,
        enabled: bool,
        text: String,
    },
    /// `source` may only depend on the union of its group's targets.
    /// Never evaluated alone; see [`RestrictRuleGroup`].
    Restrict {
        source: String,
        target: String,
        enabled: bool,
        text: String,
    },
    /// No dependency may leave the `source` set.
    Isolate {
        source: String,
        enabled: bool,
        text: String,
    },
}

impl Rule {
    #[must_use]
    pub fn deny(source: impl Into<String>, target: impl Into<String>) -> Self {
        let (source, target) = (source.into(), target.into());
        let text = format!("DENY: {source} -> {target}");
        Self::Deny { source, target, enabled: true, text }
    }

    #[must_use]
    pub fn restrict(source: impl Into<String>, target: impl Into<String>) -> Self {
        let (source, target) = (source.into(), target.into());
        let text = format!("RESTRICT: {source} -> {target}");
        Self::Restrict { source, target, enabled: true, text }
    }

    #[must_use]
    pub fn isolate(source: impl Into<String>) -> Self {
        let source = source.into();
        let text = format!("ISOLATE: {source}");
        Self::Isolate { source, enabled: true, text }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        match &mut self {
            Self::Deny { enabled, .. }
            | Self::Restrict { enabled, .. }
            | Self::Isolate { enabled, .. } => *enabled = false,
        }
        self
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Deny { enabled, .. }
            | Self::Restrict { enabled, .. }
            | Self::Isolate { enabled, .. } => *enabled,
        }
    }

    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self {
            Self::Deny { .. } => RuleKind::Deny,
            Self::Restrict { .. } => RuleKind::Restrict,
            Self::Isolate { .. } => RuleKind::Isolate,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Deny { text, .. }
            | Self::Restrict { text, .. }
            | Self::Isolate { text, .. } => text,
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Deny { source, .. }
            | Self::Restrict { source, .. }
            | Self::Isolate { source, .. } => source,
        }
    }
}

/// All RESTRICT rules sharing one source pattern, merged. The allowed
/// target set is the union of the member rules' resolved targets.
#[derive(Debug, Clone)]
pub struct RestrictRuleGroup {
    pub source: String,
    pub rule_texts: Vec<String>,
    pub allowed_targets: BTreeSet<ElementId>,
}

impl RestrictRuleGroup {
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "RESTRICT group '{}' ({} rules)",
            self.source,
            self.rule_texts.len()
        )
    }
}

/// A rule paired with the relationships that broke it. One violation per
/// offending rule or group; the edge list holds every breach.
#[derive(Debug, Clone, Serialize)]
pub struct Violation {
    pub kind: RuleKind,
    pub rule_text: String,
    pub relationships: Vec<Relationship>,
}

impl Violation {
    #[must_use]
    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
