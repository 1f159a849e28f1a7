// src/rules/parser.rs
//! Line-oriented parser for user-authored rule text.
//!
//! One rule per line, case-insensitive keywords:
//!
//! ```text
//! DENY: <source-pattern> -> <target-pattern>
//! RESTRICT: <source-pattern> -> <target-pattern>
//! ISOLATE: <source-pattern>
//! // comment lines and blank lines are skipped
//! ```

use regex::Regex;

use super::types::Rule;
use crate::error::{GridlockError, Result};

/// Parses rule text into rules, failing fast on the first invalid line
/// with its 1-based line number.
///
/// # Errors
///
/// Returns [`GridlockError::RuleParse`] for unrecognized keywords,
/// missing arrows, and malformed patterns.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>> {
    let arrow = Regex::new(r"(?i)^(deny|restrict)\s*:\s*(\S+)\s*->\s*(\S+)$")?;
    let isolate = Regex::new(r"(?i)^isolate\s*:\s*(\S+)$")?;
    let keyword = Regex::new(r"(?i)^(deny|restrict|isolate)\b")?;

    let mut rules = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let rule = parse_line(line, idx + 1, &arrow, &isolate, &keyword)?;
        rules.push(rule);
    }

    Ok(rules)
}

fn parse_line(
    line: &str,
    line_number: usize,
    arrow: &Regex,
    isolate: &Regex,
    keyword: &Regex,
) -> Result<Rule> {
    if let Some(captures) = arrow.captures(line) {
        let source = captures[2].to_string();
        let target = captures[3].to_string();
        let text = line.to_string();
        let rule = match captures[1].to_uppercase().as_str() {
            "DENY" => Rule::Deny { source, target, enabled: true, text },
            _ => Rule::Restrict { source, target, enabled: true, text },
        };
        return Ok(rule);
    }

    if let Some(captures) = isolate.captures(line) {
        return Ok(Rule::Isolate {
            source: captures[1].to_string(),
            enabled: true,
            text: line.to_string(),
        });
    }

    Err(GridlockError::RuleParse {
        line: line_number,
        message: diagnose(line, keyword),
    })
}

fn diagnose(line: &str, keyword: &Regex) -> String {
    let Some(captures) = keyword.captures(line) else {
        return format!("unrecognized rule keyword in '{line}'");
    };

    match captures[1].to_uppercase().as_str() {
        "ISOLATE" => format!("ISOLATE takes a single source pattern: '{line}'"),
        kw => format!("{kw} requires '<source> -> <target>': '{line}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::types::RuleKind;

    #[test]
    fn test_keywords_are_case_insensitive() {
        let rules = parse_rules("deny: A -> B\nRestrict: A -> C\nISOLATE: D").unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].kind(), RuleKind::Deny);
        assert_eq!(rules[1].kind(), RuleKind::Restrict);
        assert_eq!(rules[2].kind(), RuleKind::Isolate);
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let text = "\n// layering policy\n\nDENY: App.UI.** -> App.Data.**\n";
        let rules = parse_rules(text).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].text(), "DENY: App.UI.** -> App.Data.**");
    }

    #[test]
    fn test_missing_arrow_reports_line_number() {
        let err = parse_rules("// ok\nDENY: A.B\n").unwrap_err();
        match err {
            GridlockError::RuleParse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("->"), "message was: {message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_keyword_fails() {
        let err = parse_rules("ALLOW: A -> B").unwrap_err();
        assert!(matches!(err, GridlockError::RuleParse { line: 1, .. }));
    }
}
