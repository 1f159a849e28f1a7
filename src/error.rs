// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridlockError {
    #[error("rule parse error at line {line}: {message}")]
    RuleParse { line: usize, message: String },

    #[error("RESTRICT rule '{rule}' cannot be validated on its own; validate its rule group")]
    UngroupedRestrict { rule: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, GridlockError>;
