pub mod python;
pub mod writer;

use crate::walker::SnippetRecord;
use serde::Serialize;

/// Snippet paths grouped by category, in traversal order.
///
/// `SyntaxError` never shares a path with the other buckets, and
/// `Complete` is always a subset of both `HasFunctionOrClass` and
/// `BalancedBraces`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorySet {
    #[serde(rename = "SyntaxError")]
    pub syntax_error: Vec<String>,
    #[serde(rename = "HasFunctionOrClass")]
    pub has_function_or_class: Vec<String>,
    #[serde(rename = "BalancedBraces")]
    pub balanced_braces: Vec<String>,
    #[serde(rename = "Complete")]
    pub complete: Vec<String>,
}

impl CategorySet {
    pub fn from_records(records: &[SnippetRecord]) -> Self {
        let mut set = Self::default();
        for record in records {
            let path = record.path.display().to_string();
            let outcome = &record.outcome;

            if !outcome.parses() {
                set.syntax_error.push(path);
                continue;
            }
            if outcome.has_declaration() {
                set.has_function_or_class.push(path.clone());
            }
            if outcome.braces_balanced() {
                set.balanced_braces.push(path.clone());
            }
            if outcome.is_complete() {
                set.complete.push(path);
            }
        }
        set
    }

    pub fn counts(&self) -> Counts {
        Counts {
            syntax_errors: self.syntax_error.len(),
            declarations: self.has_function_or_class.len(),
            balanced_braces: self.balanced_braces.len(),
            complete: self.complete.len(),
        }
    }
}

/// Corpus-level totals, always derived from a [`CategorySet`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub syntax_errors: usize,
    pub declarations: usize,
    pub balanced_braces: usize,
    pub complete: usize,
}
