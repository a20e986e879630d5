use super::writer::{csv_row, to_pretty_json, Artifact};
use crate::classifier::Outcome;
use crate::error::Result;
use crate::walker::SnippetRecord;
use serde::Serialize;
use std::path::Path;

/// Exclusive category of a Python snippet, checked in this order:
/// failed, declares a function or class, executable, import-only, other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PythonCategory {
    Successful,
    Failed,
    Executable,
    NoDefinition,
    OnlyImport,
}

impl PythonCategory {
    pub fn of(outcome: &Outcome) -> Self {
        if !outcome.parses() {
            return PythonCategory::Failed;
        }
        if outcome.has_declaration() {
            return PythonCategory::Successful;
        }

        let profile = outcome.statements.unwrap_or_default();
        if profile.executable {
            PythonCategory::Executable
        } else if profile.starts_with_import {
            PythonCategory::OnlyImport
        } else {
            PythonCategory::NoDefinition
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PythonCategory::Successful => "Successful",
            PythonCategory::Failed => "Failed",
            PythonCategory::Executable => "Executable",
            PythonCategory::NoDefinition => "No Function/Class Definition",
            PythonCategory::OnlyImport => "Only Import",
        }
    }
}

/// Python snippet paths per category, in traversal order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PythonCategorySet {
    #[serde(rename = "Successful")]
    pub successful: Vec<String>,
    #[serde(rename = "Failed")]
    pub failed: Vec<String>,
    #[serde(rename = "Executable")]
    pub executable: Vec<String>,
    #[serde(rename = "No Function/Class Definition")]
    pub no_definition: Vec<String>,
    #[serde(rename = "Only Import")]
    pub only_import: Vec<String>,
}

impl PythonCategorySet {
    pub fn from_records(records: &[SnippetRecord]) -> Self {
        let mut set = Self::default();
        for record in records {
            let path = record.path.display().to_string();
            let bucket = match PythonCategory::of(&record.outcome) {
                PythonCategory::Successful => &mut set.successful,
                PythonCategory::Failed => &mut set.failed,
                PythonCategory::Executable => &mut set.executable,
                PythonCategory::NoDefinition => &mut set.no_definition,
                PythonCategory::OnlyImport => &mut set.only_import,
            };
            bucket.push(path);
        }
        set
    }

    /// Buckets in report order
    pub fn buckets(&self) -> [(PythonCategory, &[String]); 5] {
        [
            (PythonCategory::Successful, self.successful.as_slice()),
            (PythonCategory::Failed, self.failed.as_slice()),
            (PythonCategory::Executable, self.executable.as_slice()),
            (PythonCategory::NoDefinition, self.no_definition.as_slice()),
            (PythonCategory::OnlyImport, self.only_import.as_slice()),
        ]
    }
}

pub fn render_artifact(artifact: Artifact, corpus_root: &Path, set: &PythonCategorySet) -> Result<Vec<u8>> {
    let contents = match artifact {
        Artifact::Categories => return to_pretty_json(set),
        Artifact::Complete => set
            .successful
            .iter()
            .map(|p| format!("{}\n", corpus_root.join(p).display()))
            .collect::<String>(),
        Artifact::Table => render_table(set),
        Artifact::Summary => render_summary(set),
    };
    Ok(contents.into_bytes())
}

/// One row per snippet, grouped by category
fn render_table(set: &PythonCategorySet) -> String {
    let mut out = csv_row(&["Code Snippet", "Category"]);
    for (category, paths) in set.buckets() {
        for path in paths {
            out.push_str(&csv_row(&[path.as_str(), category.label()]));
        }
    }
    out
}

fn render_summary(set: &PythonCategorySet) -> String {
    format!(
        "Number of Successful Snippets: {}\n\
         Number of Failed Snippets: {}\n\
         Number of Executable Snippets: {}\n\
         Number of Snippets Without Function/Class Definition: {}\n\
         Number of Snippets With Only Import Statements: {}\n",
        set.successful.len(),
        set.failed.len(),
        set.executable.len(),
        set.no_definition.len(),
        set.only_import.len()
    )
}
