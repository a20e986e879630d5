use super::python::{self, PythonCategorySet};
use super::{CategorySet, Counts};
use crate::error::{ClassifierError, Result};
use crate::parser::SourceLanguage;
use crate::walker::SnippetRecord;
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Report files a run can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Artifact {
    /// Every category with its snippet paths, as JSON
    Categories,
    /// Complete (for Python: successful) snippets only, one root-prefixed path per line
    Complete,
    /// One CSV row per snippet
    Table,
    /// Labeled totals per category
    Summary,
}

impl Artifact {
    pub const ALL: [Artifact; 4] = [
        Artifact::Categories,
        Artifact::Complete,
        Artifact::Table,
        Artifact::Summary,
    ];

    pub fn file_name(&self, language: SourceLanguage) -> &'static str {
        match (language, self) {
            (SourceLanguage::JavaScript, Artifact::Categories) => "snippet_categories.json",
            (SourceLanguage::JavaScript, Artifact::Complete) => "complete_snippets.txt",
            (SourceLanguage::JavaScript, Artifact::Table) => "syntax_check_results.csv",
            (SourceLanguage::JavaScript, Artifact::Summary) => "syntax_check_summary.txt",
            (SourceLanguage::Python, Artifact::Categories) => "python_snippet_categories.json",
            (SourceLanguage::Python, Artifact::Complete) => "successful_python_snippets.txt",
            (SourceLanguage::Python, Artifact::Table) => "snippet_analysis_results.csv",
            (SourceLanguage::Python, Artifact::Summary) => "snippet_summary.txt",
        }
    }
}

/// Writes the selected artifacts for a finished walk.
///
/// JavaScript corpora get the four structural buckets; Python corpora get
/// the successful/failed/executable/import-only/no-definition split.
pub struct ReportWriter {
    output_dir: PathBuf,
    corpus_root: PathBuf,
    language: SourceLanguage,
    artifacts: Vec<Artifact>,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>, corpus_root: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            corpus_root: corpus_root.into(),
            language: SourceLanguage::default(),
            artifacts: Artifact::ALL.to_vec(),
        }
    }

    pub fn for_language(mut self, language: SourceLanguage) -> Self {
        self.language = language;
        self
    }

    /// Select artifacts, keeping the first occurrence of each
    pub fn with_artifacts(mut self, artifacts: &[Artifact]) -> Self {
        self.artifacts.clear();
        for artifact in artifacts {
            if !self.artifacts.contains(artifact) {
                self.artifacts.push(*artifact);
            }
        }
        self
    }

    /// Write every selected artifact and return the paths written
    pub fn write(&self, records: &[SnippetRecord]) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.output_dir).map_err(|source| ClassifierError::Write {
            path: self.output_dir.clone(),
            source,
        })?;

        let categories = CategorySet::from_records(records);
        let python_categories = match self.language {
            SourceLanguage::Python => Some(PythonCategorySet::from_records(records)),
            SourceLanguage::JavaScript => None,
        };
        let mut written = Vec::with_capacity(self.artifacts.len());

        for artifact in &self.artifacts {
            let contents = match &python_categories {
                Some(set) => python::render_artifact(*artifact, &self.corpus_root, set)?,
                None => self.render(*artifact, records, &categories)?,
            };

            let path = self.output_dir.join(artifact.file_name(self.language));
            fs::write(&path, contents).map_err(|source| ClassifierError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }

    fn render(&self, artifact: Artifact, records: &[SnippetRecord], categories: &CategorySet) -> Result<Vec<u8>> {
        let contents = match artifact {
            Artifact::Categories => return render_categories(categories),
            Artifact::Complete => render_complete_list(&self.corpus_root, categories),
            Artifact::Table => render_table(records),
            Artifact::Summary => render_summary(&categories.counts()),
        };
        Ok(contents.into_bytes())
    }
}

/// Category listing as JSON with four-space indentation
pub fn render_categories(categories: &CategorySet) -> Result<Vec<u8>> {
    to_pretty_json(categories)
}

pub(super) fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

pub fn render_complete_list(corpus_root: &Path, categories: &CategorySet) -> String {
    categories
        .complete
        .iter()
        .map(|p| format!("{}\n", corpus_root.join(p).display()))
        .collect()
}

pub fn render_table(records: &[SnippetRecord]) -> String {
    let mut out = csv_row(&["Code Snippet", "Syntax", "Function/Class", "Braces"]);
    for record in records {
        let outcome = &record.outcome;
        let path = record.path.display().to_string();
        out.push_str(&csv_row(&[
            path.as_str(),
            if outcome.parses() { "OK" } else { "Error" },
            if outcome.has_declaration() { "Yes" } else { "No" },
            if outcome.braces_balanced() { "Balanced" } else { "Unbalanced" },
        ]));
    }
    out
}

pub fn render_summary(counts: &Counts) -> String {
    format!(
        "Total files with syntax errors: {}\n\
         Total files with function or class definitions: {}\n\
         Total files with balanced braces: {}\n\
         Total files that seem complete: {}\n",
        counts.syntax_errors, counts.declarations, counts.balanced_braces, counts.complete
    )
}

/// Every field quoted, embedded quotes doubled
pub(super) fn csv_row(fields: &[&str]) -> String {
    let quoted: Vec<String> = fields
        .iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect();
    format!("{}\n", quoted.join(","))
}
