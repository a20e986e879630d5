use crate::classifier::{Outcome, SnippetClassifier};
use crate::error::{ClassifierError, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// Classification of one snippet, keyed by its path relative to the corpus root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRecord {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Walks a corpus directory and classifies every file with the target extension
#[derive(Debug, Clone)]
pub struct CorpusWalker {
    classifier: SnippetClassifier,
    extension: String,
    respect_ignore: bool,
}

impl CorpusWalker {
    pub fn new(classifier: SnippetClassifier, extension: impl Into<String>) -> Self {
        Self {
            classifier,
            extension: extension.into().trim_start_matches('.').to_string(),
            respect_ignore: false,
        }
    }

    /// Honor .gitignore/.ignore files and skip hidden entries
    pub fn respect_ignore(mut self, yes: bool) -> Self {
        self.respect_ignore = yes;
        self
    }

    /// Classify every matching file under `root`, depth-first in file-name order.
    ///
    /// Any enumeration or read failure aborts the whole walk.
    pub fn walk(&self, root: &Path) -> Result<Vec<SnippetRecord>> {
        if !root.is_dir() {
            return Err(ClassifierError::RootNotDirectory(root.to_path_buf()));
        }

        tracing::info!("Classifying *.{} files under {}", self.extension, root.display());

        let walker = WalkBuilder::new(root)
            .standard_filters(self.respect_ignore)
            .follow_links(true)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut records = Vec::new();
        for entry in walker {
            let entry = entry?;
            if entry.file_type().map_or(true, |ft| !ft.is_file()) {
                continue;
            }

            let path = entry.path();
            if !self.matches(path) {
                tracing::trace!("Skipping {}", path.display());
                continue;
            }

            let bytes = fs::read(path).map_err(|source| ClassifierError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let content = String::from_utf8_lossy(&bytes);
            let outcome = self.classifier.classify(&content);

            let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            log_outcome(&relative, &outcome);
            records.push(SnippetRecord {
                path: relative,
                outcome,
            });
        }

        tracing::info!("Classified {} files", records.len());
        Ok(records)
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension)
    }
}

fn log_outcome(path: &Path, outcome: &Outcome) {
    use crate::checks::Detection;

    match (&outcome.parse, &outcome.declaration) {
        (Err(e), _) => tracing::debug!("{}: parse error at {}", path.display(), e),
        (Ok(()), Some(Detection::Failed(e))) => {
            tracing::warn!("{}: {}; counting as no declaration", path.display(), e)
        }
        _ => tracing::debug!(
            "{}: declaration={} balanced={} complete={}",
            path.display(),
            outcome.has_declaration(),
            outcome.braces_balanced(),
            outcome.is_complete()
        ),
    }
}
