pub mod code_parser;
mod validate;

use clap::ValueEnum;
use thiserror::Error;
use tree_sitter::{Language, Node, Tree};

/// Source language of the snippets being classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceLanguage {
    #[default]
    #[value(name = "javascript", alias = "js")]
    JavaScript,
    #[value(alias = "py")]
    Python,
}

impl SourceLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLanguage::JavaScript => "javascript",
            SourceLanguage::Python => "python",
        }
    }

    /// File extension (without the dot) of snippets written in this language
    pub fn extension(&self) -> &'static str {
        match self {
            SourceLanguage::JavaScript => "js",
            SourceLanguage::Python => "py",
        }
    }

    pub fn grammar(&self) -> Language {
        match self {
            SourceLanguage::JavaScript => tree_sitter_javascript::language(),
            SourceLanguage::Python => tree_sitter_python::language(),
        }
    }

    /// Node kinds that count as a named function or class declaration
    pub fn declaration_kinds(&self) -> &'static [&'static str] {
        match self {
            SourceLanguage::JavaScript => &[
                "function_declaration",
                "generator_function_declaration",
                "class_declaration",
            ],
            SourceLanguage::Python => &["function_definition", "class_definition"],
        }
    }

    /// Whether a blank (whitespace-only) snippet counts as a failed one
    pub fn blank_is_failure(&self) -> bool {
        matches!(self, SourceLanguage::Python)
    }
}

/// Why a parse did not produce an acceptable tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("source is blank")]
    Blank,

    #[error("parser timed out")]
    TimedOut,

    #[error("failed to load grammar: {0}")]
    Grammar(String),
}

impl ParseError {
    pub(crate) fn at(node: Node<'_>, message: String) -> Self {
        let position = node.start_position();
        ParseError::Syntax {
            line: position.row + 1,
            column: position.column + 1,
            message,
        }
    }
}

/// Whether `node` has a direct child of kind `kind`, usually a keyword token
pub(crate) fn has_child_kind(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == kind);
    found
}

/// Pre-order search over every node of `tree`, stopping at the first match
pub fn find_node<'t>(tree: &'t Tree, mut predicate: impl FnMut(Node<'t>) -> bool) -> Option<Node<'t>> {
    let mut cursor = tree.walk();
    loop {
        let node = cursor.node();
        if predicate(node) {
            return Some(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}
