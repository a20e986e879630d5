use super::{find_node, validate, ParseError, SourceLanguage};
use std::time::Duration;
use tree_sitter::{Node, Parser, Tree};

/// Longest excerpt of offending source quoted in a syntax error
const EXCERPT_LEN: usize = 24;

/// Code parser using tree-sitter, in strict or tolerant mode
#[derive(Debug, Clone)]
pub struct CodeParser {
    language: SourceLanguage,
    script_mode: bool,
    timeout_micros: u64,
}

impl CodeParser {
    pub fn new(language: SourceLanguage) -> Self {
        Self {
            language,
            script_mode: true,
            timeout_micros: 0,
        }
    }

    /// Reject module-only syntax (`import`/`export`, top-level `await`) during strict parsing
    pub fn with_script_mode(mut self, script_mode: bool) -> Self {
        self.script_mode = script_mode;
        self
    }

    /// Give up on a single parse after `timeout`; zero means no limit
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_micros = u64::try_from(timeout.as_micros()).unwrap_or(u64::MAX);
        self
    }

    pub fn language(&self) -> SourceLanguage {
        self.language
    }

    /// Parse and keep going past syntax errors, returning a best-effort tree
    pub fn parse_tolerant(&self, content: &str) -> Result<Tree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(self.language.grammar())
            .map_err(|e| ParseError::Grammar(e.to_string()))?;
        parser.set_timeout_micros(self.timeout_micros);

        parser.parse(content, None).ok_or(ParseError::TimedOut)
    }

    /// Parse and fail on the first syntax violation, including constructs the
    /// grammar accepts but the language forbids in this context
    pub fn parse_strict(&self, content: &str) -> Result<Tree, ParseError> {
        let tree = self.parse_tolerant(content)?;
        let root = tree.root_node();

        if root.has_error() {
            if let Some(node) = find_node(&tree, |n| n.is_error() || n.is_missing()) {
                return Err(syntax_error(node, content));
            }
        }

        validate::check(&tree, self.language, content, self.script_mode)?;

        Ok(tree)
    }
}

impl Default for CodeParser {
    fn default() -> Self {
        Self::new(SourceLanguage::default())
    }
}

fn syntax_error(node: Node<'_>, source: &str) -> ParseError {
    if node.is_missing() {
        return ParseError::at(node, format!("missing \"{}\"", node.kind()));
    }

    let text = source
        .get(node.start_byte()..node.end_byte())
        .unwrap_or("")
        .lines()
        .next()
        .unwrap_or("")
        .trim();

    let message = if text.is_empty() {
        "unexpected end of input".to_string()
    } else {
        format!("unexpected \"{}\"", truncate(text, EXCERPT_LEN))
    };
    ParseError::at(node, message)
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
