use crate::parser::code_parser::CodeParser;
use crate::parser::{find_node, ParseError};
use thiserror::Error;

/// Tolerant parsing failed, so the tree could not be searched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("declaration detection failed: {0}")]
pub struct DetectionError(#[from] pub ParseError);

/// Result of looking for a function or class declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Detected,
    NotDetected,
    Failed(DetectionError),
}

impl Detection {
    /// Only a positive detection counts; a failed detection reads as "no declaration"
    pub fn is_detected(&self) -> bool {
        matches!(self, Detection::Detected)
    }
}

/// Finds named function or class declarations anywhere in a snippet
#[derive(Debug, Clone, Default)]
pub struct DeclarationDetector {
    parser: CodeParser,
}

impl DeclarationDetector {
    pub fn new(parser: CodeParser) -> Self {
        Self { parser }
    }

    pub fn detect(&self, content: &str) -> Detection {
        let tree = match self.parser.parse_tolerant(content) {
            Ok(tree) => tree,
            Err(e) => return Detection::Failed(e.into()),
        };

        let kinds = self.parser.language().declaration_kinds();
        let found = find_node(&tree, |node| {
            kinds.contains(&node.kind()) && node.child_by_field_name("name").is_some()
        });

        match found {
            Some(_) => Detection::Detected,
            None => Detection::NotDetected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SourceLanguage;
    use std::time::Duration;

    #[test]
    fn test_detects_function_and_class() {
        let detector = DeclarationDetector::default();
        assert_eq!(detector.detect("function f() { return 1; }"), Detection::Detected);
        assert_eq!(detector.detect("class A { m() {} }"), Detection::Detected);
        assert_eq!(detector.detect("async function load() {}"), Detection::Detected);
        assert_eq!(detector.detect("function* gen() { yield 1; }"), Detection::Detected);
    }

    #[test]
    fn test_detects_nested_declaration() {
        let detector = DeclarationDetector::default();
        let code = "if (ready) {\n  function inner() {}\n}\n";
        assert!(detector.detect(code).is_detected());
    }

    #[test]
    fn test_expressions_are_not_declarations() {
        let detector = DeclarationDetector::default();
        assert_eq!(detector.detect("const x = 5;"), Detection::NotDetected);
        assert_eq!(detector.detect("const f = () => 1;"), Detection::NotDetected);
        assert_eq!(detector.detect("const g = function () {};"), Detection::NotDetected);
        assert_eq!(detector.detect(""), Detection::NotDetected);
    }

    #[test]
    fn test_tolerates_syntax_errors() {
        let detector = DeclarationDetector::default();
        let code = "function ok() { return 1; }\nfunction broken( {\n";
        assert!(CodeParser::default().parse_strict(code).is_err());
        assert!(detector.detect(code).is_detected());
    }

    #[test]
    fn test_python_declarations() {
        let detector = DeclarationDetector::new(CodeParser::new(SourceLanguage::Python));
        assert!(detector.detect("def f():\n    pass\n").is_detected());
        assert!(detector.detect("class A:\n    pass\n").is_detected());
        assert_eq!(detector.detect("x = 1\nprint(x)\n"), Detection::NotDetected);
    }

    #[test]
    fn test_failed_detection_is_not_a_declaration() {
        let code = "function f() {}\n".repeat(50_000);
        let parser = CodeParser::default().with_timeout(Duration::from_micros(1));
        let detection = DeclarationDetector::new(parser).detect(&code);

        assert_eq!(detection, Detection::Failed(DetectionError(ParseError::TimedOut)));
        assert!(!detection.is_detected());
    }
}
