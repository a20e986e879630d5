use crate::checks::{is_balanced, DeclarationDetector, Detection, StatementProfile};
use crate::parser::code_parser::CodeParser;
use crate::parser::{ParseError, SourceLanguage};

/// Structural checks for a single snippet.
///
/// A snippet that fails the strict parse is not checked further, so
/// `declaration` and `braces` are `None` ("not computed") in that case.
/// Completeness requires a successful strict parse, a detected
/// declaration and balanced braces.
///
/// `statements` is only profiled for Python, whose reports sort snippets
/// without declarations by what they do instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub parse: Result<(), ParseError>,
    pub declaration: Option<Detection>,
    pub braces: Option<bool>,
    pub statements: Option<StatementProfile>,
}

impl Outcome {
    fn unparsed(error: ParseError) -> Self {
        Self {
            parse: Err(error),
            declaration: None,
            braces: None,
            statements: None,
        }
    }

    pub fn parses(&self) -> bool {
        self.parse.is_ok()
    }

    pub fn has_declaration(&self) -> bool {
        self.declaration.as_ref().is_some_and(Detection::is_detected)
    }

    pub fn braces_balanced(&self) -> bool {
        self.braces.unwrap_or(false)
    }

    pub fn is_complete(&self) -> bool {
        self.parses() && self.has_declaration() && self.braces_balanced()
    }
}

/// Runs the strict parse, then the declaration and brace checks
#[derive(Debug, Clone, Default)]
pub struct SnippetClassifier {
    parser: CodeParser,
    detector: DeclarationDetector,
}

impl SnippetClassifier {
    pub fn new(parser: CodeParser) -> Self {
        Self {
            detector: DeclarationDetector::new(parser.clone()),
            parser,
        }
    }

    pub fn classify(&self, content: &str) -> Outcome {
        let language = self.parser.language();
        if language.blank_is_failure() && content.trim().is_empty() {
            return Outcome::unparsed(ParseError::Blank);
        }

        let tree = match self.parser.parse_strict(content) {
            Ok(tree) => tree,
            Err(e) => return Outcome::unparsed(e),
        };

        let statements = match language {
            SourceLanguage::Python => Some(StatementProfile::of(&tree)),
            SourceLanguage::JavaScript => None,
        };

        Outcome {
            parse: Ok(()),
            declaration: Some(self.detector.detect(content)),
            braces: Some(is_balanced(content)),
            statements,
        }
    }
}
