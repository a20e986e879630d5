use crate::parser::{find_node, has_child_kind};
use tree_sitter::{Node, Tree};

const IMPORT_KINDS: &[&str] = &[
    "import_statement",
    "import_from_statement",
    "future_import_statement",
];

/// What a parsed Python module does besides declaring functions or classes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementProfile {
    /// A loop, conditional, `with`, plain assignment or expression statement appears anywhere
    pub executable: bool,
    /// The first statement is an import
    pub starts_with_import: bool,
}

impl StatementProfile {
    pub fn of(tree: &Tree) -> Self {
        let root = tree.root_node();
        let first_statement = {
            let mut cursor = root.walk();
            let first = root
                .named_children(&mut cursor)
                .find(|child| child.kind() != "comment");
            first
        };

        Self {
            executable: find_node(tree, is_executable).is_some(),
            starts_with_import: first_statement.is_some_and(|s| IMPORT_KINDS.contains(&s.kind())),
        }
    }
}

fn is_executable(node: Node<'_>) -> bool {
    match node.kind() {
        "if_statement" | "while_statement" => true,
        // `async for` and `async with` do not count
        "for_statement" | "with_statement" => !has_child_kind(node, "async"),
        "expression_statement" => match node.named_child(0) {
            // Augmented and annotated assignments are separate statement kinds
            Some(inner) if inner.kind() == "augmented_assignment" => false,
            Some(inner) if inner.kind() == "assignment" => inner.child_by_field_name("type").is_none(),
            _ => true,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::code_parser::CodeParser;
    use crate::parser::SourceLanguage;

    fn profile(code: &str) -> StatementProfile {
        let tree = CodeParser::new(SourceLanguage::Python).parse_strict(code).unwrap();
        StatementProfile::of(&tree)
    }

    #[test]
    fn test_executable_statements() {
        for code in [
            "x = 1\n",
            "print(1)\n",
            "if x:\n    pass\n",
            "for i in range(3):\n    pass\n",
            "while False:\n    pass\n",
            "with open(p) as f:\n    pass\n",
            "\"\"\"Docstring only.\"\"\"\n",
        ] {
            assert!(profile(code).executable, "{code:?}");
        }
    }

    #[test]
    fn test_non_executable_statements() {
        for code in ["pass\n", "x += 1\n", "x: int = 1\n", "import os\n", "# note\n"] {
            assert!(!profile(code).executable, "{code:?}");
        }
    }

    #[test]
    fn test_starts_with_import() {
        assert!(profile("import os\n").starts_with_import);
        assert!(profile("# header\nfrom os import path\nx = 1\n").starts_with_import);
        assert!(!profile("x = 1\nimport os\n").starts_with_import);
        assert!(!profile("").starts_with_import);
    }
}
