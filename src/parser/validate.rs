//! Strict-mode rules the tree-sitter grammars do not enforce.
//!
//! The grammars accept a superset of each language (JSX, statements in the
//! wrong context, Python 2 forms), so a tree without error nodes can still
//! be a program the language rejects.

use super::{find_node, has_child_kind, ParseError, SourceLanguage};
use tree_sitter::{Node, Tree};

const JS_FUNCTIONS: &[&str] = &[
    "function_declaration",
    "function",
    "function_expression",
    "generator_function_declaration",
    "generator_function",
    "arrow_function",
    "method_definition",
];

/// Scopes that cut off `break`/`continue` targets in JavaScript
const JS_JUMP_BOUNDARIES: &[&str] = &[
    "function_declaration",
    "function",
    "function_expression",
    "generator_function_declaration",
    "generator_function",
    "arrow_function",
    "method_definition",
    "class_static_block",
];

const JS_LOOPS: &[&str] = &[
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
];

const JS_BREAKABLE: &[&str] = &[
    "for_statement",
    "for_in_statement",
    "while_statement",
    "do_statement",
    "switch_statement",
];

const PY_LOOPS: &[&str] = &["for_statement", "while_statement"];
const PY_SCOPES: &[&str] = &["function_definition", "class_definition"];

/// Reject the first construct, in document order, that the language does not allow
pub(crate) fn check(
    tree: &Tree,
    language: SourceLanguage,
    source: &str,
    script_mode: bool,
) -> Result<(), ParseError> {
    let mut message = None;
    let found = find_node(tree, |node| {
        if !node.is_named() {
            return false;
        }
        message = match language {
            SourceLanguage::JavaScript => javascript_violation(node, source, script_mode),
            SourceLanguage::Python => python_violation(node),
        };
        message.is_some()
    });

    match (found, message) {
        (Some(node), Some(message)) => Err(ParseError::at(node, message.to_string())),
        _ => Ok(()),
    }
}

fn javascript_violation(node: Node<'_>, source: &str, script_mode: bool) -> Option<&'static str> {
    let kind = node.kind();
    if kind.starts_with("jsx_") {
        return Some("JSX is not JavaScript syntax");
    }

    match kind {
        "import_statement" | "export_statement" => {
            if !is_top_level(node) {
                Some("import and export may only appear at the top level")
            } else if script_mode {
                Some("import and export may only appear in module code")
            } else {
                None
            }
        }
        "return_statement" => enclosing(node, JS_FUNCTIONS, &["class_static_block"])
            .is_none()
            .then_some("return outside of a function"),
        "break_statement" => {
            if node.child_by_field_name("label").is_some() {
                enclosing(node, &["labeled_statement"], JS_JUMP_BOUNDARIES)
                    .is_none()
                    .then_some("undefined label")
            } else {
                enclosing(node, JS_BREAKABLE, JS_JUMP_BOUNDARIES)
                    .is_none()
                    .then_some("break outside of a loop or switch")
            }
        }
        "continue_statement" => {
            if node.child_by_field_name("label").is_some() {
                enclosing(node, &["labeled_statement"], JS_JUMP_BOUNDARIES)
                    .is_none()
                    .then_some("undefined label")
            } else {
                enclosing(node, JS_LOOPS, JS_JUMP_BOUNDARIES)
                    .is_none()
                    .then_some("continue outside of a loop")
            }
        }
        "yield_expression" => match enclosing(node, JS_FUNCTIONS, &[]) {
            Some(function) if is_generator(function) => None,
            _ => Some("yield outside of a generator"),
        },
        "await_expression" => match enclosing(node, JS_FUNCTIONS, &[]) {
            Some(function) if has_child_kind(function, "async") => None,
            Some(_) => Some("await is only valid in async functions"),
            None if script_mode => Some("await is only valid in async functions and modules"),
            None => None,
        },
        "variable_declarator" => {
            let lexical = node.parent().is_some_and(|p| p.kind() == "lexical_declaration");
            let name = node
                .child_by_field_name("name")
                .and_then(|n| source.get(n.start_byte()..n.end_byte()));
            (lexical && name == Some("let")).then_some("let is disallowed as a lexically bound name")
        }
        _ => None,
    }
}

fn python_violation(node: Node<'_>) -> Option<&'static str> {
    match node.kind() {
        "print_statement" => Some("Missing parentheses in call to 'print'"),
        "exec_statement" => Some("Missing parentheses in call to 'exec'"),
        "return_statement" => enclosing(node, &["function_definition"], &["class_definition"])
            .is_none()
            .then_some("'return' outside function"),
        "yield" => enclosing(node, &["function_definition", "lambda"], &["class_definition"])
            .is_none()
            .then_some("'yield' outside function"),
        "await" => match enclosing(node, &["function_definition"], &["class_definition"]) {
            Some(function) if has_child_kind(function, "async") => None,
            _ => Some("'await' outside async function"),
        },
        "break_statement" => enclosing(node, PY_LOOPS, PY_SCOPES)
            .is_none()
            .then_some("'break' outside loop"),
        "continue_statement" => enclosing(node, PY_LOOPS, PY_SCOPES)
            .is_none()
            .then_some("'continue' not properly in loop"),
        _ => None,
    }
}

/// Nearest ancestor whose kind is in `targets`, unless a `boundaries` kind comes first
fn enclosing<'t>(node: Node<'t>, targets: &[&str], boundaries: &[&str]) -> Option<Node<'t>> {
    let mut current = node.parent();
    while let Some(ancestor) = current {
        if targets.contains(&ancestor.kind()) {
            return Some(ancestor);
        }
        if boundaries.contains(&ancestor.kind()) {
            return None;
        }
        current = ancestor.parent();
    }
    None
}

fn is_top_level(node: Node<'_>) -> bool {
    node.parent().map_or(true, |parent| parent.parent().is_none())
}

fn is_generator(function: Node<'_>) -> bool {
    match function.kind() {
        "generator_function_declaration" | "generator_function" => true,
        "method_definition" => has_child_kind(function, "*"),
        _ => false,
    }
}
