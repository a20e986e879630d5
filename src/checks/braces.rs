/// Lexical brace balance check.
///
/// Every `{` and `}` counts, including ones inside string literals and
/// comments. Returns false as soon as a closer has no opener, otherwise
/// whether the nesting depth ends at zero.
pub fn is_balanced(content: &str) -> bool {
    let mut depth: usize = 0;
    for c in content.chars() {
        match c {
            '{' => depth += 1,
            '}' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_cases() {
        assert!(is_balanced(""));
        assert!(!is_balanced("{"));
        assert!(is_balanced("{}"));
        assert!(!is_balanced("}{"));
        assert!(is_balanced("{{}{}}"));
        assert!(!is_balanced("{}}"));
    }

    #[test]
    fn test_braces_in_strings_and_comments_count() {
        assert!(!is_balanced("const s = \"{\";"));
        assert!(!is_balanced("// }\nfunction f() {}"));
        assert!(is_balanced("const s = '{}';"));
    }

    #[test]
    fn test_non_brace_characters_do_not_matter() {
        let samples = ["", "{", "}{", "{{}}", "{}}{", "{{{"];
        for sample in samples {
            let expected = is_balanced(sample);
            let padded: String = sample
                .chars()
                .flat_map(|c| [c, 'x', '(', ']', '\n', 'é'])
                .collect();
            assert_eq!(is_balanced(&padded), expected, "sample {sample:?}");
            assert_eq!(is_balanced(&format!("let a = 1;{sample}// end")), expected);
        }
    }
}
