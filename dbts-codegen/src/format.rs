//! Whitespace normalization for generated code.
//!
//! The normalizer only touches layout: every line is re-indented from the
//! brace depth, runs of blank lines collapse to one and the result ends with
//! exactly one newline. Applying it to its own output is a no-op.

use crate::builder::Indent;

/// Normalize TypeScript source using 2-space indentation.
pub fn format_typescript(code: &str) -> String {
    format_with_indent(code, Indent::TYPESCRIPT)
}

/// Normalize brace-delimited source using the given indentation.
pub fn format_with_indent(code: &str, indent: Indent) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut depth = 0usize;
    let mut in_block_comment = false;
    let mut pending_blank = false;

    for raw in code.lines() {
        let line = raw.trim();
        if line.is_empty() {
            pending_blank = true;
            continue;
        }

        if std::mem::take(&mut pending_blank) && keeps_blank_before(&lines, line) {
            lines.push(String::new());
        }

        if in_block_comment {
            if line.contains("*/") {
                in_block_comment = false;
            }
            let prefix = if line.starts_with('*') { " " } else { "" };
            lines.push(format!("{}{}{}", indent.as_str().repeat(depth), prefix, line));
            continue;
        }

        if line.starts_with("/*") {
            in_block_comment = !line.contains("*/");
            lines.push(format!("{}{}", indent.as_str().repeat(depth), line));
            continue;
        }

        if line.starts_with("//") {
            lines.push(format!("{}{}", indent.as_str().repeat(depth), line));
            continue;
        }

        let (opens, closes) = count_braces(line);
        let leading_close = usize::from(line.starts_with('}'));
        let level = depth.saturating_sub(leading_close);
        lines.push(format!("{}{}", indent.as_str().repeat(level), line));
        depth = (depth + opens).saturating_sub(closes);
    }

    tracing::trace!(lines = lines.len(), "normalized generated code");

    let mut result = lines.join("\n");
    result.push('\n');
    result
}

/// A blank line survives only between two lines that are not the inside
/// edges of a brace pair.
fn keeps_blank_before(emitted: &[String], next: &str) -> bool {
    match emitted.last() {
        Some(prev) => !prev.trim_end().ends_with('{') && !next.starts_with('}'),
        None => false,
    }
}

/// Count `{` and `}` outside of string literals and trailing `//` comments.
fn count_braces(line: &str) -> (usize, usize) {
    let mut opens = 0;
    let mut closes = 0;
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                if c == '\\' {
                    chars.next();
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => quote = Some(c),
                '/' if chars.peek() == Some(&'/') => break,
                '{' => opens += 1,
                '}' => closes += 1,
                _ => {}
            },
        }
    }

    (opens, closes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindents_braces() {
        let code = "export interface User {\nid: number;\n      name?: string;\n}";
        assert_eq!(
            format_typescript(code),
            "export interface User {\n  id: number;\n  name?: string;\n}\n"
        );
    }

    #[test]
    fn test_collapses_blank_runs() {
        let code = "// a\n\n\n\n// b\n";
        assert_eq!(format_typescript(code), "// a\n\n// b\n");
    }

    #[test]
    fn test_drops_blank_lines_inside_brace_edges() {
        let code = "\n\nexport interface A {\n\n  id: number;\n\n}\n\n\n";
        assert_eq!(format_typescript(code), "export interface A {\n  id: number;\n}\n");
    }

    #[test]
    fn test_single_trailing_newline() {
        assert_eq!(format_typescript("const x = 1;"), "const x = 1;\n");
        assert_eq!(format_typescript("const x = 1;\n\n\n"), "const x = 1;\n");
        assert_eq!(format_typescript(""), "\n");
    }

    #[test]
    fn test_block_comment_continuation() {
        let code = "export interface A {\n/**\n* Primary key\n*/\nid: number;\n}\n";
        assert_eq!(
            format_typescript(code),
            "export interface A {\n  /**\n   * Primary key\n   */\n  id: number;\n}\n"
        );
    }

    #[test]
    fn test_ignores_braces_in_strings_and_comments() {
        let code = "const a = '{';\n// {\nconst b = 1;\n";
        assert_eq!(format_typescript(code), "const a = '{';\n// {\nconst b = 1;\n");
    }

    #[test]
    fn test_unbalanced_close_does_not_underflow() {
        let code = "}\n}\nconst x = 1;\n";
        assert_eq!(format_typescript(code), "}\n}\nconst x = 1;\n");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "export interface User {\n/** id */\n    id: number;\n\n\n  createdAt?: Date;\n}\n",
            "/**\n * Header\n *\n * Fields: 2\n */\n\n// import { Date } from './types';\n\nexport interface X {\n}\n",
            "  \n\t\nfoo {\nbar {\nbaz;\n}\n}\n",
            "",
            "a\r\n\r\nb",
        ];
        for sample in samples {
            let once = format_typescript(sample);
            assert_eq!(format_typescript(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_custom_indent() {
        let code = "interface A {\nx: number;\n}\n";
        assert_eq!(
            format_with_indent(code, Indent::Tab),
            "interface A {\n\tx: number;\n}\n"
        );
    }
}
