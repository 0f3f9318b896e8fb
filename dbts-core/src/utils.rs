//! Shared utility functions for code generation.

/// Convert a snake_case identifier to camelCase (e.g., "user_name" -> "userName").
///
/// Only an underscore followed by a lowercase ASCII letter is folded; every
/// other character is kept as is. A leading uppercase ASCII letter is then
/// lowered, so `"Id"` becomes `"id"` and `"_id"` becomes `"id"`.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(next)) if next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }

    match result.chars().next() {
        Some(first) if first.is_ascii_uppercase() => {
            result.replace_range(..1, &first.to_ascii_lowercase().to_string());
            result
        }
        _ => result,
    }
}

/// Check whether `s` can be used as a bare TypeScript identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Words that cannot name a TypeScript interface.
const TYPESCRIPT_RESERVED_WORDS: &[&str] = &[
    // Reserved words
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
    // Strict mode reserved words
    "await", "implements", "interface", "let", "package", "private", "protected", "public",
    "static", "yield",
    // Predefined type names
    "any", "bigint", "boolean", "never", "number", "object", "string", "symbol", "undefined",
    "unknown",
];

/// Check if a name is reserved in TypeScript type position.
pub fn is_reserved_word(name: &str) -> bool {
    TYPESCRIPT_RESERVED_WORDS.contains(&name)
}
