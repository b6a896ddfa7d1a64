//! Identifier case converters shared by the generators.
//!
//! Word boundaries are lower→upper (`userName`), acronym→word
//! (`HTMLParser`) and letter↔digit (`item2`). Existing `_`, `-` and spaces
//! are mapped to the target separator, and no separator is ever inserted
//! at the start or directly after another separator, so converting an
//! already-converted string is a no-op.

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | ' ')
}

fn is_boundary(prev: char, c: char, next: Option<char>) -> bool {
    if c.is_uppercase() {
        return prev.is_lowercase()
            || prev.is_ascii_digit()
            || (prev.is_uppercase() && next.is_some_and(char::is_lowercase));
    }
    (c.is_ascii_digit() && prev.is_alphabetic()) || (c.is_alphabetic() && prev.is_ascii_digit())
}

fn separate(s: &str, sep: char) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            out.push(sep);
            continue;
        }
        if i > 0 {
            let prev = chars[i - 1];
            if !is_separator(prev) && is_boundary(prev, c, chars.get(i + 1).copied()) {
                out.push(sep);
            }
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Convert a string to snake_case (e.g., "UserProfile" -> "user_profile")
pub fn to_snake_case(s: &str) -> String {
    separate(s, '_')
}

/// Convert a string to kebab-case (e.g., "UserProfile" -> "user-profile")
pub fn to_kebab_case(s: &str) -> String {
    separate(s, '-')
}

/// Convert a string to PascalCase (e.g., "author_id" -> "AuthorId")
pub fn to_pascal_case(s: &str) -> String {
    to_snake_case(s)
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}
