//! Declared fields of interfaces and object type aliases.

use serde::Serialize;

use crate::patterns::{DECLARATION, FIELD};

/// A single declared member, e.g. `title?: string`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub optional: bool,
    /// The declared type exactly as written (trimmed)
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, optional: bool, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional,
            ty: ty.into(),
        }
    }

    /// Whether the declared type is a function signature (a callback prop).
    pub fn is_callback(&self) -> bool {
        self.ty.contains("=>")
    }
}

/// An `interface` or object `type` declaration found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Byte offset of the declaration keyword
    pub offset: usize,
    pub fields: Vec<Field>,
}

/// Find every interface / object type declaration, in source order.
pub fn declarations(source: &str) -> Vec<Declaration> {
    DECLARATION
        .captures_iter(source)
        .filter_map(|caps| {
            let name = caps.get(1).or_else(|| caps.get(2))?;
            let body = caps.get(3).map_or("", |m| m.as_str());
            Some(Declaration {
                name: name.as_str().to_string(),
                offset: caps.get(0).map_or(0, |m| m.start()),
                fields: parse_fields(body),
            })
        })
        .collect()
}

/// Parse the members of a declaration body.
///
/// The body is split on newlines and semicolons; each segment that looks
/// like `name?: type` becomes a field. Anything else is skipped.
pub fn parse_fields(body: &str) -> Vec<Field> {
    body.split(['\n', ';'])
        .filter_map(|segment| {
            let caps = FIELD.captures(segment)?;
            Some(Field::new(&caps[1], caps.get(2).is_some(), &caps[3]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields_multiline() {
        let fields = parse_fields(
            "\n  id: string;\n  title?: string;\n  readonly count: number,\n  onClose: () => void\n",
        );

        assert_eq!(
            fields,
            vec![
                Field::new("id", false, "string"),
                Field::new("title", true, "string"),
                Field::new("count", false, "number"),
                Field::new("onClose", false, "() => void"),
            ]
        );
        assert!(fields[3].is_callback());
    }

    #[test]
    fn test_parse_fields_single_line() {
        let fields = parse_fields(" label: string; disabled?: boolean ");
        assert_eq!(
            fields,
            vec![
                Field::new("label", false, "string"),
                Field::new("disabled", true, "boolean"),
            ]
        );
    }

    #[test]
    fn test_parse_fields_skips_noise() {
        let fields = parse_fields("\n  // the owner\n  /** docs */\n  [key: string]: unknown;\n");
        assert!(fields.is_empty());
    }

    #[test]
    fn test_declarations_in_order() {
        let decls = declarations(
            "export interface User extends Base {\n  id: string;\n}\ntype Tag = { label: string }\n",
        );

        let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["User", "Tag"]);
        assert!(decls[0].offset < decls[1].offset);
        assert_eq!(decls[1].fields, vec![Field::new("label", false, "string")]);
    }

    #[test]
    fn test_nested_braces_cut_region_short() {
        let decls = declarations("interface Props {\n  style: { color: string };\n  size: number;\n}");

        // Region ends at the first closing brace
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].fields, vec![Field::new("style", false, "{ color: string")]);
    }
}
