//! Code builder for multi-line placeholder values.

/// One indentation level; Ruby, ERB, CSS and Stimulus all use two spaces
const INDENT: &str = "  ";

/// Fluent API for building indented lines of Ruby, ERB, CSS or JavaScript.
///
/// Placeholder values are spliced into templates where a line already ends,
/// so [`CodeBuilder::build`] returns the lines without a trailing newline.
///
/// # Example
///
/// ```
/// use railmirror_codegen::CodeBuilder;
///
/// let code = CodeBuilder::nested(1)
///     .line("def call")
///     .indent()
///     .line("render_inline")
///     .dedent()
///     .line("end")
///     .build();
///
/// assert_eq!(code, "  def call\n    render_inline\n  end");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    lines: Vec<String>,
}

impl CodeBuilder {
    /// Create a builder at indentation level 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that starts `level` indents deep, for values
    /// spliced into the body of a class or element.
    pub fn nested(level: usize) -> Self {
        Self {
            indent_level: level,
            ..Self::default()
        }
    }

    /// Add a line with the current indentation.
    pub fn line(mut self, s: &str) -> Self {
        let mut line = INDENT.repeat(self.indent_level);
        line.push_str(s);
        self.lines.push(line);
        self
    }

    /// Add an empty line.
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block: header line, indented body, closing line.
    pub fn block<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and join the lines with `\n`.
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        assert_eq!(CodeBuilder::new().line("has_many :tags").build(), "has_many :tags");
    }

    #[test]
    fn test_nested_block() {
        let code = CodeBuilder::nested(1)
            .block("connect() {", "}", |b| b.line("this.element.hidden = false"))
            .build();

        assert_eq!(
            code,
            "  connect() {\n    this.element.hidden = false\n  }"
        );
    }

    #[test]
    fn test_blank_has_no_indentation() {
        let code = CodeBuilder::nested(1).line("a").blank().line("b").build();
        assert_eq!(code, "  a\n\n  b");
    }

    #[test]
    fn test_each_and_when() {
        let builder = CodeBuilder::nested(1)
            .each(["author", "project"], |b, name| {
                b.line(&format!("belongs_to :{name}"))
            })
            .when(false, |b| b.line("never"));

        assert_eq!(builder.build(), "  belongs_to :author\n  belongs_to :project");
    }

    #[test]
    fn test_empty_builds_empty_string() {
        assert_eq!(CodeBuilder::nested(2).build(), "");
    }
}
