//! Markdown log of which source produced which artifacts.

use std::path::{Path, PathBuf};

use eyre::Result;
use railmirror_core::append_file;
use tracing::debug;

use crate::CodeBuilder;

/// One appended section of the mapping log.
#[derive(Debug, Clone)]
pub struct MappingEntry {
    /// Source file the artifacts were mirrored from
    pub source: PathBuf,
    /// Component name, or the model names for a types file
    pub subjects: Vec<String>,
    /// Artifact paths relative to the output directory
    pub artifacts: Vec<PathBuf>,
}

impl MappingEntry {
    pub fn new(source: impl Into<PathBuf>, subjects: Vec<String>, artifacts: Vec<PathBuf>) -> Self {
        Self {
            source: source.into(),
            subjects,
            artifacts,
        }
    }

    /// Render the section. Always ends with a blank line so consecutive
    /// entries stay separated.
    pub fn render(&self) -> String {
        let subjects = self
            .subjects
            .iter()
            .map(|s| format!("`{s}`"))
            .collect::<Vec<_>>()
            .join(", ");

        let section = CodeBuilder::new()
            .line(&format!("## {}", self.source.display()))
            .blank()
            .line(&format!("- Mirrors: {subjects}"))
            .line("- Generated:")
            .indent()
            .each(&self.artifacts, |b, path| {
                b.line(&format!("- `{}`", path.display()))
            })
            .dedent()
            .build();

        format!("{section}\n\n")
    }

    /// Append this entry to the log at `path`, creating it if needed.
    pub fn append(&self, path: &Path) -> Result<()> {
        append_file(path, &self.render())?;
        debug!(log = %path.display(), source = %self.source.display(), "appended mapping entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn entry() -> MappingEntry {
        MappingEntry::new(
            "src/components/TaskCard.tsx",
            vec!["TaskCard".into()],
            vec![
                PathBuf::from("app/components/task_card_component.rb"),
                PathBuf::from("app/javascript/controllers/task_card_controller.js"),
            ],
        )
    }

    #[test]
    fn test_render_section() {
        assert_eq!(
            entry().render(),
            "## src/components/TaskCard.tsx\n\
             \n\
             - Mirrors: `TaskCard`\n\
             - Generated:\n  \
             - `app/components/task_card_component.rb`\n  \
             - `app/javascript/controllers/task_card_controller.js`\n\
             \n"
        );
    }

    #[test]
    fn test_append_accumulates() {
        let temp = TempDir::new().unwrap();
        let log = temp.path().join("docs/component-mapping.md");

        entry().append(&log).unwrap();
        entry().append(&log).unwrap();

        let text = fs::read_to_string(&log).unwrap();
        assert_eq!(text, entry().render().repeat(2));
    }
}
