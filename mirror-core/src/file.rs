use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Trait for artifacts produced by the generator.
///
/// `render` is the single source of the artifact's text: preview and write
/// both go through it, so a dry run prints exactly what a real run writes.
pub trait GeneratedFile {
    /// Path relative to the output directory
    fn relative_path(&self) -> PathBuf;

    /// Rules for writing this artifact
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the artifact content
    fn render(&self) -> String;

    /// Full path under the given output directory
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    /// Write the artifact under `base` according to its rules
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.render())?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}

/// Append `content` to `path`, creating the file and its parents if missing.
pub fn append_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open '{}'", path.display()))?;
    file.write_all(content.as_bytes())
        .wrap_err_with(|| format!("failed to append to '{}'", path.display()))
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// Rules that determine how an artifact is written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (mirrored classes, templates, models)
    #[default]
    Always,
    /// Only create if the file doesn't exist (hand-edited stubs)
    IfMissing,
}
