use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

const COMPONENT_EXTENSIONS: &[&str] = &["tsx", "jsx"];

/// Suffixes of files that live next to components but are not components
const SKIPPED_SUFFIXES: &[&str] = &[".test", ".spec", ".stories"];

/// A source file read into memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    /// Read a required input; a missing file is reported as `what`.
    pub fn read(path: impl AsRef<Path>, what: &'static str) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::missing(what, path));
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "read source");

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }
}

/// Every component file under `dir`, recursively, sorted by path.
pub fn discover_components(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::missing("components directory", dir));
    }

    let mut found = Vec::new();
    walk(dir, &mut found)?;
    found.sort();

    debug!(dir = %dir.display(), count = found.len(), "discovered components");
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_dir() {
            walk(&path, found)?;
        } else if is_component_file(&path) {
            found.push(path);
        }
    }

    Ok(())
}

fn is_component_file(path: &Path) -> bool {
    let has_extension = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| COMPONENT_EXTENSIONS.contains(&e));
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();

    has_extension && !SKIPPED_SUFFIXES.iter().any(|s| stem.ends_with(s))
}

/// Locate the component named `name` directly under `dir`.
///
/// Tries each known extension; when none exists the `.tsx` path is
/// reported as the expected one.
pub fn find_component(dir: &Path, name: &str) -> Result<PathBuf> {
    COMPONENT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|path| path.is_file())
        .ok_or_else(|| Error::missing("component", dir.join(format!("{name}.tsx"))))
}
