use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE: &str = "mirror.toml";

/// Process-wide configuration, built once at startup.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub paths: Paths,
}

/// Fixed input and output locations.
///
/// Relative paths are resolved against the directory holding the config
/// file, or the working directory when running on defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Paths {
    /// Directory scanned for `*.tsx` / `*.jsx` components
    pub components: PathBuf,
    /// Type declarations file the models are inferred from
    pub types: PathBuf,
    /// Optional directory of override templates
    pub templates: PathBuf,
    /// Root of the generated Rails tree
    pub output: PathBuf,
    /// Markdown log appended to with `--update-docs`
    pub mapping_log: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            components: PathBuf::from("src/components"),
            types: PathBuf::from("src/types/index.ts"),
            templates: PathBuf::from("rails_templates"),
            output: PathBuf::from("rails"),
            mapping_log: PathBuf::from("docs/component-mapping.md"),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicitly named file must exist. Without one, `mirror.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(Error::missing("config file", path)),
            Some(path) => Self::open(path),
            None if Path::new(CONFIG_FILE).exists() => Self::open(CONFIG_FILE),
            None => {
                debug!("no {CONFIG_FILE} found, using default paths");
                Ok(Self::default())
            }
        }
    }

    /// Open and parse a config file, resolving paths against its directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_str_with_filename(&content, &path.display().to_string())?;

        let base = path.parent().unwrap_or(Path::new(""));
        debug!(config = %path.display(), "loaded configuration");
        Ok(config.rebased(base))
    }

    /// Parse config content, using `filename` for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    fn rebased(self, base: &Path) -> Self {
        let join = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        let Paths {
            components,
            types,
            templates,
            output,
            mapping_log,
        } = self.paths;

        Self {
            paths: Paths {
                components: join(components),
                types: join(types),
                templates: join(templates),
                output: join(output),
                mapping_log: join(mapping_log),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.paths.components, PathBuf::from("src/components"));
        assert_eq!(config.paths.types, PathBuf::from("src/types/index.ts"));
        assert_eq!(config.paths.output, PathBuf::from("rails"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_str_with_filename(
            "[paths]\noutput = \"mirror\"\n",
            "mirror.toml",
        )
        .unwrap();
        assert_eq!(config.paths.output, PathBuf::from("mirror"));
        assert_eq!(config.paths.templates, PathBuf::from("rails_templates"));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = Config::from_str_with_filename("[paths]\noutptu = \"x\"\n", "mirror.toml")
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_open_resolves_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mirror.toml");
        fs::write(&path, "[paths]\ncomponents = \"app/ui\"\n").unwrap();

        let config = Config::open(&path).unwrap();

        assert_eq!(config.paths.components, temp.path().join("app/ui"));
        assert_eq!(config.paths.types, temp.path().join("src/types/index.ts"));
    }

    #[test]
    fn test_explicit_missing_config_is_fatal() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");

        let err = Config::load(Some(&missing)).unwrap_err();

        match *err {
            Error::MissingInput { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
