use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for project operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{what} not found: '{path}'")]
    #[diagnostic(
        code(mirror::missing_input),
        help("check the [paths] section of mirror.toml, or run from the prototype root")
    )]
    MissingInput { what: &'static str, path: PathBuf },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(mirror::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(mirror::config_error))]
    Parse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// A required input that does not exist on disk
    pub fn missing(what: &'static str, path: impl Into<PathBuf>) -> Box<Self> {
        Box::new(Error::MissingInput {
            what,
            path: path.into(),
        })
    }

    /// Wrap an I/O failure on `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_names_path() {
        let err = Error::missing("types file", "src/types/index.ts");
        assert_eq!(
            err.to_string(),
            "types file not found: 'src/types/index.ts'"
        );
    }
}
