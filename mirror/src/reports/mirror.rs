//! Mirror report data structures.

use std::path::{Path, PathBuf};

use railmirror_codegen::{GenerateResult, PreviewFile};

use super::output::{Output, Report};

/// Report data from one mirror run.
#[derive(Debug)]
pub struct MirrorReport {
    /// Root of the generated Rails tree.
    pub output_dir: PathBuf,

    /// Mapping log appended to, when `--update-docs` was given.
    pub mapping_log: Option<PathBuf>,

    /// One entry per processed source file, in processing order.
    pub sources: Vec<SourceReport>,
}

/// What happened to one source file.
#[derive(Debug)]
pub struct SourceReport {
    pub source: PathBuf,
    /// Component name or model names mirrored from the file.
    pub subjects: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(GenerateResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl MirrorReport {
    pub fn new(output_dir: &Path, mapping_log: Option<&Path>) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            mapping_log: mapping_log.map(Path::to_path_buf),
            sources: Vec::new(),
        }
    }

    pub fn push(&mut self, source: SourceReport) {
        self.sources.push(source);
    }
}

impl Report for MirrorReport {
    fn render(&self, out: &mut dyn Output) {
        if self.sources.is_empty() {
            out.warning("no source files to mirror");
            return;
        }

        let mut previewed = 0;
        let mut written = 0;
        let mut kept = 0;

        for source in &self.sources {
            match &source.result {
                GenerationResult::Preview(files) => {
                    for file in files {
                        out.divider(&file.path.display().to_string());
                        out.preformatted(&file.content);
                    }
                    previewed += files.len();
                }
                GenerationResult::Written(result) => {
                    out.section(&format!(
                        "{} ({})",
                        source.source.display(),
                        source.subjects.join(", ")
                    ));
                    for path in &result.written {
                        out.added_item(&path.display().to_string());
                    }
                    for path in &result.skipped {
                        out.list_item(&format!("{} (kept existing)", path.display()));
                    }
                    out.newline();
                    written += result.written.len();
                    kept += result.skipped.len();
                }
            }
        }

        if previewed > 0 {
            out.divider("Summary");
            out.preformatted(&format!("{previewed} files would be generated"));
            return;
        }

        out.key_value(
            "Generated",
            &format!("{written} files under {}", self.output_dir.display()),
        );
        if kept > 0 {
            out.key_value("Kept", &format!("{kept} existing stubs"));
        }
        if let Some(log) = &self.mapping_log {
            out.key_value("Mapping log", &log.display().to_string());
        }
    }
}
