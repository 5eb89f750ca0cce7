//! Exporter: writes a generated document, and optionally its JSON record, to disk.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::record::GeneratedScript;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Paths of the artifacts written for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPaths {
    pub markdown: PathBuf,
    pub json: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    export_json: bool,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>, export_json: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            export_json,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `<stem>.md` and, if enabled, `<stem>.json` into the output
    /// directory, creating it first. Existing artifacts are never
    /// overwritten: a clashing stem gets a `_2`, `_3`, ... suffix.
    pub fn export(&self, script: &GeneratedScript) -> Result<ExportedPaths, ExportError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|source| ExportError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let stem = self.unique_stem(&script.artifact_stem());

        let markdown = self.output_dir.join(format!("{}.md", stem));
        write_file(&markdown, &script.markdown)?;
        log::info!("Wrote design document: {}", markdown.display());

        let json = if self.export_json {
            let path = self.output_dir.join(format!("{}.json", stem));
            let body = serde_json::to_string_pretty(&script.record())?;
            write_file(&path, &body)?;
            log::info!("Wrote JSON record: {}", path.display());
            Some(path)
        } else {
            None
        };

        Ok(ExportedPaths { markdown, json })
    }

    fn unique_stem(&self, base: &str) -> String {
        let taken = |stem: &str| {
            self.output_dir.join(format!("{}.md", stem)).exists()
                || self.output_dir.join(format!("{}.json", stem)).exists()
        };

        if !taken(base) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}_{}", base, n);
            if !taken(&candidate) {
                log::debug!("Artifact stem '{}' taken, using '{}'", base, candidate);
                return candidate;
            }
            n += 1;
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    std::fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
