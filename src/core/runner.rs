//! Single and batch runs: request → generator → exporter.
//!
//! Batch mode repeats the single-document flow in order and stops at the
//! first failure.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::export::{ExportError, ExportedPaths, Exporter};
use crate::core::generator::ScriptGenerator;
use crate::core::template::TemplateError;
use crate::schema::record::GeneratedScript;
use crate::schema::request::{
    BatchDescriptor, BatchError, GenerationRequest, DEFAULT_OUTPUT_DIR,
};
use crate::schema::tables::ContentTables;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    #[error("batch descriptor error: {0}")]
    Batch(#[from] BatchError),
    #[error("batch item {index} failed: {source}")]
    BatchItem {
        index: usize,
        #[source]
        source: Box<RunError>,
    },
}

/// Settings shared by every document in a run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Used when a request does not name its own output directory.
    pub default_output: PathBuf,
    pub export_json: bool,
    /// Base seed; batch item `i` is seeded with `seed + i`.
    pub seed: Option<u64>,
    /// Fixed generation time; the clock is read per document when unset.
    pub generated_at: Option<NaiveDateTime>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            default_output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            export_json: false,
            seed: None,
            generated_at: None,
        }
    }
}

/// What one run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub script: GeneratedScript,
    pub paths: ExportedPaths,
}

/// Generate and export one document.
pub fn run_request(
    tables: &ContentTables,
    request: &GenerationRequest,
    options: &RunOptions,
) -> Result<RunOutcome, RunError> {
    generate_and_export(tables, request, options, options.seed)
}

/// Generate and export every document in `batch`, in order.
pub fn run_batch(
    tables: &ContentTables,
    batch: &BatchDescriptor,
    options: &RunOptions,
) -> Result<Vec<RunOutcome>, RunError> {
    log::info!("Running batch of {} documents", batch.games.len());

    let mut outcomes = Vec::with_capacity(batch.games.len());
    for (index, request) in batch.games.iter().enumerate() {
        let seed = options.seed.map(|s| s.wrapping_add(index as u64));
        let outcome = generate_and_export(tables, request, options, seed).map_err(|e| {
            RunError::BatchItem {
                index,
                source: Box::new(e),
            }
        })?;
        log::info!(
            "Batch item {}/{} done: {}",
            index + 1,
            batch.games.len(),
            outcome.paths.markdown.display()
        );
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Load a batch descriptor file and run every document in it.
pub fn run_batch_file(
    tables: &ContentTables,
    path: &Path,
    options: &RunOptions,
) -> Result<Vec<RunOutcome>, RunError> {
    let batch = BatchDescriptor::load(path)?;
    run_batch(tables, &batch, options)
}

fn generate_and_export(
    tables: &ContentTables,
    request: &GenerationRequest,
    options: &RunOptions,
    seed: Option<u64>,
) -> Result<RunOutcome, RunError> {
    let mut builder = ScriptGenerator::builder(tables).request(request);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    if let Some(at) = options.generated_at {
        builder = builder.generated_at(at);
    }
    let mut generator = builder.build();
    let script = generator.generate()?;

    let output_dir = request
        .output
        .clone()
        .unwrap_or_else(|| options.default_output.clone());
    let paths = Exporter::new(output_dir, options.export_json).export(&script)?;

    Ok(RunOutcome { script, paths })
}
