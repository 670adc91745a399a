//! Command-line interface for running operation pipelines over grid documents

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;

use crate::io::configuration::{DOCUMENT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::serialization::{read_grid_file, read_task_file, write_document, write_grid_file};
use crate::io::session::{GridProgram, Operation, Pipeline};
use crate::spatial::grid::Grid;

#[derive(Parser, Debug)]
#[command(name = "gridtools")]
#[command(
    author,
    version,
    about = "Apply grid transformation pipelines to JSON grid and task documents"
)]
/// Command-line arguments for the grid pipeline tool
pub struct Cli {
    /// Input JSON document or directory of documents
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Operation to apply, repeatable and applied in order
    /// (rotate-cw, rotate-ccw, flip-vertical, flip-horizontal, transpose,
    /// crop, collapse, non-empty-half, layer, subdivide:N)
    #[arg(short = 'o', long = "op", value_name = "OPERATION")]
    pub operations: Vec<Operation>,

    /// Treat documents as tasks with train/test pairs
    #[arg(short, long)]
    pub task: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process documents even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pipeline built from the requested operations
    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.operations.clone())
    }
}

/// Orchestrates batch processing of documents with progress tracking
pub struct FileProcessor {
    cli: Cli,
    pipeline: Pipeline,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let pipeline = cli.pipeline();

        Self {
            cli,
            pipeline,
            progress_manager,
        }
    }

    /// Process documents according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid or a document fails to
    /// load, run or save
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;
        if files.is_empty() {
            tracing::info!(path = %self.cli.target.display(), "no documents to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(())
    }

    /// Documents the target resolves to, sorted, without previous outputs
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the target is neither a JSON file nor a
    /// directory, or `FileSystem` if the directory cannot be read
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_document(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a JSON document",
                ));
            }
            return Ok(self
                .should_process_file(target)
                .then(|| target.clone())
                .into_iter()
                .collect());
        }

        if !target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a JSON document or a directory",
            ));
        }

        let read_error = |source: std::io::Error| GridError::FileSystem {
            path: target.clone(),
            operation: "list directory",
            source,
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(target).map_err(read_error)? {
            let path = entry.map_err(read_error)?.path();
            if is_document(&path) && !is_output(&path) && self.should_process_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }
        let exists = Self::output_path(input_path).exists();
        if exists {
            tracing::info!(input = %input_path.display(), "skipping, output exists");
        }
        !exists
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::output_path(input_path);

        if self.cli.task {
            let task = read_task_file(input_path)?;
            let pairs: Vec<_> = task.pairs().collect();
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_document(index, input_path, pairs.len());
            }

            let mut outputs: Vec<Grid> = Vec::with_capacity(pairs.len());
            let mut solved = 0;
            for pair in &pairs {
                let result = self.pipeline.run(pair.input.clone())?;
                if pair.output.as_ref() == Some(&result) {
                    solved += 1;
                }
                outputs.push(result);
                if let Some(ref mut pm) = self.progress_manager {
                    pm.advance(index);
                }
            }
            write_document(&output_path, &outputs)?;
            tracing::info!(
                input = %input_path.display(),
                pairs = pairs.len(),
                solved,
                "processed task"
            );
        } else {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_document(index, input_path, 1);
            }
            let grid = read_grid_file(input_path)?;
            let result = self.pipeline.run(grid)?;
            write_grid_file(&output_path, &result)?;
            tracing::info!(
                input = %input_path.display(),
                rows = result.rows(),
                cols = result.cols(),
                "processed grid"
            );
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_document(index);
        }
        tracing::debug!(elapsed = ?start_time.elapsed(), "document done");
        Ok(())
    }

    /// Output path for a document: `<stem>_result.json` beside the input
    pub fn output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            DOCUMENT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_document(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(DOCUMENT_EXTENSION)
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}
