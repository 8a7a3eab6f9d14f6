use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::output::types::OutputFormat;

/// Source file extension accepted by the batch, matched case-insensitively.
const SOURCE_EXTENSION: &str = "exr";

/// One unit of batch work, consumed exactly once by the orchestrator.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub index: usize,
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl ConversionJob {
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

/// Scan `source_dir` and build one job per eligible EXR file.
///
/// Jobs are ordered lexicographically by file name so repeated runs over an
/// unchanged directory see the same outcome order. The output directory is
/// created if absent. A missing or non-directory source is fatal for the
/// whole batch.
pub fn build_jobs(
    source_dir: &Path,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<Vec<ConversionJob>> {
    if !source_dir.is_dir() {
        return Err(ConversionError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("source path is not a directory: {}", source_dir.display()),
        )));
    }

    fs::create_dir_all(output_dir)?;

    let mut sources: Vec<PathBuf> = fs::read_dir(source_dir)?
        .filter_map(|entry| {
            entry.ok().and_then(|e| {
                let path = e.path();
                if path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
                {
                    Some(path)
                } else {
                    debug!("Skipping non-EXR entry: {}", path.display());
                    None
                }
            })
        })
        .collect();

    sources.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    let jobs: Vec<ConversionJob> = sources
        .into_iter()
        .enumerate()
        .filter_map(|(index, source)| {
            let stem = source.file_stem()?.to_string_lossy().into_owned();
            let dest = output_dir.join(format!("{}.{}", stem, format.extension()));
            Some(ConversionJob {
                index,
                source,
                dest,
            })
        })
        .collect();

    info!(
        "Found {} EXR files in {}",
        jobs.len(),
        source_dir.display()
    );
    Ok(jobs)
}
