//! Concurrent batch execution with isolated per-job failures.
//!
//! Jobs run on a bounded rayon pool sized to available parallelism; each
//! job holds a full raster in memory, so unbounded fan-out is not an
//! option. A job runs to completion on its worker, and its failure is
//! folded into the stats without touching any sibling.

use std::sync::Mutex;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::image_pipeline::batch::jobs::ConversionJob;
use crate::image_pipeline::batch::stats::BatchStats;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::hdr_convert::HdrConversionPipeline;
use crate::image_pipeline::exr::reader::RasterDecoder;
use crate::image_pipeline::output::writer::RasterWriter;

fn worker_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Run every job to a terminal state and return the aggregated stats.
///
/// Outcomes are accumulated under a mutex that only ever appends, then
/// sorted back into input-list order once the pool drains.
pub fn run_batch<R, W>(
    pipeline: &HdrConversionPipeline<R, W>,
    jobs: &[ConversionJob],
) -> Result<BatchStats>
where
    R: RasterDecoder + Sync,
    W: RasterWriter + Sync,
{
    let start = Instant::now();
    let workers = worker_count();
    debug!("Dispatching {} jobs on {} workers", jobs.len(), workers);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| {
            ConversionError::IoError(std::io::Error::other(format!(
                "failed to build worker pool: {}",
                e
            )))
        })?;

    let stats = Mutex::new(BatchStats::new());
    pool.install(|| {
        jobs.par_iter().for_each(|job| {
            let file_name = job.file_name();
            debug!("Job {} running: {}", job.index, file_name);
            match pipeline.convert_file(&job.source, &job.dest) {
                Ok(record) => {
                    let mut stats = stats.lock().expect("stats mutex poisoned");
                    stats.record_success(job.index, file_name, &record);
                }
                Err(e) => {
                    warn!("Job failed for {}: {}", file_name, e);
                    let mut stats = stats.lock().expect("stats mutex poisoned");
                    stats.record_failure(job.index, file_name, e.kind(), e.to_string());
                }
            }
        });
    });

    let mut stats = stats.into_inner().expect("stats mutex poisoned");
    stats.sort_outcomes();
    stats.elapsed = start.elapsed();
    Ok(stats)
}
