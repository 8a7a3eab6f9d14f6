//! Plain-text run summary, written once after the batch drains.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::image_pipeline::batch::stats::{BatchStats, JobStatus};
use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::common::error::{ConversionError, Result};

/// Write the run summary for `stats` to `path`.
///
/// A write failure here never retroactively fails conversions that already
/// completed; callers surface it as a warning.
pub fn write_report(
    stats: &BatchStats,
    config: &ConversionConfig,
    source_dir: &Path,
    output_dir: &Path,
    path: &Path,
) -> Result<()> {
    let file =
        File::create(path).map_err(|e| ConversionError::ReportError(e.to_string()))?;
    let mut out = BufWriter::new(file);
    render_report(stats, config, source_dir, output_dir, &mut out)
        .map_err(|e| ConversionError::ReportError(e.to_string()))?;
    info!("Detailed statistics saved to {}", path.display());
    Ok(())
}

fn render_report(
    stats: &BatchStats,
    config: &ConversionConfig,
    source_dir: &Path,
    output_dir: &Path,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(out, "=== EXR Conversion Statistics ===")?;
    writeln!(out, "Source Folder: {}", source_dir.display())?;
    writeln!(out, "Destination Folder: {}", output_dir.display())?;
    writeln!(out, "Target Height: {}px", config.target_height)?;
    writeln!(out, "Filter: {}", config.kernel.name())?;
    writeln!(out, "Output Format: {}", config.format.name())?;
    writeln!(
        out,
        "Tone Mapping: {}",
        if config.tone_map {
            format!("linear, gamma {}", config.gamma)
        } else {
            "disabled".to_string()
        }
    )?;
    writeln!(out, "============================================")?;
    writeln!(out, "Total files found: {}", stats.attempted)?;
    writeln!(out, "Successfully converted: {}", stats.succeeded)?;
    writeln!(out, "Failed to convert: {}", stats.failed)?;
    writeln!(out, "Total input size: {} bytes", stats.input_bytes)?;
    writeln!(out, "Total output size: {} bytes", stats.output_bytes)?;
    writeln!(out, "============================================")?;
    writeln!(out, "Per-file results:")?;
    for outcome in &stats.outcomes {
        match &outcome.status {
            JobStatus::Succeeded {
                width,
                height,
                input_bytes,
                output_bytes,
            } => {
                writeln!(
                    out,
                    "  {}: OK {}x{}, {} -> {} bytes",
                    outcome.file_name, width, height, input_bytes, output_bytes
                )?;
            }
            JobStatus::Failed { kind, message } => {
                writeln!(out, "  {}: FAILED ({}): {}", outcome.file_name, kind, message)?;
            }
        }
    }
    writeln!(out, "============================================")?;
    writeln!(out, "Timing Breakdown (Parallel Processing):")?;
    writeln!(
        out,
        "  Total execution time: {:.2}ms",
        stats.elapsed.as_secs_f64() * 1000.0
    )?;
    writeln!(
        out,
        "  Loading/Processing time: {:.2}ms (sum of all files)",
        stats.load_time.as_secs_f64() * 1000.0
    )?;
    writeln!(
        out,
        "  Saving time: {:.2}ms (sum of all files)",
        stats.save_time.as_secs_f64() * 1000.0
    )?;
    if stats.attempted > 0 {
        let total = stats.load_time + stats.save_time;
        writeln!(
            out,
            "  Average time per file: {:.2}ms",
            total.as_secs_f64() * 1000.0 / stats.attempted as f64
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Note: Due to parallel processing, total execution time is shorter"
    )?;
    writeln!(out, "than the sum of individual file processing times.")?;
    Ok(())
}
