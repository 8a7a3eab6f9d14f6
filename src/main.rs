use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use exrconv_rs::image_pipeline::{
    ConversionConfig, HdrConversionPipeline, OutputFormat, ResamplingKernel, TiffCompression,
    build_jobs, run_batch, write_report,
};
use exrconv_rs::logger;

/// A fast batch converter from EXR to display-referred thumbnails, PNG and TIFF
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source folder containing EXR files
    #[arg(short = 's', long)]
    source_folder: PathBuf,

    /// Destination folder for converted images
    #[arg(short = 'd', long)]
    dest_folder: PathBuf,

    /// Height of the output in pixels (width is scaled proportionally)
    #[arg(short = 't', long, default_value = "200")]
    height: u32,

    /// Enable linear color space tone mapping
    #[arg(short = 'l', long)]
    linear_tone_mapping: bool,

    /// Gamma value for color correction
    #[arg(short = 'g', long, default_value = "2.2")]
    gamma: f32,

    /// Scaling filter (nearest, bilinear, bicubic, lanczos3, gaussian)
    #[arg(short = 'f', long, default_value = "lanczos3")]
    filter: ResamplingKernel,

    /// TIFF compression (none, lzw, deflate)
    #[arg(short = 'c', long, default_value = "none")]
    compression: TiffCompression,

    /// Output container (thumbnail, png, tiff)
    #[arg(short = 'o', long, default_value = "thumbnail")]
    output_format: OutputFormat,

    /// Filename for the conversion statistics report
    #[arg(short = 'i', long = "info", visible_alias = "stats", default_value = "conversion_stats.txt")]
    info: String,

    /// Exit non-zero when any individual file fails to convert
    #[arg(long)]
    fail_on_error: bool,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = ConversionConfig::builder()
        .target_height(args.height)
        .tone_map(args.linear_tone_mapping)
        .gamma(args.gamma)
        .kernel(args.filter)
        .format(args.output_format)
        .compression(args.compression)
        .fail_on_job_error(args.fail_on_error)
        .build();

    let pipeline = HdrConversionPipeline::new(config.clone()).context("invalid configuration")?;

    let jobs = build_jobs(&args.source_folder, &args.dest_folder, config.format)
        .context("failed to scan source folder")?;

    info!(
        "Found {} EXR files. Starting conversion to {}px height {} output...",
        jobs.len(),
        config.target_height,
        config.format.name()
    );

    let stats = run_batch(&pipeline, &jobs).context("batch execution failed")?;

    info!(
        "Files: Success: {}, Failure: {} ({:.2}ms total)",
        stats.succeeded,
        stats.failed,
        stats.elapsed.as_secs_f64() * 1000.0
    );

    let report_path = args.dest_folder.join(&args.info);
    if let Err(e) = write_report(&stats, &config, &args.source_folder, &args.dest_folder, &report_path)
    {
        // Completed conversions stand; a broken report is only a warning.
        warn!("Failed to write stats report: {}", e);
    }

    if config.fail_on_job_error && stats.failed > 0 {
        anyhow::bail!("{} of {} files failed to convert", stats.failed, stats.attempted);
    }

    Ok(())
}
