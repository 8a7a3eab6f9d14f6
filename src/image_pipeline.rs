//! HDR image conversion pipeline module
//!
//! This module provides a structured approach to batch EXR conversion,
//! with separate modules for decoding, tone mapping, resampling, encoding,
//! and batch orchestration.

pub mod batch;
pub mod common;
pub mod conversions;
pub mod exr;
pub mod output;
pub mod raster;
pub mod resample;
pub mod tone;

pub use common::config::{ConversionConfig, ConversionConfigBuilder};
pub use common::error::{ConversionError, Result};

pub use raster::RasterBuffer;

pub use exr::{ExrReader, RasterDecoder};

pub use resample::{ResamplingKernel, resample};

pub use output::{OutputFormat, RasterWriter, StandardRasterWriter, TiffCompression};

pub use conversions::{ConversionRecord, HdrConversionPipeline, PipelineTimings, Timer};

pub use batch::{BatchStats, ConversionJob, JobOutcome, JobStatus, build_jobs, run_batch, write_report};
