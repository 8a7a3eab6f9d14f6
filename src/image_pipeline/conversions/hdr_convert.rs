use std::path::Path;

use tracing::info;

use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::timing::{PipelineTimings, Timer};
use crate::image_pipeline::exr::exr_reader::ExrReader;
use crate::image_pipeline::exr::reader::RasterDecoder;
use crate::image_pipeline::output::standard_writer::StandardRasterWriter;
use crate::image_pipeline::output::writer::RasterWriter;
use crate::image_pipeline::resample::engine::resample;
use crate::image_pipeline::tone::mapper::prepare_display_referred;

/// Result of one successful conversion.
#[derive(Debug, Clone)]
pub struct ConversionRecord {
    pub width: usize,
    pub height: usize,
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub timings: PipelineTimings,
}

/// One-file conversion pipeline: decode, tone-map/gamma, resample, encode.
///
/// Generic over the decode and encode seams so tests can substitute mocks.
pub struct HdrConversionPipeline<R: RasterDecoder, W: RasterWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl HdrConversionPipeline<ExrReader, StandardRasterWriter> {
    pub fn new(config: ConversionConfig) -> Result<Self> {
        Self::with_custom(ExrReader, StandardRasterWriter, config)
    }
}

impl<R: RasterDecoder, W: RasterWriter> HdrConversionPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            writer,
            config,
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn convert_file(&self, input_path: &Path, output_path: &Path) -> Result<ConversionRecord> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("decode");
        let mut raster = self.reader.decode(input_path)?;
        let input_bytes = std::fs::metadata(input_path).map(|m| m.len()).unwrap_or(0);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("tonemap");
        prepare_display_referred(&mut raster, &self.config);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("resample");
        let scaled = resample(&raster, self.config.target_height, self.config.kernel)?;
        drop(raster);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("encode");
        let mut output_file = std::fs::File::create(output_path).map_err(|e| {
            ConversionError::EncodeError(format!("{}: {}", output_path.display(), e))
        })?;
        let output_bytes = self.writer.write(&scaled, &mut output_file, &self.config)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        info!(
            "Converted {} -> {} ({}x{}, {} bytes) in {:.3}ms",
            input_path.display(),
            output_path.display(),
            scaled.width,
            scaled.height,
            output_bytes,
            timings.total_duration().as_secs_f64() * 1000.0
        );

        Ok(ConversionRecord {
            width: scaled.width,
            height: scaled.height,
            input_bytes,
            output_bytes,
            timings,
        })
    }
}
