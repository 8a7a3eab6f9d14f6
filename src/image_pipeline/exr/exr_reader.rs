//! EXR decoder implementation using the exr library.
//!
//! Reads the first RGBA layer of an OpenEXR file into an f32 raster.
//! EXR stores scene-referred linear radiance, so decoded buffers are
//! flagged `linear = true` for the tone stage.

use std::path::Path;

use exr::prelude as exr;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::exr::reader::RasterDecoder;
use crate::image_pipeline::raster::types::RasterBuffer;

pub struct ExrReader;

/// Interleaved RGBA samples filled in by the exr read callbacks.
struct RgbaSamples {
    width: usize,
    height: usize,
    samples: Vec<f32>,
}

impl RasterDecoder for ExrReader {
    fn decode(&self, path: &Path) -> Result<RasterBuffer> {
        debug!("Decoding EXR file: {}", path.display());

        let image = exr::read_first_rgba_layer_from_file(
            path,
            |resolution, _channels| RgbaSamples {
                width: resolution.width(),
                height: resolution.height(),
                samples: vec![0.0; resolution.width() * resolution.height() * 4],
            },
            |raster: &mut RgbaSamples, position, (r, g, b, a): (f32, f32, f32, f32)| {
                let index = (position.y() * raster.width + position.x()) * 4;
                raster.samples[index] = r;
                raster.samples[index + 1] = g;
                raster.samples[index + 2] = b;
                raster.samples[index + 3] = a;
            },
        )
        .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let raster = image.layer_data.channel_data.pixels;
        debug!("Decoded EXR layer: {}x{}", raster.width, raster.height);

        RasterBuffer::new(raster.width, raster.height, 4, raster.samples, true)
    }
}
