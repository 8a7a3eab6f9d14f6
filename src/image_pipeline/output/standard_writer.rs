//! Default encoder: PNG output through the image library, TIFF output
//! through the tiff encoder. Quantization from f32 to integer samples
//! happens here and nowhere else in the pipeline.

use std::io::{Cursor, Write};

use tracing::debug;

use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::output::types::{OutputFormat, TiffCompression};
use crate::image_pipeline::output::writer::RasterWriter;
use crate::image_pipeline::raster::types::RasterBuffer;

pub struct StandardRasterWriter;

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn to_u16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0).round() as u16
}

fn encode_png_8(image: &RasterBuffer, buffer: &mut Vec<u8>) -> Result<()> {
    let width = image.width as u32;
    let height = image.height as u32;
    let samples: Vec<u8> = image.data.iter().map(|&v| to_u8(v)).collect();
    let mut cursor = Cursor::new(buffer);
    match image.channels {
        1 => image::ImageBuffer::<image::Luma<u8>, _>::from_raw(width, height, samples)
            .ok_or_else(|| ConversionError::EncodeError("luma buffer size mismatch".to_string()))?
            .write_to(&mut cursor, image::ImageFormat::Png),
        3 => image::ImageBuffer::<image::Rgb<u8>, _>::from_raw(width, height, samples)
            .ok_or_else(|| ConversionError::EncodeError("rgb buffer size mismatch".to_string()))?
            .write_to(&mut cursor, image::ImageFormat::Png),
        4 => image::ImageBuffer::<image::Rgba<u8>, _>::from_raw(width, height, samples)
            .ok_or_else(|| ConversionError::EncodeError("rgba buffer size mismatch".to_string()))?
            .write_to(&mut cursor, image::ImageFormat::Png),
        n => {
            return Err(ConversionError::EncodeError(format!(
                "unsupported channel count for PNG: {}",
                n
            )));
        }
    }
    .map_err(|e| ConversionError::EncodeError(e.to_string()))
}

fn encode_png_16(image: &RasterBuffer, buffer: &mut Vec<u8>) -> Result<()> {
    let width = image.width as u32;
    let height = image.height as u32;
    let samples: Vec<u16> = image.data.iter().map(|&v| to_u16(v)).collect();
    let mut cursor = Cursor::new(buffer);
    match image.channels {
        1 => image::ImageBuffer::<image::Luma<u16>, _>::from_raw(width, height, samples)
            .ok_or_else(|| ConversionError::EncodeError("luma buffer size mismatch".to_string()))?
            .write_to(&mut cursor, image::ImageFormat::Png),
        3 => image::ImageBuffer::<image::Rgb<u16>, _>::from_raw(width, height, samples)
            .ok_or_else(|| ConversionError::EncodeError("rgb buffer size mismatch".to_string()))?
            .write_to(&mut cursor, image::ImageFormat::Png),
        4 => image::ImageBuffer::<image::Rgba<u16>, _>::from_raw(width, height, samples)
            .ok_or_else(|| ConversionError::EncodeError("rgba buffer size mismatch".to_string()))?
            .write_to(&mut cursor, image::ImageFormat::Png),
        n => {
            return Err(ConversionError::EncodeError(format!(
                "unsupported channel count for PNG: {}",
                n
            )));
        }
    }
    .map_err(|e| ConversionError::EncodeError(e.to_string()))
}

fn encode_tiff(
    image: &RasterBuffer,
    buffer: &mut Vec<u8>,
    compression: TiffCompression,
) -> Result<()> {
    let compression = match compression {
        TiffCompression::None => tiff::encoder::Compression::Uncompressed,
        TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
        TiffCompression::Deflate => tiff::encoder::Compression::Deflate(
            tiff::encoder::compression::DeflateLevel::Balanced,
        ),
    };

    let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(buffer))
        .map_err(|e| ConversionError::EncodeError(e.to_string()))?
        .with_compression(compression);

    let width = image.width as u32;
    let height = image.height as u32;
    let samples: Vec<u16> = image.data.iter().map(|&v| to_u16(v)).collect();
    match image.channels {
        1 => encoder
            .write_image::<tiff::encoder::colortype::Gray16>(width, height, &samples)
            .map_err(|e| ConversionError::EncodeError(e.to_string())),
        3 => encoder
            .write_image::<tiff::encoder::colortype::RGB16>(width, height, &samples)
            .map_err(|e| ConversionError::EncodeError(e.to_string())),
        4 => encoder
            .write_image::<tiff::encoder::colortype::RGBA16>(width, height, &samples)
            .map_err(|e| ConversionError::EncodeError(e.to_string())),
        n => Err(ConversionError::EncodeError(format!(
            "unsupported channel count for TIFF: {}",
            n
        ))),
    }
}

impl RasterWriter for StandardRasterWriter {
    fn write(
        &self,
        image: &RasterBuffer,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<u64> {
        debug!(
            "Encoding {} image: {}x{}, {} channels",
            config.format.name(),
            image.width,
            image.height,
            image.channels
        );

        let mut buffer = Vec::new();
        match config.format {
            OutputFormat::Thumbnail => encode_png_8(image, &mut buffer)?,
            OutputFormat::Png => encode_png_16(image, &mut buffer)?,
            OutputFormat::Tiff => encode_tiff(image, &mut buffer, config.compression)?,
        }
        output.write_all(&buffer)?;

        debug!("Encoding complete, {} bytes", buffer.len());
        Ok(buffer.len() as u64)
    }
}
