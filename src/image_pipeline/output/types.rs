use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;

/// Destination container for converted rasters.
///
/// `Thumbnail` is 8-bit PNG, `Png` is 16-bit PNG, `Tiff` is 16-bit TIFF
/// honoring the configured compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Thumbnail,
    Png,
    Tiff,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Thumbnail | OutputFormat::Png => "png",
            OutputFormat::Tiff => "tiff",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Thumbnail => "thumbnail",
            OutputFormat::Png => "png",
            OutputFormat::Tiff => "tiff",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "thumbnail" => Ok(OutputFormat::Thumbnail),
            "png" => Ok(OutputFormat::Png),
            "tiff" | "tif" => Ok(OutputFormat::Tiff),
            other => Err(ConversionError::InvalidConfig(format!(
                "unknown output format: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    None,
    Lzw,
    Deflate,
}

impl FromStr for TiffCompression {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(TiffCompression::None),
            "lzw" => Ok(TiffCompression::Lzw),
            "deflate" => Ok(TiffCompression::Deflate),
            other => Err(ConversionError::InvalidConfig(format!(
                "unknown TIFF compression: {}",
                other
            ))),
        }
    }
}
