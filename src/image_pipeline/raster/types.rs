use crate::image_pipeline::common::error::{ConversionError, Result};

/// An in-memory floating-point raster, interleaved by channel.
///
/// `data` holds `width * height * channels` samples in row-major order.
/// `linear` records whether the samples are linear-light radiance (as
/// reported by the decoder) or already display-referred.
#[derive(Debug, Clone)]
pub struct RasterBuffer {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub data: Vec<f32>,
    pub linear: bool,
}

impl RasterBuffer {
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
        linear: bool,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }
        if !matches!(channels, 1 | 3 | 4) {
            return Err(ConversionError::DecodeError(format!(
                "unsupported channel count: {}",
                channels
            )));
        }
        if data.len() != width * height * channels {
            return Err(ConversionError::DecodeError(format!(
                "sample count {} does not match {}x{}x{}",
                data.len(),
                width,
                height,
                channels
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
            linear,
        })
    }

    /// Allocate a zero-filled buffer with the given shape.
    pub fn zeroed(width: usize, height: usize, channels: usize, linear: bool) -> Result<Self> {
        Self::new(
            width,
            height,
            channels,
            vec![0.0; width * height * channels],
            linear,
        )
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Replace non-finite samples with 0 and clamp everything to [0, 1].
    ///
    /// The resampling engine convolves neighborhoods, so a single NaN would
    /// otherwise spread across the whole output.
    pub fn sanitize(&mut self) {
        for v in &mut self.data {
            *v = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        }
    }
}
