use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::output::types::{OutputFormat, TiffCompression};
use crate::image_pipeline::resample::kernel::ResamplingKernel;

/// Immutable per-run configuration, shared read-only by every job in a batch.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Target output height in pixels; width follows the source aspect ratio.
    pub target_height: u32,
    /// Apply the linear-exposure tone mapper to linear-light sources.
    pub tone_map: bool,
    /// Gamma exponent for display encoding, applied as `v^(1/gamma)`.
    pub gamma: f32,
    pub kernel: ResamplingKernel,
    pub format: OutputFormat,
    pub compression: TiffCompression,
    /// When true, any per-file failure forces a non-zero process exit.
    pub fail_on_job_error: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            target_height: 200,
            tone_map: false,
            gamma: 2.2,
            kernel: ResamplingKernel::Lanczos3,
            format: OutputFormat::Thumbnail,
            compression: TiffCompression::None,
            fail_on_job_error: false,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_height == 0 {
            return Err(ConversionError::InvalidConfig(
                "target height must be greater than zero".to_string(),
            ));
        }
        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(ConversionError::InvalidConfig(format!(
                "gamma must be a positive finite number, got {}",
                self.gamma
            )));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct ConversionConfigBuilder {
    target_height: Option<u32>,
    tone_map: Option<bool>,
    gamma: Option<f32>,
    kernel: Option<ResamplingKernel>,
    format: Option<OutputFormat>,
    compression: Option<TiffCompression>,
    fail_on_job_error: Option<bool>,
}

impl ConversionConfigBuilder {
    pub fn target_height(mut self, height: u32) -> Self {
        self.target_height = Some(height);
        self
    }

    pub fn tone_map(mut self, enabled: bool) -> Self {
        self.tone_map = Some(enabled);
        self
    }

    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub fn kernel(mut self, kernel: ResamplingKernel) -> Self {
        self.kernel = Some(kernel);
        self
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn fail_on_job_error(mut self, fail: bool) -> Self {
        self.fail_on_job_error = Some(fail);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            target_height: self.target_height.unwrap_or(default.target_height),
            tone_map: self.tone_map.unwrap_or(default.tone_map),
            gamma: self.gamma.unwrap_or(default.gamma),
            kernel: self.kernel.unwrap_or(default.kernel),
            format: self.format.unwrap_or(default.format),
            compression: self.compression.unwrap_or(default.compression),
            fail_on_job_error: self.fail_on_job_error.unwrap_or(default.fail_on_job_error),
        }
    }
}
