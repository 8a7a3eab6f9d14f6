//! Linear-exposure tone mapping and gamma encoding.
//!
//! Both operate in place on the full raster. Whatever path is taken, the
//! buffer leaves this stage finite and inside [0, 1] per channel, which the
//! resampling engine relies on.

use tracing::debug;

use crate::image_pipeline::common::config::ConversionConfig;
use crate::image_pipeline::raster::types::RasterBuffer;

/// Fixed exposure until an exposure control is exposed in the config.
const EXPOSURE: f32 = 1.0;

/// Linear-exposure mapper: scale unbounded positive radiance by the
/// exposure, then normalize by clamping into [0, 1]. Non-finite samples
/// collapse to 0.
pub fn tone_map(buffer: &mut RasterBuffer) {
    let color_channels = if buffer.has_alpha() {
        buffer.channels - 1
    } else {
        buffer.channels
    };
    for pixel in buffer.data.chunks_exact_mut(buffer.channels) {
        for v in pixel.iter_mut().take(color_channels) {
            *v = if v.is_finite() {
                (*v * EXPOSURE).clamp(0.0, 1.0)
            } else {
                0.0
            };
        }
        // Alpha is opacity, not radiance; it only gets sanitized.
        for v in pixel.iter_mut().skip(color_channels) {
            *v = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        }
    }
    buffer.linear = false;
}

/// Display-encode the color channels: `clamp(v, 0, 1) ^ (1 / gamma)`.
/// Alpha is gamma-neutral; encoding it would darken transparency.
pub fn apply_gamma(buffer: &mut RasterBuffer, gamma: f32) {
    if (gamma - 1.0).abs() < f32::EPSILON {
        return;
    }
    let exponent = 1.0 / gamma;
    let color_channels = if buffer.has_alpha() {
        buffer.channels - 1
    } else {
        buffer.channels
    };
    for pixel in buffer.data.chunks_exact_mut(buffer.channels) {
        for v in pixel.iter_mut().take(color_channels) {
            *v = v.clamp(0.0, 1.0).powf(exponent);
        }
    }
}

/// Run the display-referred preparation for one decoded buffer:
/// tone mapping (when enabled and the source is linear), then gamma.
/// When tone mapping is disabled the buffer is still sanitized, so the
/// resampling stage never sees out-of-range or non-finite input.
pub fn prepare_display_referred(buffer: &mut RasterBuffer, config: &ConversionConfig) {
    if config.tone_map && buffer.linear {
        debug!("Applying linear tone mapping, gamma {}", config.gamma);
        tone_map(buffer);
        apply_gamma(buffer, config.gamma);
    } else {
        debug!("Tone mapping disabled, clamping only");
        buffer.sanitize();
    }
}
