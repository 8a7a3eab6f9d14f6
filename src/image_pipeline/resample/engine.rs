//! Separable two-pass resampling.
//!
//! A 2-D resize is run as a horizontal pass followed by a vertical pass.
//! Each pass precomputes one normalized weight window per output coordinate
//! and reuses it across the orthogonal dimension, keeping the cost at
//! O(W * H * radius) instead of a full 2-D convolution.

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::raster::types::RasterBuffer;
use crate::image_pipeline::resample::kernel::ResamplingKernel;

/// Contiguous run of source taps contributing to one output coordinate.
/// Weights are normalized to sum to 1; out-of-range taps are folded into
/// the boundary entries (replicated edges, never wrapped).
struct WeightWindow {
    start: usize,
    weights: Vec<f32>,
}

fn build_windows(src_len: usize, dst_len: usize, kernel: ResamplingKernel) -> Vec<WeightWindow> {
    let scale = dst_len as f32 / src_len as f32;
    // Downscale guard: widen the kernel by the inverse scale so the window
    // covers every source pixel that maps into one output pixel. Skipping
    // this aliases badly at thumbnail ratios.
    let filter_scale = (1.0 / scale).max(1.0);
    let support = kernel.support() * filter_scale;

    let mut windows = Vec::with_capacity(dst_len);
    for out in 0..dst_len {
        // Pixel-center mapping between the two grids.
        let center = (out as f32 + 0.5) / scale - 0.5;
        let left = (center - support).ceil() as i64;
        let right = (center + support).floor() as i64;

        let lo = left.clamp(0, src_len as i64 - 1) as usize;
        let hi = right.clamp(0, src_len as i64 - 1) as usize;
        let mut weights = vec![0.0f32; hi - lo + 1];
        let mut sum = 0.0f32;
        for tap in left..=right {
            let w = kernel.weight((tap as f32 - center) / filter_scale);
            if w == 0.0 {
                continue;
            }
            let idx = tap.clamp(0, src_len as i64 - 1) as usize;
            weights[idx - lo] += w;
            sum += w;
        }

        if sum.abs() > f32::EPSILON {
            for w in &mut weights {
                *w /= sum;
            }
            windows.push(WeightWindow {
                start: lo,
                weights,
            });
        } else {
            // All taps landed on kernel zeros; fall back to the closest pixel.
            let nearest = center.round().clamp(0.0, (src_len - 1) as f32) as usize;
            windows.push(WeightWindow {
                start: nearest,
                weights: vec![1.0],
            });
        }
    }
    windows
}

fn horizontal_pass(
    input: &RasterBuffer,
    out_width: usize,
    kernel: ResamplingKernel,
) -> Result<RasterBuffer> {
    let windows = build_windows(input.width, out_width, kernel);
    let channels = input.channels;
    let mut output = RasterBuffer::zeroed(out_width, input.height, channels, input.linear)?;

    for y in 0..input.height {
        let in_row = &input.data[y * input.width * channels..(y + 1) * input.width * channels];
        let out_row = &mut output.data[y * out_width * channels..(y + 1) * out_width * channels];
        for (x, window) in windows.iter().enumerate() {
            for c in 0..channels {
                let mut acc = 0.0f32;
                for (tap, &w) in window.weights.iter().enumerate() {
                    acc += w * in_row[(window.start + tap) * channels + c];
                }
                out_row[x * channels + c] = acc;
            }
        }
    }
    Ok(output)
}

fn vertical_pass(
    input: &RasterBuffer,
    out_height: usize,
    kernel: ResamplingKernel,
) -> Result<RasterBuffer> {
    let windows = build_windows(input.height, out_height, kernel);
    let channels = input.channels;
    let row_stride = input.width * channels;
    let mut output = RasterBuffer::zeroed(input.width, out_height, channels, input.linear)?;

    for (y, window) in windows.iter().enumerate() {
        let out_row = &mut output.data[y * row_stride..(y + 1) * row_stride];
        for (tap, &w) in window.weights.iter().enumerate() {
            let in_row =
                &input.data[(window.start + tap) * row_stride..(window.start + tap + 1) * row_stride];
            for (out_v, &in_v) in out_row.iter_mut().zip(in_row) {
                *out_v += w * in_v;
            }
        }
    }
    Ok(output)
}

/// Scale `input` to `target_height`, preserving aspect ratio.
///
/// Output samples stay `f32`; quantization is the encoder's job. The input
/// must already be sanitized (finite, in range) by the tone stage.
pub fn resample(
    input: &RasterBuffer,
    target_height: u32,
    kernel: ResamplingKernel,
) -> Result<RasterBuffer> {
    if target_height == 0 {
        return Err(ConversionError::ResampleError(
            "target height must be greater than zero".to_string(),
        ));
    }
    let out_height = target_height as usize;
    let out_width = ((input.width as f64 * out_height as f64 / input.height as f64).round()
        as usize)
        .max(1);

    if out_width == input.width && out_height == input.height {
        return Ok(input.clone());
    }

    debug!(
        "Resampling {}x{} -> {}x{} with {}",
        input.width,
        input.height,
        out_width,
        out_height,
        kernel.name()
    );

    let intermediate = if out_width == input.width {
        None
    } else {
        Some(horizontal_pass(input, out_width, kernel)?)
    };

    match intermediate {
        Some(inter) if out_height == inter.height => Ok(inter),
        Some(inter) => vertical_pass(&inter, out_height, kernel),
        None => vertical_pass(input, out_height, kernel),
    }
}
