//! Filter weight curves for the resampling engine.
//!
//! The kernel set is closed and performance-sensitive, so it is modeled as
//! an enum dispatching to plain weight functions rather than a trait object.

use std::str::FromStr;

use crate::image_pipeline::common::error::ConversionError;

/// Cubic convolution parameter (Catmull-Rom family).
const BICUBIC_A: f32 = -0.5;

/// Gaussian sigma, chosen so the curve integrates to ~1 over [-2, 2].
const GAUSSIAN_SIGMA: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResamplingKernel {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
    Gaussian,
}

impl ResamplingKernel {
    /// Half-width of the kernel in source pixels at scale 1.
    pub fn support(&self) -> f32 {
        match self {
            ResamplingKernel::Nearest => 0.5,
            ResamplingKernel::Bilinear => 1.0,
            ResamplingKernel::Bicubic => 2.0,
            ResamplingKernel::Lanczos3 => 3.0,
            ResamplingKernel::Gaussian => 2.0,
        }
    }

    /// Filter weight at signed distance `x` from the sample center.
    pub fn weight(&self, x: f32) -> f32 {
        let x = x.abs();
        match self {
            ResamplingKernel::Nearest => {
                if x <= 0.5 { 1.0 } else { 0.0 }
            }
            ResamplingKernel::Bilinear => (1.0 - x).max(0.0),
            ResamplingKernel::Bicubic => cubic_convolution(x),
            ResamplingKernel::Lanczos3 => lanczos(x, 3.0),
            ResamplingKernel::Gaussian => gaussian(x, GAUSSIAN_SIGMA),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResamplingKernel::Nearest => "nearest",
            ResamplingKernel::Bilinear => "bilinear",
            ResamplingKernel::Bicubic => "bicubic",
            ResamplingKernel::Lanczos3 => "lanczos3",
            ResamplingKernel::Gaussian => "gaussian",
        }
    }
}

impl FromStr for ResamplingKernel {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(ResamplingKernel::Nearest),
            "bilinear" => Ok(ResamplingKernel::Bilinear),
            "bicubic" => Ok(ResamplingKernel::Bicubic),
            "lanczos3" => Ok(ResamplingKernel::Lanczos3),
            "gaussian" => Ok(ResamplingKernel::Gaussian),
            other => Err(ConversionError::InvalidConfig(format!(
                "unknown resampling filter: {}",
                other
            ))),
        }
    }
}

/// Keys' cubic convolution kernel with a = -0.5.
fn cubic_convolution(x: f32) -> f32 {
    let a = BICUBIC_A;
    if x < 1.0 {
        (a + 2.0) * x * x * x - (a + 3.0) * x * x + 1.0
    } else if x < 2.0 {
        a * x * x * x - 5.0 * a * x * x + 8.0 * a * x - 4.0 * a
    } else {
        0.0
    }
}

fn sinc(x: f32) -> f32 {
    if x.abs() < 1e-8 {
        1.0
    } else {
        let t = std::f32::consts::PI * x;
        t.sin() / t
    }
}

/// Sinc windowed by a wider sinc; zero at integer distances beyond `taps`.
fn lanczos(x: f32, taps: f32) -> f32 {
    if x < taps { sinc(x) * sinc(x / taps) } else { 0.0 }
}

fn gaussian(x: f32, sigma: f32) -> f32 {
    let norm = 1.0 / (sigma * (2.0 * std::f32::consts::PI).sqrt());
    norm * (-(x * x) / (2.0 * sigma * sigma)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ResamplingKernel; 5] = [
        ResamplingKernel::Nearest,
        ResamplingKernel::Bilinear,
        ResamplingKernel::Bicubic,
        ResamplingKernel::Lanczos3,
        ResamplingKernel::Gaussian,
    ];

    #[test]
    fn center_weight_is_positive_and_maximal() {
        for kernel in ALL {
            let center = kernel.weight(0.0);
            assert!(center > 0.0, "{}", kernel.name());
            for x in [0.25f32, 0.5, 1.0, 1.5] {
                assert!(
                    center >= kernel.weight(x),
                    "{} weight grows away from center at {}",
                    kernel.name(),
                    x
                );
            }
        }
    }

    #[test]
    fn zero_weight_beyond_support() {
        for kernel in [
            ResamplingKernel::Nearest,
            ResamplingKernel::Bilinear,
            ResamplingKernel::Bicubic,
            ResamplingKernel::Lanczos3,
        ] {
            let beyond = kernel.support() + 0.01;
            assert_eq!(kernel.weight(beyond), 0.0, "{}", kernel.name());
            assert_eq!(kernel.weight(-beyond), 0.0, "{}", kernel.name());
        }
    }

    #[test]
    fn lanczos_vanishes_at_nonzero_integers() {
        for i in 1..=2 {
            assert!(ResamplingKernel::Lanczos3.weight(i as f32).abs() < 1e-5);
        }
        assert_eq!(ResamplingKernel::Lanczos3.weight(3.0), 0.0);
    }

    #[test]
    fn bilinear_is_triangle() {
        assert!((ResamplingKernel::Bilinear.weight(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(ResamplingKernel::Bilinear.weight(1.0), 0.0);
    }

    #[test]
    fn bicubic_interpolates_exactly_at_integers() {
        assert!((ResamplingKernel::Bicubic.weight(0.0) - 1.0).abs() < 1e-6);
        assert!(ResamplingKernel::Bicubic.weight(1.0).abs() < 1e-6);
        assert!(ResamplingKernel::Bicubic.weight(2.0).abs() < 1e-6);
    }

    #[test]
    fn gaussian_integrates_to_about_one_over_support() {
        let kernel = ResamplingKernel::Gaussian;
        let steps = 4000;
        let half = kernel.support();
        let dx = 2.0 * half / steps as f32;
        let integral: f32 = (0..steps)
            .map(|i| kernel.weight(-half + (i as f32 + 0.5) * dx) * dx)
            .sum();
        assert!((integral - 1.0).abs() < 0.02, "integral = {}", integral);
    }

    #[test]
    fn parses_filter_names_case_insensitively() {
        assert_eq!(
            "Lanczos3".parse::<ResamplingKernel>().unwrap(),
            ResamplingKernel::Lanczos3
        );
        assert_eq!(
            "nearest".parse::<ResamplingKernel>().unwrap(),
            ResamplingKernel::Nearest
        );
        assert!("box".parse::<ResamplingKernel>().is_err());
    }
}
