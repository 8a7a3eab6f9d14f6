use crate::image_pipeline::raster::types::RasterBuffer;
use crate::image_pipeline::resample::engine::resample;
use crate::image_pipeline::resample::kernel::ResamplingKernel;

const ALL_KERNELS: [ResamplingKernel; 5] = [
    ResamplingKernel::Nearest,
    ResamplingKernel::Bilinear,
    ResamplingKernel::Bicubic,
    ResamplingKernel::Lanczos3,
    ResamplingKernel::Gaussian,
];

fn gradient_buffer(width: usize, height: usize, channels: usize) -> RasterBuffer {
    let mut data = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let v = (x + y * 2 + c * 3) as f32 / (width + height * 2 + channels * 3) as f32;
                data.push(v);
            }
        }
    }
    RasterBuffer::new(width, height, channels, data, true).unwrap()
}

#[test]
fn identity_resample_for_every_kernel() {
    let input = gradient_buffer(20, 10, 3);
    for kernel in ALL_KERNELS {
        let output = resample(&input, 10, kernel).unwrap();
        assert_eq!(output.width, 20);
        assert_eq!(output.height, 10);
        for (a, b) in input.data.iter().zip(&output.data) {
            assert!(
                (a - b).abs() <= 1e-5,
                "{}: {} != {}",
                kernel.name(),
                a,
                b
            );
        }
    }
}

#[test]
fn downscale_400x200_to_height_100_yields_200x100() {
    let input = gradient_buffer(400, 200, 3);
    for kernel in ALL_KERNELS {
        let output = resample(&input, 100, kernel).unwrap();
        assert_eq!(output.width, 200, "{}", kernel.name());
        assert_eq!(output.height, 100, "{}", kernel.name());
        assert!(output.data.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn aspect_ratio_is_preserved_by_rounding() {
    let input = gradient_buffer(64, 32, 4);
    let output = resample(&input, 16, ResamplingKernel::Lanczos3).unwrap();
    assert_eq!((output.width, output.height), (32, 16));

    let input = gradient_buffer(100, 30, 1);
    let output = resample(&input, 10, ResamplingKernel::Bilinear).unwrap();
    // round(100 * 10 / 30) = 33
    assert_eq!((output.width, output.height), (33, 10));
}

#[test]
fn non_negative_kernels_never_overshoot_source_range() {
    let mut input = gradient_buffer(40, 40, 3);
    // A sharp edge, the worst case for ringing.
    for (i, v) in input.data.iter_mut().enumerate() {
        *v = if i % (40 * 3) < 60 { 0.0 } else { 1.0 };
    }
    for kernel in [
        ResamplingKernel::Nearest,
        ResamplingKernel::Bilinear,
        ResamplingKernel::Gaussian,
    ] {
        let output = resample(&input, 17, kernel).unwrap();
        for &v in &output.data {
            assert!(
                (0.0..=1.0).contains(&v),
                "{} overshoots: {}",
                kernel.name(),
                v
            );
        }
    }
}

#[test]
fn ringing_kernels_overshoot_stays_bounded() {
    let mut input = gradient_buffer(40, 40, 3);
    for (i, v) in input.data.iter_mut().enumerate() {
        *v = if i % (40 * 3) < 60 { 0.0 } else { 1.0 };
    }
    // Lanczos-3 and bicubic ring at hard edges; a small excursion past the
    // source range is expected behavior, not a defect.
    for kernel in [ResamplingKernel::Bicubic, ResamplingKernel::Lanczos3] {
        let output = resample(&input, 23, kernel).unwrap();
        for &v in &output.data {
            assert!(
                (-0.15..=1.15).contains(&v),
                "{} overshoots beyond ringing tolerance: {}",
                kernel.name(),
                v
            );
        }
    }
}

#[test]
fn constant_image_stays_constant_under_any_scale() {
    let input = RasterBuffer::new(31, 17, 3, vec![0.42; 31 * 17 * 3], true).unwrap();
    for kernel in ALL_KERNELS {
        for target in [5u32, 17, 40] {
            let output = resample(&input, target, kernel).unwrap();
            for &v in &output.data {
                assert!(
                    (v - 0.42).abs() <= 1e-5,
                    "{} target {}: {}",
                    kernel.name(),
                    target,
                    v
                );
            }
        }
    }
}

#[test]
fn alpha_channel_is_filtered_like_color() {
    let mut input = gradient_buffer(16, 16, 4);
    // Make alpha a copy of red so both must come out identical.
    for p in 0..input.pixel_count() {
        input.data[p * 4 + 3] = input.data[p * 4];
    }
    let output = resample(&input, 8, ResamplingKernel::Bicubic).unwrap();
    for p in 0..output.pixel_count() {
        assert!((output.data[p * 4 + 3] - output.data[p * 4]).abs() <= 1e-6);
    }
}

#[test]
fn upscale_works_for_every_kernel() {
    let input = gradient_buffer(8, 4, 3);
    for kernel in ALL_KERNELS {
        let output = resample(&input, 12, kernel).unwrap();
        assert_eq!((output.width, output.height), (24, 12), "{}", kernel.name());
        assert!(output.data.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn rejects_zero_target_height() {
    let input = gradient_buffer(8, 4, 3);
    assert!(resample(&input, 0, ResamplingKernel::Bilinear).is_err());
}

#[test]
fn single_pixel_sources_do_not_panic() {
    let input = RasterBuffer::new(1, 1, 3, vec![0.5, 0.6, 0.7], true).unwrap();
    for kernel in ALL_KERNELS {
        let output = resample(&input, 4, kernel).unwrap();
        assert_eq!(output.height, 4);
        for p in 0..output.pixel_count() {
            assert!((output.data[p * 3] - 0.5).abs() <= 1e-5, "{}", kernel.name());
        }
    }
}
