use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use exrconv_rs::image_pipeline::{RasterBuffer, ResamplingKernel, resample};

fn generate_raster(width: usize, height: usize) -> RasterBuffer {
    let data: Vec<f32> = (0..width * height * 3)
        .map(|i| ((i * 31) % 997) as f32 / 996.0)
        .collect();
    RasterBuffer::new(width, height, 3, data, true).unwrap()
}

fn benchmark_downscale_by_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("downscale_to_200");
    let input = generate_raster(1920, 1080);

    let kernels = [
        ResamplingKernel::Nearest,
        ResamplingKernel::Bilinear,
        ResamplingKernel::Bicubic,
        ResamplingKernel::Lanczos3,
        ResamplingKernel::Gaussian,
    ];

    for kernel in kernels {
        group.bench_with_input(
            BenchmarkId::from_parameter(kernel.name()),
            &input,
            |b, input| {
                b.iter(|| resample(black_box(input), 200, kernel).unwrap());
            },
        );
    }
    group.finish();
}

fn benchmark_downscale_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanczos3_by_size");

    let sizes = [(640, 480, "640x480"), (1920, 1080, "1920x1080"), (4096, 2160, "4096x2160")];

    for (width, height, label) in sizes {
        let input = generate_raster(width, height);
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, input| {
            b.iter(|| resample(black_box(input), 200, ResamplingKernel::Lanczos3).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_downscale_by_kernel, benchmark_downscale_by_size);
criterion_main!(benches);
