use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

use logokit::logo_pipeline::{CleanupConfig, LogoCleanupPipeline, remove_background};

/// Synthetic logo: near-white canvas with a dark block in the upper half
/// and a thin text band near the bottom.
fn generate_logo(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, Rgba([240, 240, 240, 255]));
    for y in height / 10..height / 2 {
        for x in width / 4..(3 * width / 4) {
            img.put_pixel(x, y, Rgba([40, 80, 160, 255]));
        }
    }
    for y in (3 * height / 4)..(3 * height / 4 + height / 20 + 1) {
        for x in width / 5..(4 * width / 5) {
            img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
    }
    img
}

fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn benchmark_cleanup_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("cleanup_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let png = encode_png(&generate_logo(width, height));
        let pipeline = LogoCleanupPipeline::new(CleanupConfig::default());

        group.bench_with_input(BenchmarkId::from_parameter(label), &png, |b, png| {
            b.iter(|| {
                let mut output = Vec::new();
                pipeline
                    .convert(black_box(png), &mut output)
                    .expect("cleanup failed");
                output
            });
        });
    }

    group.finish();
}

fn benchmark_background_removal(c: &mut Criterion) {
    let config = CleanupConfig::default();
    let img = generate_logo(1000, 1000);

    c.bench_function("remove_background_1000x1000", |b| {
        b.iter(|| {
            let mut copy = img.clone();
            remove_background(black_box(&mut copy), &config);
            copy
        });
    });
}

criterion_group!(benches, benchmark_cleanup_sizes, benchmark_background_removal);
criterion_main!(benches);
