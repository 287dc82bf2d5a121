use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use white_balance_rs::image_pipeline::{
    gray_world_correct, manual_gain_correct, neutral_point_correct,
    CorrectionConfig, CorrectionMode, CorrectionPipeline, OutputFormat, RasterImage,
};
use std::io::Cursor;

fn generate_cast_image(width: usize, height: usize) -> RasterImage {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 200) as u8;
            data.push(value.saturating_add(40));
            data.push(value.saturating_add(20));
            data.push(value);
        }
    }
    RasterImage::new(width, height, data).unwrap()
}

fn encode_png(image: &RasterImage) -> Vec<u8> {
    let buffer = image::RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.data().to_vec(),
    )
    .unwrap();
    let mut bytes = Cursor::new(Vec::new());
    buffer.write_to(&mut bytes, image::ImageFormat::Png).unwrap();
    bytes.into_inner()
}

fn benchmark_corrections_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("correction_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let image = generate_cast_image(width, height);

        group.bench_with_input(BenchmarkId::new("gray_world", label), &image, |b, image| {
            b.iter(|| gray_world_correct(black_box(image)));
        });

        group.bench_with_input(BenchmarkId::new("manual_gain", label), &image, |b, image| {
            b.iter(|| manual_gain_correct(black_box(image), 1.2, 0.8).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("neutral_point", label), &image, |b, image| {
            b.iter(|| neutral_point_correct(black_box(image), width / 2, height / 2).unwrap());
        });
    }

    group.finish();
}

fn benchmark_pipeline_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_formats");
    let encoded = encode_png(&generate_cast_image(500, 500));

    for (format, label) in [(OutputFormat::Png, "png"), (OutputFormat::Tiff, "tiff")] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &encoded, |b, data| {
            let config = CorrectionConfig::builder()
                .mode(CorrectionMode::GrayWorld)
                .output_format(format)
                .build();
            let pipeline = CorrectionPipeline::new(config);

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                pipeline.convert(black_box(data), &mut output).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_corrections_by_size,
    benchmark_pipeline_formats
);
criterion_main!(benches);
