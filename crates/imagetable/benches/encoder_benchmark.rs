use criterion::{criterion_group, criterion_main, Criterion};
use imagetable::{html_encode, EncodeOptions};
use std::hint::black_box;

fn generate_gradient_rgb(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 255) / width.max(1)) as u8;
            let g = ((y * 255) / height.max(1)) as u8;
            let b = 128;
            pixels.push(r);
            pixels.push(g);
            pixels.push(b);
        }
    }
    pixels
}

fn generate_flat_rgb(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for _ in 0..width * height {
        pixels.push(32);
        pixels.push(64);
        pixels.push(96);
    }
    pixels
}

fn generate_banded_rgb(width: usize, height: usize, band: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let shade = ((x / band + y / band) % 8 * 32) as u8;
            pixels.push(shade);
            pixels.push(shade);
            pixels.push(255 - shade);
        }
    }
    pixels
}

// Worst case for run compression: nearly every pixel starts a new run
fn bench_encode_gradient(c: &mut Criterion) {
    let rgb = generate_gradient_rgb(256, 256);
    let opts = EncodeOptions::default();

    c.bench_function("encode_gradient_256x256", |b| {
        b.iter(|| {
            let result = html_encode(black_box(&rgb), 256, 256, &opts);
            assert!(result.is_ok());
            result
        })
    });
}

// Best case: every row collapses to a single run
fn bench_encode_flat(c: &mut Criterion) {
    let rgb = generate_flat_rgb(256, 256);
    let opts = EncodeOptions::default();

    c.bench_function("encode_flat_256x256", |b| {
        b.iter(|| {
            let result = html_encode(black_box(&rgb), 256, 256, &opts);
            assert!(result.is_ok());
            result
        })
    });
}

// Typical graphic content: wide bands of few colors, all classed
fn bench_encode_banded(c: &mut Criterion) {
    let rgb = generate_banded_rgb(256, 256, 16);
    let opts = EncodeOptions::default();

    c.bench_function("encode_banded_256x256", |b| {
        b.iter(|| {
            let result = html_encode(black_box(&rgb), 256, 256, &opts);
            assert!(result.is_ok());
            result
        })
    });
}

criterion_group!(
    benches,
    bench_encode_gradient,
    bench_encode_flat,
    bench_encode_banded
);
criterion_main!(benches);
