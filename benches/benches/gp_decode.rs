//! Benchmark suite for LZSS and GP sprite decoding
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gsc_benches::{generate_lzss_input, generate_test_gp_data};
use gsc_types::file::gp;
use gsc_types::file::lzss;
use gsc_types::file::pal::Palette;
use std::{hint::black_box, io::Read};

/// Benchmark raw LZSS decompression throughput
fn bench_lzss_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("lzss_decode");

	for size in [16 * 1024usize, 256 * 1024] {
		let (input, voc) = generate_lzss_input(size);
		group.throughput(Throughput::Bytes(size as u64));
		group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
			b.iter(|| {
				let mut decoder =
					lzss::Decoder::new(black_box(input.as_slice()), &voc, size as u64);
				let mut out = Vec::with_capacity(size);
				decoder.read_to_end(&mut out).unwrap();
				black_box(out)
			});
		});
	}

	group.finish();
}

/// Benchmark whole-file GP decoding including frame rendering
fn bench_gp_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("gp_decode");
	let palette = Palette::grayscale(256);

	let cases = [("small", 32u8, 32i16, 4usize), ("large", 128, 128, 16)];
	for (name, width, height, frames) in cases {
		let data = generate_test_gp_data(width, height, frames);
		let pixels = u64::from(width) * height as u64 * frames as u64;
		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("decode", name), &data, |b, data| {
			b.iter(|| {
				let file = gp::File::from_bytes(black_box(data), &palette).unwrap();
				black_box(file)
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_lzss_decode, bench_gp_decode);
criterion_main!(benches);
