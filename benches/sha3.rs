use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tiny_sha3::{hash, keccak_f1600, shake256, Sha3, Width};

fn bench_permutation(c: &mut Criterion) {
	let mut lanes = [0u64; 25];

	c.bench_function("keccak_f1600", |b| {
		b.iter(|| keccak_f1600(black_box(&mut lanes)));
	});
}

fn bench_one_shot(c: &mut Criterion) {
	let mut g = c.benchmark_group("sha3");
	let msg = vec![0xa5u8; 4096];

	for width in Width::ALL {
		g.throughput(Throughput::Bytes(msg.len() as u64));
		g.bench_with_input(BenchmarkId::new("one_shot", width), &msg, |b, msg| {
			b.iter(|| black_box(hash(black_box(msg), width)));
		});
	}

	g.finish();
}

fn bench_streaming(c: &mut Criterion) {
	let mut g = c.benchmark_group("sha3_streaming");
	let msg = vec![0x5au8; 4096];

	for chunk in [1, 64, 1024] {
		g.throughput(Throughput::Bytes(msg.len() as u64));
		g.bench_with_input(BenchmarkId::new("chunk", chunk), &chunk, |b, &chunk| {
			b.iter(|| {
				let mut hasher = Sha3::new(Width::W256);

				for piece in msg.chunks(chunk) {
					hasher.absorb(black_box(piece)).unwrap();
				}

				black_box(hasher.finalize().unwrap())
			});
		});
	}

	g.finish();
}

fn bench_shake(c: &mut Criterion) {
	c.bench_function("shake256_1k_out", |b| {
		b.iter(|| black_box(shake256(black_box(b"tiny"), 1024)));
	});
}

criterion_group!(benches, bench_permutation, bench_one_shot, bench_streaming, bench_shake);
criterion_main!(benches);
