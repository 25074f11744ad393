use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use kmer_repeats::generate;
use kmer_repeats::verify::all_finders;

// Docs: https://bheisler.github.io/criterion.rs/book/user_guide/comparing_functions.html

fn bench_finders_on(c: &mut Criterion, groupname: &str, make_seq: impl Fn(&mut StdRng, usize) -> Vec<u8>) {
  let mut group = c.benchmark_group(groupname);
  let mut rng = StdRng::seed_from_u64(0xDA7A);

  for power in POWERS.step_by(STEP_SIZE) {
    let len = 1usize << power;
    let seq = make_seq(&mut rng, len);

    for finder in all_finders() {
      // quadratic scans make brute force unusable past the cap
      if finder.name() == "BruteForce" && len > BRUTE_FORCE_CAP {
        continue;
      }
      group.bench_with_input(BenchmarkId::new(finder.name(), len), &seq, |b, seq| {
        b.iter(|| black_box(finder.find_repeated_kmers(black_box(seq), K).unwrap()));
      });
    }
  }

  group.finish();
}

fn bench_uniform(c: &mut Criterion) {
  bench_finders_on(c, "Repeated k-mers on uniform sequences", |rng, len| {
    generate::uniform(rng, len)
  });
}

fn bench_periodic(c: &mut Criterion) {
  bench_finders_on(c, "Repeated k-mers on periodic sequences", |_, len| generate::periodic(len));
}

fn bench_biased(c: &mut Criterion) {
  bench_finders_on(c, "Repeated k-mers on biased sequences", |rng, len| {
    generate::biased(rng, len, 0.9)
  });
}

const K: usize = 10;
const BRUTE_FORCE_CAP: usize = 1 << 13;
const POWERS: std::ops::Range<usize> = 8..17;
const STEP_SIZE: usize = 2;

criterion_group!(uniform, bench_uniform);
criterion_group!(periodic, bench_periodic);
criterion_group!(biased, bench_biased);
criterion_main!(uniform, periodic, biased);
