//! Measurement driver: one timed invocation per (dataset, k, finder) cell.
//! The driver only collects records; interpreting or formatting them is the
//! caller's concern.

use std::thread;
use std::time::{Duration, Instant};

use crate::{FinderError, KmerFinder, memory};

/// One measured finder invocation.
#[derive(Clone, Debug)]
pub struct Measurement {
  pub dataset: String,
  pub k: usize,
  pub algorithm: &'static str,
  pub elapsed: Duration,
  pub mem_delta_bytes: usize,
  pub result_count: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct BenchConfig {
  /// Warm-up invocations are skipped for sequences at or above this length,
  /// to bound the total run time.
  pub warmup_threshold: usize,
  /// Settle delay before each measured run, to damp noise.
  pub settle: Duration,
}

impl Default for BenchConfig {
  fn default() -> Self {
    Self {
      warmup_threshold: 20_000,
      settle: Duration::from_millis(100),
    }
  }
}

// one cell; the warm-up result is discarded
pub fn measure(
  dataset: &str,
  seq: &[u8],
  k: usize,
  finder: &dyn KmerFinder,
  config: BenchConfig,
) -> Result<Measurement, FinderError> {
  if seq.len() < config.warmup_threshold {
    finder.find_repeated_kmers(seq, k)?;
  }

  // settle before sampling the baseline
  thread::sleep(config.settle);
  let mem_before = memory::live_bytes();
  memory::reset_peak();

  let start = Instant::now();
  let results = finder.find_repeated_kmers(seq, k)?;
  let elapsed = start.elapsed();

  // clamped: measurement noise must never surface as a negative delta
  let mem_delta_bytes = memory::peak_bytes().saturating_sub(mem_before);

  Ok(Measurement {
    dataset: dataset.to_string(),
    k,
    algorithm: finder.name(),
    elapsed,
    mem_delta_bytes,
    result_count: results.len(),
  })
}

// full matrix: every finder on every dataset at every k, strictly sequential
// so the measurements stay uncontended
pub fn run_matrix(
  datasets: &[(String, Vec<u8>)],
  ks: &[usize],
  finders: &[&dyn KmerFinder],
  config: BenchConfig,
) -> Result<Vec<Measurement>, FinderError> {
  let mut records = Vec::with_capacity(datasets.len() * ks.len() * finders.len());
  for (label, seq) in datasets {
    for &k in ks {
      for finder in finders {
        let m = measure(label, seq, k, *finder, config)?;
        log::info!(
          "{} k={} {}: {:.2?} ({} results)",
          m.dataset, m.k, m.algorithm, m.elapsed, m.result_count
        );
        records.push(m);
      }
    }
  }
  Ok(records)
}
