use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use kmer_repeats::benchmark::{self, BenchConfig, Measurement};
use kmer_repeats::verify::{self, all_finders};
use kmer_repeats::{KmerFinder, KmerResult, generate, memory};

#[global_allocator]
static ALLOCATOR: memory::TrackingAllocator = memory::TrackingAllocator;

/// Compares three repeated k-mer search strategies on synthetic DNA: first a
/// verification phase proving they agree, then a benchmark matrix.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
  /// sequence length for the full three-way benchmark matrix
  #[arg(long, default_value_t = 10_000)]
  n: usize,

  /// sequence length for the hash-vs-sort round
  #[arg(long, default_value_t = 100_000)]
  large_n: usize,

  /// window lengths to benchmark
  #[arg(long, value_delimiter = ',', default_values_t = [10, 50, 200])]
  k: Vec<usize>,

  /// probability that a biased position is G or C
  #[arg(long, default_value_t = 0.9)]
  gc_content: f64,

  /// rng seed; omitted means a fresh seed from entropy
  #[arg(long)]
  seed: Option<u64>,

  /// randomized verification trials before benchmarking
  #[arg(long, default_value_t = 100)]
  trials: usize,

  /// skip the large-n hash-vs-sort round
  #[arg(long)]
  skip_large: bool,

  /// log verification progress per trial
  #[arg(short, long)]
  verbose: bool,
}

fn init_logger(verbose: bool) {
  let level = if verbose {
    log::LevelFilter::Debug
  } else {
    log::LevelFilter::Info
  };
  env_logger::Builder::from_default_env()
    .filter_level(level)
    .target(env_logger::Target::Stderr)
    .init();
}

fn main() -> Result<()> {
  let args = Args::parse();
  init_logger(args.verbose);

  if !(0.0..=1.0).contains(&args.gc_content) {
    bail!("--gc-content must lie in [0, 1]");
  }

  let mut rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };
  let finders = all_finders();

  log::info!("verification phase");
  let known = verify::check_equivalence(b"ACGACGTACG", 3, &finders)
    .context("verification failed on the known input")?;
  let expected = vec![KmerResult::new(b"ACG".to_vec(), vec![0, 3, 7])];
  if known != expected {
    bail!("known input produced unexpected repeats: {known:?}");
  }
  verify::randomized_trials(&mut rng, args.trials, &finders)
    .context("randomized verification failed")?;
  log::info!("all finders agree on {} randomized inputs", args.trials);

  log::info!("benchmark phase");
  let config = BenchConfig::default();
  let datasets = vec![
    ("Uniform".to_string(), generate::uniform(&mut rng, args.n)),
    ("Periodic".to_string(), generate::periodic(args.n)),
    ("Biased".to_string(), generate::biased(&mut rng, args.n, args.gc_content)),
  ];
  let mut records = benchmark::run_matrix(&datasets, &args.k, &finders, config)?;

  if !args.skip_large {
    // brute force sits this round out, its quadratic scans would dominate the
    // total run time
    let scalable: [&dyn KmerFinder; 2] = [finders[1], finders[2]];
    let large = vec![("Uniform_L".to_string(), generate::uniform(&mut rng, args.large_n))];
    records.extend(benchmark::run_matrix(&large, &args.k, &scalable, config)?);
  }

  print_table(&records);
  Ok(())
}

fn print_table(records: &[Measurement]) {
  println!(
    "{:<12} {:<5} {:<14} {:>10} {:>12} {:>8}",
    "Dataset", "K", "Algorithm", "Time(ms)", "Memory(MB)", "Results"
  );
  for m in records {
    println!(
      "{:<12} {:<5} {:<14} {:>10.2} {:>12.2} {:>8}",
      m.dataset,
      m.k,
      m.algorithm,
      m.elapsed.as_secs_f64() * 1000.0,
      m.mem_delta_bytes as f64 / (1024.0 * 1024.0),
      m.result_count,
    );
  }
}
