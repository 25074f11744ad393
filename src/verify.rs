//! Equivalence harness: runs every finder on the same input and demands
//! element-wise identical output. A mismatch is a correctness defect in one of
//! the algorithms, never a transient condition.

use std::fmt;

use rand::Rng;
use rand::distributions::Uniform;
use thiserror::Error;

use crate::brute_force::BruteForceFinder;
use crate::hash_grouping::HashGroupingFinder;
use crate::sort_grouping::SortGroupingFinder;
use crate::{FinderError, KmerFinder, KmerResult, generate};

#[derive(Debug, Error)]
pub enum VerifyError {
  #[error(transparent)]
  Finder(#[from] FinderError),
  #[error("{0}")]
  Divergence(Box<Divergence>),
}

/// Two finders disagreed on one input. Carries both full result lists so the
/// divergent algorithm can be diagnosed from the report alone.
#[derive(Debug)]
pub struct Divergence {
  pub n: usize,
  pub k: usize,
  pub baseline_name: &'static str,
  pub baseline: Vec<KmerResult>,
  pub other_name: &'static str,
  pub other: Vec<KmerResult>,
}

impl fmt::Display for Divergence {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "finders disagree on input (n={}, k={}):", self.n, self.k)?;
    writeln!(f, "{} produced {} results:", self.baseline_name, self.baseline.len())?;
    for r in &self.baseline {
      writeln!(f, "  {r}")?;
    }
    writeln!(f, "{} produced {} results:", self.other_name, self.other.len())?;
    for r in &self.other {
      writeln!(f, "  {r}")?;
    }
    Ok(())
  }
}

// the full strategy set; brute force first so it anchors every comparison
pub fn all_finders() -> [&'static dyn KmerFinder; 3] {
  [&BruteForceFinder, &HashGroupingFinder, &SortGroupingFinder]
}

/// Runs every finder on `(seq, k)` and compares the result lists element-wise
/// by (kmer, count, positions). Returns the agreed list.
pub fn check_equivalence(
  seq: &[u8],
  k: usize,
  finders: &[&dyn KmerFinder],
) -> Result<Vec<KmerResult>, VerifyError> {
  let Some((first, rest)) = finders.split_first() else {
    return Ok(vec![]);
  };

  let baseline = first.find_repeated_kmers(seq, k)?;
  for finder in rest {
    let candidate = finder.find_repeated_kmers(seq, k)?;
    if candidate != baseline {
      return Err(VerifyError::Divergence(Box::new(Divergence {
        n: seq.len(),
        k,
        baseline_name: first.name(),
        baseline,
        other_name: finder.name(),
        other: candidate,
      })));
    }
  }
  Ok(baseline)
}

/// Differential testing over randomized inputs: each trial draws a length, a
/// window size and a generation policy, then demands agreement of all finders.
pub fn randomized_trials(
  rng: &mut impl Rng,
  trials: usize,
  finders: &[&dyn KmerFinder],
) -> Result<(), VerifyError> {
  let len_dist = Uniform::new_inclusive(10, 2000);
  for trial in 0..trials {
    let len = rng.sample(len_dist);
    let seq = match trial % 3 {
      0 => generate::uniform(rng, len),
      1 => generate::periodic(len),
      _ => generate::biased(rng, len, 0.9),
    };
    let k = rng.gen_range(1..=len);
    log::debug!("trial {trial}: n={len}, k={k}");
    check_equivalence(&seq, k, finders)?;
  }
  Ok(())
}
