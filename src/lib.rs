//! Detection of repeated fixed-length substrings (k-mers) in DNA sequences.
//! It contains the shared finder contract and three independent strategies with
//! different asymptotic behavior, plus the equivalence and benchmark drivers
//! that compare them.

use std::fmt;

use itertools::Itertools;
use thiserror::Error;

pub mod benchmark;
pub mod brute_force;
pub mod generate;
pub mod hash_grouping;
pub mod memory;
pub mod sort_grouping;
pub mod verify;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FinderError {
  #[error("window length must be at least 1")]
  InvalidWindowLength,
}

/// One repeated k-mer: its value, how often it occurs and every start position.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct KmerResult {
  pub kmer: Vec<u8>,
  pub count: usize,
  pub positions: Vec<usize>,
}

impl KmerResult {
  // positions need not arrive sorted; the count is derived, never supplied
  pub fn new(kmer: Vec<u8>, mut positions: Vec<usize>) -> Self {
    positions.sort_unstable();
    Self {
      kmer,
      count: positions.len(),
      positions,
    }
  }
}

impl fmt::Display for KmerResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}: count={}, positions=[{}]",
      String::from_utf8_lossy(&self.kmer),
      self.count,
      self.positions.iter().join(", "),
    )
  }
}

pub trait KmerFinder {
  fn name(&self) -> &'static str;

  /// Returns every k-mer starting at two or more positions of `seq`, sorted
  /// by k-mer value. `k` larger than the sequence is an empty result, not an
  /// error; `k == 0` is rejected.
  fn find_repeated_kmers(&self, seq: &[u8], k: usize) -> Result<Vec<KmerResult>, FinderError>;
}

// shared boundary check for all finders
pub(crate) fn validate_k(k: usize) -> Result<(), FinderError> {
  if k == 0 {
    return Err(FinderError::InvalidWindowLength);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn construction_sorts_positions_and_derives_count() {
    let r = KmerResult::new(b"ACG".to_vec(), vec![7, 0, 3]);
    assert_eq!(3, r.count);
    assert_eq!(vec![0, 3, 7], r.positions);
  }

  #[test]
  fn display_matches_report_shape() {
    let r = KmerResult::new(b"ACG".to_vec(), vec![3, 0]);
    assert_eq!("ACG: count=2, positions=[0, 3]", r.to_string());
  }

  #[test]
  fn results_order_by_kmer_value() {
    let a = KmerResult::new(b"AC".to_vec(), vec![0, 5]);
    let b = KmerResult::new(b"CA".to_vec(), vec![1, 3]);
    assert!(a < b);
  }
}
