use std::collections::HashMap;

use crate::{FinderError, KmerFinder, KmerResult, validate_k};

/// Single pass grouping positions by window content, O(n * k) expected. The
/// map keys borrow their windows from the sequence, so nothing is copied
/// until a repeated group is emitted.
pub struct HashGroupingFinder;

impl KmerFinder for HashGroupingFinder {
  fn name(&self) -> &'static str {
    "HashGrouping"
  }

  fn find_repeated_kmers(&self, seq: &[u8], k: usize) -> Result<Vec<KmerResult>, FinderError> {
    validate_k(k)?;
    let n = seq.len();
    if n < k {
      return Ok(vec![]);
    }

    // keyed on window content, not window position
    let mut groups: HashMap<&[u8], Vec<usize>> = HashMap::new();
    for i in 0..=n - k {
      groups.entry(&seq[i..i + k]).or_default().push(i);
    }

    let mut results: Vec<KmerResult> = groups
      .into_iter()
      .filter(|(_, positions)| positions.len() > 1)
      .map(|(kmer, positions)| KmerResult::new(kmer.to_vec(), positions))
      .collect();

    results.sort_unstable();
    Ok(results)
  }
}

#[cfg(test)]
mod tests {
  use test_case::test_case;

  use super::*;

  #[test_case(b"ACGACGTACG", 3, vec![KmerResult::new(b"ACG".to_vec(), vec![0, 3, 7])] ; "single repeat")]
  #[test_case(b"ACACAC", 2,
    vec![
      KmerResult::new(b"AC".to_vec(), vec![0, 2, 4]),
      KmerResult::new(b"CA".to_vec(), vec![1, 3]),
    ] ; "two overlapping repeats, sorted by value")]
  #[test_case(b"ACGT", 4, vec![] ; "one window only")]
  #[test_case(b"", 5, vec![] ; "empty sequence")]
  fn finds_repeats(seq: &[u8], k: usize, expected: Vec<KmerResult>) {
    assert_eq!(expected, HashGroupingFinder.find_repeated_kmers(seq, k).unwrap());
  }

  #[test]
  fn rejects_zero_window() {
    assert_eq!(
      Err(FinderError::InvalidWindowLength),
      HashGroupingFinder.find_repeated_kmers(b"ACGT", 0)
    );
  }
}
