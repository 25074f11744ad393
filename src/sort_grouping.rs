use std::cmp::Ordering;

use crate::{FinderError, KmerFinder, KmerResult, validate_k};

// lexicographic comparison of the windows starting at `a` and `b`, read
// directly from the sequence; O(k) symbol reads, no allocation per comparison
pub fn compare_windows(seq: &[u8], a: usize, b: usize, k: usize) -> Ordering {
  seq[a..a + k].cmp(&seq[b..b + k])
}

/// Sorts the window start indices by window value, then scans once for runs
/// of equal windows. O(n * k * log n) for the sort plus O(n * k) for the scan.
pub struct SortGroupingFinder;

impl KmerFinder for SortGroupingFinder {
  fn name(&self) -> &'static str {
    "SortGrouping"
  }

  fn find_repeated_kmers(&self, seq: &[u8], k: usize) -> Result<Vec<KmerResult>, FinderError> {
    validate_k(k)?;
    let n = seq.len();
    if n < k {
      return Ok(vec![]);
    }

    let mut indices: Vec<usize> = (0..=n - k).collect();
    indices.sort_unstable_by(|&a, &b| compare_windows(seq, a, b, k));

    // equal windows are now adjacent; every maximal run of length >= 2 is one
    // repeated k-mer, materialized once from the run head
    let mut results = vec![];
    for run in indices.chunk_by(|&a, &b| compare_windows(seq, a, b, k) == Ordering::Equal) {
      if run.len() > 1 {
        // the index sort was not stable; the constructor re-sorts numerically
        results.push(KmerResult::new(seq[run[0]..run[0] + k].to_vec(), run.to_vec()));
      }
    }

    // runs already come out in window order, no final sort needed
    Ok(results)
  }
}

#[cfg(test)]
mod tests {
  use test_case::test_case;

  use super::*;

  #[test_case(b"ACGT", 0, 0, 2, Ordering::Equal ; "same offset")]
  #[test_case(b"ACAC", 0, 2, 2, Ordering::Equal ; "equal windows apart")]
  #[test_case(b"ACGT", 0, 1, 2, Ordering::Less ; "first window smaller")]
  #[test_case(b"TAAC", 0, 2, 2, Ordering::Greater ; "first window larger")]
  fn window_comparison(seq: &[u8], a: usize, b: usize, k: usize, expected: Ordering) {
    assert_eq!(expected, compare_windows(seq, a, b, k));
  }

  #[test_case(b"ACGACGTACG", 3, vec![KmerResult::new(b"ACG".to_vec(), vec![0, 3, 7])] ; "single repeat")]
  #[test_case(b"ACACAC", 2,
    vec![
      KmerResult::new(b"AC".to_vec(), vec![0, 2, 4]),
      KmerResult::new(b"CA".to_vec(), vec![1, 3]),
    ] ; "two overlapping repeats, sorted by value")]
  #[test_case(b"AC", 3, vec![] ; "window longer than sequence")]
  #[test_case(b"", 1, vec![] ; "empty sequence")]
  fn finds_repeats(seq: &[u8], k: usize, expected: Vec<KmerResult>) {
    assert_eq!(expected, SortGroupingFinder.find_repeated_kmers(seq, k).unwrap());
  }

  #[test]
  fn rejects_zero_window() {
    assert_eq!(
      Err(FinderError::InvalidWindowLength),
      SortGroupingFinder.find_repeated_kmers(b"ACGT", 0)
    );
  }
}
