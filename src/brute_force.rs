use crate::{FinderError, KmerFinder, KmerResult, validate_k};

/// Exhaustive pairwise comparison, O(n^2 * k) worst case. No hashing and no
/// comparator subtleties, which makes this the oracle the other finders are
/// checked against.
pub struct BruteForceFinder;

impl KmerFinder for BruteForceFinder {
  fn name(&self) -> &'static str {
    "BruteForce"
  }

  fn find_repeated_kmers(&self, seq: &[u8], k: usize) -> Result<Vec<KmerResult>, FinderError> {
    validate_k(k)?;
    let n = seq.len();
    let mut results = vec![];
    if n < k {
      return Ok(results);
    }

    // positions already claimed by an earlier leader are never rescanned
    let mut visited = vec![false; n];

    for i in 0..=n - k {
      if visited[i] {
        continue;
      }

      let mut positions = vec![i];

      for j in i + 1..=n - k {
        if visited[j] {
          continue;
        }
        // symbol by symbol with early exit, no substring materialization
        if (0..k).all(|m| seq[i + m] == seq[j + m]) {
          positions.push(j);
          visited[j] = true;
        }
      }

      if positions.len() > 1 {
        visited[i] = true;
        results.push(KmerResult::new(seq[i..i + k].to_vec(), positions));
      }
    }

    results.sort_unstable();
    Ok(results)
  }
}
