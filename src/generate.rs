//! Synthetic sequence generators. Every randomized generator takes its rng
//! explicitly, so fixtures are reproducible from a seed.

use rand::Rng;
use rand::distributions::Uniform;

pub const NUCLEOTIDES: [u8; 4] = *b"ACGT";

// each position drawn independently and uniformly from the alphabet
pub fn uniform(rng: &mut impl Rng, len: usize) -> Vec<u8> {
  let dist = Uniform::new(0, NUCLEOTIDES.len());
  (0..len).map(|_| NUCLEOTIDES[rng.sample(dist)]).collect()
}

// the alphabet repeated cyclically (period 4), maximal repetition
pub fn periodic(len: usize) -> Vec<u8> {
  (0..len).map(|i| NUCLEOTIDES[i % NUCLEOTIDES.len()]).collect()
}

// G and C jointly occur with probability `gc_content`, split evenly between
// them; A and T share the complement the same way
pub fn biased(rng: &mut impl Rng, len: usize, gc_content: f64) -> Vec<u8> {
  (0..len)
    .map(|_| {
      if rng.gen_bool(gc_content) {
        if rng.gen_bool(0.5) { b'G' } else { b'C' }
      } else if rng.gen_bool(0.5) {
        b'A'
      } else {
        b'T'
      }
    })
    .collect()
}
