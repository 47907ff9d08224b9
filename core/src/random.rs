//! Random test-data generation.

use rand::Rng;

/// Returns `len` random lowercase ASCII letters.
pub fn random_word(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len).map(|_| char::from(rng.random_range(b'a'..=b'z'))).collect()
}
