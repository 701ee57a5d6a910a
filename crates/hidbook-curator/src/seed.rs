//! Deterministic RNGs derived from a string key.
//!
//! The key is hashed with SHA-256 and the digest is used as-is as the 32-byte
//! seed of a fresh [`StdRng`]. Every request builds its own generator; none is
//! shared between requests.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

#[must_use]
pub fn seed_bytes(key: &str) -> [u8; 32] {
    Sha256::digest(key.as_bytes()).into()
}

/// Builds an RNG that yields the same sequence for the same key.
#[must_use]
pub fn seeded_rng(key: &str) -> StdRng {
    StdRng::from_seed(seed_bytes(key))
}
