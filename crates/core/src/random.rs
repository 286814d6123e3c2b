//! Random tokens and fixed-width random numbers.
//!
//! Both helpers draw from a [`RandomSource`]. The plain variants use the
//! system source; the `_with` variants take any source, which lets callers
//! plug in a deterministic one.

use rand::{Rng, RngCore};
use uuid::{Builder, Uuid};

use crate::constants::{
    DEFAULT_RANDOM_NUMBER_LENGTH, DEFAULT_TOKEN_LENGTH, MAX_RANDOM_NUMBER_LENGTH, MAX_TOKEN_LENGTH,
};

/// Source of randomness for token and number generation.
pub trait RandomSource {
    /// Fill `dest` with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Uniform integer in `low..=high`. Returns `low` when `high <= low`.
    fn next_in_range(&mut self, low: u64, high: u64) -> u64;
}

/// Thread-local CSPRNG from `rand`, seeded by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::rng().fill_bytes(dest);
    }

    fn next_in_range(&mut self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        rand::rng().random_range(low..=high)
    }
}

/// Lowercase hex token of `length` characters (default 10) taken from a v4 UUID.
///
/// At most 32 characters are available, so longer requests come back short.
#[must_use]
pub fn token(length: Option<usize>) -> String {
    let length = length.unwrap_or(DEFAULT_TOKEN_LENGTH);
    truncated_hex(Uuid::new_v4(), length)
}

/// [`token`] drawing the UUID bytes from `rng`.
#[must_use]
pub fn token_with<R: RandomSource + ?Sized>(rng: &mut R, length: usize) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    truncated_hex(Builder::from_random_bytes(bytes).into_uuid(), length)
}

fn truncated_hex(id: Uuid, length: usize) -> String {
    let mut hex = id.simple().to_string();
    hex.truncate(length.min(MAX_TOKEN_LENGTH));
    hex
}

/// Random integer with exactly `len` decimal digits (default 4).
///
/// `len` is clamped to `1..=19`.
#[must_use]
pub fn random_number(len: Option<u32>) -> u64 {
    let len = len.unwrap_or(DEFAULT_RANDOM_NUMBER_LENGTH);
    random_number_with(&mut SystemRandom, len)
}

/// [`random_number`] drawing from `rng`.
#[must_use]
pub fn random_number_with<R: RandomSource + ?Sized>(rng: &mut R, len: u32) -> u64 {
    let (low, high) = digit_bounds(len);
    rng.next_in_range(low, high)
}

/// Inclusive bounds of the integers with `len` decimal digits.
#[must_use]
pub fn digit_bounds(len: u32) -> (u64, u64) {
    let digits = len.clamp(1, MAX_RANDOM_NUMBER_LENGTH);
    let low = 10_u64.pow(digits.saturating_sub(1));
    let high = 10_u64.pow(digits).saturating_sub(1);
    (low, high)
}
