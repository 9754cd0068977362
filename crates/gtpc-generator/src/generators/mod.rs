//! Individual field generators.
//!
//! Every generator consumes raw 32-bit draws from the caller's RNG and
//! reduces them by modulo, so the sequence of draws per call is fixed and a
//! given seed always yields the same fields.

pub mod address;
pub mod date;
pub mod name;
pub mod numeric;
pub mod original;
pub mod permutation;
pub mod string;
pub mod text;

use rand::RngCore;

/// Reduce one raw draw to an index into a collection of `len` elements.
pub fn raw_index<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> usize {
    assert!(len > 0, "raw_index called with an empty collection");
    (u64::from(rng.next_u32()) % len as u64) as usize
}

/// Pick one element of a non-empty table with a single raw draw.
pub fn pick<'a, T, R: RngCore + ?Sized>(rng: &mut R, table: &'a [T]) -> &'a T {
    &table[raw_index(rng, table.len())]
}
