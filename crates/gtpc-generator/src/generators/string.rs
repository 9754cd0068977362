//! Random string generators.

use super::numeric::uniform_int;
use super::pick;
use rand::RngCore;

/// The 62-symbol alphabet used for alphanumeric fields.
pub const ALPHANUMERIC: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The alphabet used for numeric string fields.
pub const DIGITS: &[u8; 10] = b"0123456789";

/// Generate an alphanumeric string with a length drawn from `min..=max`.
pub fn alpha_string<R: RngCore + ?Sized>(rng: &mut R, min: usize, max: usize) -> String {
    from_alphabet(rng, ALPHANUMERIC, min, max)
}

/// Generate a string of decimal digits with a length drawn from `min..=max`.
pub fn digit_string<R: RngCore + ?Sized>(rng: &mut R, min: usize, max: usize) -> String {
    from_alphabet(rng, DIGITS, min, max)
}

fn from_alphabet<R: RngCore + ?Sized>(
    rng: &mut R,
    alphabet: &[u8],
    min: usize,
    max: usize,
) -> String {
    let len = uniform_int(rng, min as u32, max as u32) as usize;
    (0..len).map(|_| char::from(*pick(rng, alphabet))).collect()
}
