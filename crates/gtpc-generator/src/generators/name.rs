//! Customer last-name construction.

use gtpc_core::LAST_NAME_SYLLABLES;

/// Build the last name for `n` in `0..1000` from the syllables of its
/// hundreds, tens and units digits. Deterministic.
pub fn last_name(n: u32) -> String {
    assert!(n < 1000, "last_name called with {n}, expected 0..1000");
    let digits = [n / 100, (n / 10) % 10, n % 10];
    digits
        .iter()
        .map(|&d| LAST_NAME_SYLLABLES[d as usize])
        .collect()
}
