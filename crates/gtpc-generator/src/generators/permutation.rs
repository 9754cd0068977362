//! Random permutations of an integer range.

use super::numeric::uniform_int;
use crate::GeneratorError;
use rand::RngCore;

/// Return the integers `min..max_exclusive` in uniformly random order.
///
/// Fisher-Yates: position `i` is swapped with a position drawn from
/// `i..count`, itself included.
pub fn generate_permutation<R: RngCore + ?Sized>(
    rng: &mut R,
    min: u32,
    max_exclusive: u32,
) -> Result<Vec<u32>, GeneratorError> {
    if max_exclusive <= min {
        return Err(GeneratorError::EmptyRange {
            min,
            max: max_exclusive,
        });
    }
    let mut values: Vec<u32> = (min..max_exclusive).collect();
    let last = values.len() as u32 - 1;
    for i in 0..values.len() {
        let j = uniform_int(rng, i as u32, last) as usize;
        values.swap(i, j);
    }
    Ok(values)
}
