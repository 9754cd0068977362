//! "Original" marking of item and stock data fields.
//!
//! A tenth of each marked population carries the literal [`ORIGINAL_MARKER`]
//! somewhere inside its variable-length data field.

use super::numeric::uniform_int;
use crate::GeneratorError;
use rand::RngCore;

/// The literal embedded into marked data fields.
pub const ORIGINAL_MARKER: &str = "ORIGINAL";

/// The set of marked rows of one population, indexed by 1-based id.
#[derive(Debug, Clone)]
pub struct OriginalMarks {
    marks: Vec<bool>,
    count: u32,
}

impl OriginalMarks {
    /// Mark `count` distinct rows out of `population`.
    ///
    /// Positions are drawn uniformly from `0..population` until an unmarked
    /// one comes up, so the result is a sample without replacement.
    pub fn sample<R: RngCore + ?Sized>(
        rng: &mut R,
        population: u32,
        count: u32,
    ) -> Result<Self, GeneratorError> {
        if count > population {
            return Err(GeneratorError::MarkCountExceedsPopulation { count, population });
        }
        let mut marks = vec![false; population as usize];
        for _ in 0..count {
            loop {
                let pos = uniform_int(rng, 0, population - 1) as usize;
                if !marks[pos] {
                    marks[pos] = true;
                    break;
                }
            }
        }
        Ok(Self { marks, count })
    }

    /// Whether the row with 1-based `id` is marked.
    pub fn is_marked(&self, id: u32) -> bool {
        id >= 1 && self.marks.get(id as usize - 1).copied().unwrap_or(false)
    }

    /// Number of marked rows.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Overwrite eight characters of `data` at a random offset with the marker.
/// Returns the offset.
pub fn embed_marker<R: RngCore + ?Sized>(
    rng: &mut R,
    data: &mut String,
) -> Result<usize, GeneratorError> {
    let marker_len = ORIGINAL_MARKER.len();
    if data.len() < marker_len || !data.is_ascii() {
        return Err(GeneratorError::MarkerDoesNotFit { len: data.len() });
    }
    let pos = uniform_int(rng, 0, (data.len() - marker_len) as u32) as usize;
    data.replace_range(pos..pos + marker_len, ORIGINAL_MARKER);
    Ok(pos)
}
