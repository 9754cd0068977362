//! Seeded field generator that owns the random source.

use crate::generators::address::{generate_address, Address};
use crate::generators::date::generate_date;
use crate::generators::numeric::{skewed_int, uniform_int};
use crate::generators::original::{embed_marker, OriginalMarks};
use crate::generators::permutation::generate_permutation;
use crate::generators::string::{alpha_string, digit_string};
use crate::generators::text::generate_text;
use crate::generators::pick;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Permutation over an empty range
    #[error("Permutation range {min}..{max} is empty")]
    EmptyRange { min: u32, max: u32 },

    /// More rows to mark than exist
    #[error("Cannot mark {count} rows out of a population of {population}")]
    MarkCountExceedsPopulation { count: u32, population: u32 },

    /// Data field too short for the originality marker
    #[error("Originality marker does not fit into a field of length {len}")]
    MarkerDoesNotFit { len: usize },
}

/// Field generator that produces deterministic values.
///
/// All randomness of a run comes from the one source owned here, consumed in
/// the fixed call order of the entity routines, so the same seed yields the
/// same output.
pub struct FieldGenerator<R = StdRng> {
    rng: R,
}

impl FieldGenerator<StdRng> {
    /// Create a new field generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> FieldGenerator<R> {
    /// Wrap an existing random source.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Integer in `min..=max`.
    pub fn uniform_int(&mut self, min: u32, max: u32) -> u32 {
        uniform_int(&mut self.rng, min, max)
    }

    /// Non-uniform integer in `x..=y`.
    pub fn skewed_int(&mut self, a: u32, x: u32, y: u32) -> u32 {
        skewed_int(&mut self.rng, a, x, y)
    }

    /// Integer in `min..=max` divided by `divisor`, e.g. cents to currency.
    pub fn scaled(&mut self, min: u32, max: u32, divisor: f64) -> f64 {
        f64::from(self.uniform_int(min, max)) / divisor
    }

    pub fn alpha_string(&mut self, min: usize, max: usize) -> String {
        alpha_string(&mut self.rng, min, max)
    }

    pub fn digit_string(&mut self, min: usize, max: usize) -> String {
        digit_string(&mut self.rng, min, max)
    }

    /// The integers `min..max_exclusive` in random order.
    pub fn permutation(&mut self, min: u32, max_exclusive: u32) -> Result<Vec<u32>, GeneratorError> {
        generate_permutation(&mut self.rng, min, max_exclusive)
    }

    pub fn address(&mut self) -> Address {
        generate_address(&mut self.rng)
    }

    pub fn date(&mut self, min_year: u32, max_year: u32) -> String {
        generate_date(&mut self.rng, min_year, max_year)
    }

    /// Grammar text with a length in `min..=max`.
    pub fn text(&mut self, min: usize, max: usize) -> String {
        generate_text(&mut self.rng, min, max)
    }

    /// One element of a non-empty table.
    pub fn pick<'a, T>(&mut self, table: &'a [T]) -> &'a T {
        pick(&mut self.rng, table)
    }

    /// Sample the marked rows of a population.
    pub fn original_marks(
        &mut self,
        population: u32,
        count: u32,
    ) -> Result<OriginalMarks, GeneratorError> {
        OriginalMarks::sample(&mut self.rng, population, count)
    }

    /// Embed the originality marker into `data`.
    pub fn embed_original(&mut self, data: &mut String) -> Result<usize, GeneratorError> {
        embed_marker(&mut self.rng, data)
    }
}
