//! Timestamp string generators.
//!
//! Only the calendar date is random; the time of day is fixed.

use super::numeric::uniform_int;
use super::pick;
use rand::RngCore;

/// Time-of-day suffix appended to every synthetic date.
pub const FIXED_TIME: &str = "T15:32:10.447+0000";

/// Written in place of a delivery date for undelivered order lines.
pub const NULL_DATE: &str = "1970-01-01T00:00:00.000+0000";

const MONTHS: [&str; 12] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
];

/// Generate a timestamp with a year in `min_year..=max_year`, any month and a
/// day in `10..=28`.
pub fn generate_date<R: RngCore + ?Sized>(rng: &mut R, min_year: u32, max_year: u32) -> String {
    let year = uniform_int(rng, min_year, max_year);
    let month = pick(rng, &MONTHS);
    let day = uniform_int(rng, 10, 28);
    format!("{year}-{month}-{day}{FIXED_TIME}")
}
