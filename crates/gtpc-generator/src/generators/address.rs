//! Synthetic postal addresses.

use super::string::{alpha_string, digit_string};
use rand::RngCore;

/// The five address sub-fields shared by warehouses, districts and customers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street_1: String,
    pub street_2: String,
    pub city: String,
    /// Two alphanumeric characters.
    pub state: String,
    /// Nine digits.
    pub zip: String,
}

impl Address {
    /// The first character of the state, used as a nation key.
    pub fn state_key(&self) -> u8 {
        self.state.as_bytes()[0]
    }
}

/// Generate an address.
pub fn generate_address<R: RngCore + ?Sized>(rng: &mut R) -> Address {
    Address {
        street_1: alpha_string(rng, 10, 20),
        street_2: alpha_string(rng, 10, 20),
        city: alpha_string(rng, 10, 20),
        state: alpha_string(rng, 2, 2),
        zip: digit_string(rng, 9, 9),
    }
}
