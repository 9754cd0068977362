//! Field synthesis primitives for the GTPC graph data generator.
//!
//! This crate provides the [`FieldGenerator`] which produces deterministic
//! field values from a seeded RNG. Every primitive reduces raw 32-bit draws
//! by modulo (`raw % (max - min + 1) + min`), so a fixed seed yields the same
//! values in the same call order on every platform.
//!
//! # Architecture
//!
//! ```text
//!        seed
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  FieldGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! └────────┬─────────┘
//!          │
//!          ▼
//!   generators::{numeric, string, address, date, name,
//!                permutation, text, original}
//! ```
//!
//! # Example
//!
//! ```rust
//! use gtpc_generator::FieldGenerator;
//!
//! let mut fields = FieldGenerator::new(42);
//! let name = fields.alpha_string(6, 10);
//! let tax = fields.scaled(10, 20, 100.0);
//! assert!((6..=10).contains(&name.len()));
//! assert!((0.10..=0.20).contains(&tax));
//! ```

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{FieldGenerator, GeneratorError};
pub use generators::address::Address;
pub use generators::date::{FIXED_TIME, NULL_DATE};
pub use generators::name::last_name;
pub use generators::original::{OriginalMarks, ORIGINAL_MARKER};
