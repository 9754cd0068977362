//! Core types for the GTPC graph data generator.
//!
//! This crate provides the static, non-random parts of the generator:
//!
//! - [`catalog`] - Region and nation catalogs, last-name syllables
//! - [`lexicon`] - Word lists for the comment grammar
//! - [`Scale`] - Cardinalities, loadable from YAML
//! - [`Entity`] - Generation routines and their dependency graph
//! - [`Stream`] - Output file names and headers
//!
//! # Architecture
//!
//! ```text
//! gtpc-core (this crate)
//!    │
//!    ├─── gtpc-generator      (reads catalog and lexicon tables)
//!    │
//!    └─── gtpc-populate-csv   (drives entities in dependency order,
//!                              writes one file per stream)
//! ```

pub mod catalog;
pub mod entity;
pub mod lexicon;
pub mod scale;
pub mod stream;

// Re-exports for convenience
pub use catalog::{Nation, Region, LAST_NAME_SYLLABLES, NATIONS, REGIONS};
pub use entity::{validate_order, Entity, PlanError, GENERATION_ORDER};
pub use scale::{Scale, ScaleError};
pub use stream::{Stream, FILE_SUFFIX};
