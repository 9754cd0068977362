//! CSV populator for the GTPC graph benchmark.
//!
//! This crate drives the field generators of `gtpc-generator` through one
//! routine per entity and writes every entity and relationship as a
//! pipe-delimited `<stream>_0_0.csv` file. Identifiers are global surrogate
//! ids that are never reset per warehouse, so relationship streams are
//! plain id pairs.
//!
//! # Example
//!
//! ```ignore
//! use gtpc_populate_csv::{GraphPopulator, PopulateConfig};
//!
//! let config = PopulateConfig::new("/path/to/output", 1).with_seed(42);
//! let mut populator = GraphPopulator::new(config)?;
//! let metrics = populator.run()?;
//! println!("{} rows", metrics.rows_written());
//! ```

pub mod args;
mod entities;
mod error;
mod metrics;
mod populator;
mod session;
pub mod sink;

pub use args::DatagenArgs;
pub use entities::order::NULL_CARRIER;
pub use error::PopulateError;
pub use metrics::{EntityMetrics, RunMetrics, StreamMetrics};
pub use populator::GraphPopulator;
pub use session::{IdCounters, IdSequence, PopulateConfig, SupplierIdMapping, DEFAULT_SEED};
pub use sink::{CsvSink, Field};
