//! Generator session: configuration, id counters and the random source.

use crate::error::PopulateError;
use crate::sink::CsvSink;
use clap::ValueEnum;
use gtpc_core::{Scale, Stream};
use gtpc_generator::FieldGenerator;
use std::path::PathBuf;

/// Default seed.
pub const DEFAULT_SEED: u64 = 42;

/// How a stock row picks its supplier.
///
/// Both variants start from `(item_id * warehouse_id) mod suppliers`. That
/// formula yields `0` whenever the product is a multiple of the supplier
/// count, and `0` is not a supplier id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SupplierIdMapping {
    /// The raw formula, ids in `0..suppliers`.
    #[default]
    Modulo,
    /// A result of `0` is written as `suppliers`, ids in `1..=suppliers`.
    OneBased,
}

impl SupplierIdMapping {
    /// Supplier id for `item` stocked in `warehouse`.
    pub fn supplier_id(self, item: u32, warehouse: u32, suppliers: u32) -> u64 {
        let id = (u64::from(item) * u64::from(warehouse)) % u64::from(suppliers);
        match self {
            SupplierIdMapping::Modulo => id,
            SupplierIdMapping::OneBased if id == 0 => u64::from(suppliers),
            SupplierIdMapping::OneBased => id,
        }
    }
}

/// Configuration of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulateConfig {
    /// Existing directory receiving the streams.
    pub output_dir: PathBuf,
    pub warehouses: u32,
    pub seed: u64,
    pub scale: Scale,
    pub supplier_ids: SupplierIdMapping,
}

impl PopulateConfig {
    /// Benchmark scale, default seed, raw supplier mapping.
    pub fn new(output_dir: impl Into<PathBuf>, warehouses: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            warehouses,
            seed: DEFAULT_SEED,
            scale: Scale::default(),
            supplier_ids: SupplierIdMapping::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_supplier_ids(mut self, supplier_ids: SupplierIdMapping) -> Self {
        self.supplier_ids = supplier_ids;
        self
    }

    /// Reject invalid cardinalities and a missing output directory.
    pub fn validate(&self) -> Result<(), PopulateError> {
        self.scale.validate(self.warehouses)?;
        if !self.output_dir.is_dir() {
            return Err(PopulateError::OutputDirMissing(self.output_dir.clone()));
        }
        Ok(())
    }
}

/// A strictly increasing surrogate id counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    /// Assign the next id. The first id is 1.
    pub(crate) fn next_id(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// The last id assigned, 0 before the first.
    pub fn last(&self) -> u64 {
        self.last
    }
}

/// One counter per entity with generated surrogate ids. Regions and
/// nations take their ids from the static catalog.
#[derive(Debug, Clone, Default)]
pub struct IdCounters {
    pub warehouse: IdSequence,
    pub district: IdSequence,
    pub customer: IdSequence,
    pub item: IdSequence,
    pub supplier: IdSequence,
    pub stock: IdSequence,
    pub order: IdSequence,
    pub order_line: IdSequence,
}

/// State threaded through every entity routine.
pub struct Session {
    pub(crate) config: PopulateConfig,
    pub(crate) fields: FieldGenerator,
    pub(crate) ids: IdCounters,
}

impl Session {
    pub(crate) fn new(config: PopulateConfig) -> Self {
        let fields = FieldGenerator::new(config.seed);
        Self {
            config,
            fields,
            ids: IdCounters::default(),
        }
    }

    pub(crate) fn scale(&self) -> &Scale {
        &self.config.scale
    }

    pub(crate) fn warehouses(&self) -> u32 {
        self.config.warehouses
    }

    /// Open the sink for `stream` in the output directory.
    pub(crate) fn open(&self, stream: Stream) -> Result<CsvSink, PopulateError> {
        CsvSink::create(&self.config.output_dir, stream)
    }
}
