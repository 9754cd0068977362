//! CLI argument definitions for the GTPC data generator.

use crate::error::PopulateError;
use crate::session::{PopulateConfig, SupplierIdMapping, DEFAULT_SEED};
use clap::Args;
use gtpc_core::Scale;
use std::path::PathBuf;

/// Arguments of a generation run.
#[derive(Args, Clone, Debug)]
pub struct DatagenArgs {
    /// Output directory for the CSV streams (must already exist)
    #[arg(long, short = 'd', env = "GTPC_DIRECTORY")]
    pub directory: PathBuf,

    /// Number of warehouses
    #[arg(
        long,
        short = 'w',
        env = "GTPC_WAREHOUSES",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub warehouses: u32,

    /// Random seed for deterministic generation
    #[arg(long, env = "GTPC_SEED", default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// YAML file overriding the benchmark cardinalities
    #[arg(long)]
    pub scale: Option<PathBuf>,

    /// How stock rows map onto supplier ids
    #[arg(long, value_enum, default_value_t = SupplierIdMapping::Modulo)]
    pub supplier_ids: SupplierIdMapping,
}

impl DatagenArgs {
    /// Build the run configuration, loading the scale file if one is given.
    pub fn into_config(self) -> Result<PopulateConfig, PopulateError> {
        let scale = match &self.scale {
            Some(path) => Scale::from_file(path)?,
            None => Scale::default(),
        };
        Ok(PopulateConfig::new(self.directory, self.warehouses)
            .with_seed(self.seed)
            .with_scale(scale)
            .with_supplier_ids(self.supplier_ids))
    }
}
