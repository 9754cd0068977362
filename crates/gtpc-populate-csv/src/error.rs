//! Error types for the CSV populator.

use gtpc_core::{Entity, PlanError, ScaleError};
use gtpc_generator::GeneratorError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating the dataset.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Renaming a finished stream onto its final path failed.
    #[error("Failed to persist stream: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Invalid warehouse count or cardinalities.
    #[error("Scale error: {0}")]
    Scale(#[from] ScaleError),

    /// Field generator precondition violated.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Entity requested before its dependencies.
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// Output directory missing.
    #[error("Output directory '{0}' does not exist")]
    OutputDirMissing(PathBuf),

    /// Entity requested a second time.
    #[error("{0} has already been generated")]
    AlreadyGenerated(Entity),
}
