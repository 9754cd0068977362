//! Row and timing metrics for a generation run.

use gtpc_core::{Entity, Stream};
use std::time::Duration;

/// Metrics of one finished output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamMetrics {
    pub stream: Stream,
    /// Number of data rows written, header excluded.
    pub rows_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

/// Metrics of one entity routine.
#[derive(Debug, Clone)]
pub struct EntityMetrics {
    pub entity: Entity,
    pub streams: Vec<StreamMetrics>,
    pub duration: Duration,
}

impl EntityMetrics {
    /// Rows written to `stream`, if this routine owns it.
    pub fn rows(&self, stream: Stream) -> Option<u64> {
        self.streams
            .iter()
            .find(|m| m.stream == stream)
            .map(|m| m.rows_written)
    }

    /// Rows written across all streams of this routine.
    pub fn rows_written(&self) -> u64 {
        self.streams.iter().map(|m| m.rows_written).sum()
    }
}

/// Metrics of a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    pub entities: Vec<EntityMetrics>,
    pub total_duration: Duration,
}

impl RunMetrics {
    /// Rows written to `stream` during the run.
    pub fn rows(&self, stream: Stream) -> Option<u64> {
        self.entities.iter().find_map(|e| e.rows(stream))
    }

    /// Rows written across all streams.
    pub fn rows_written(&self) -> u64 {
        self.entities.iter().map(EntityMetrics::rows_written).sum()
    }

    /// Bytes written across all streams.
    pub fn bytes_written(&self) -> u64 {
        self.entities
            .iter()
            .flat_map(|e| e.streams.iter())
            .map(|m| m.file_size_bytes)
            .sum()
    }

    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written() as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}
