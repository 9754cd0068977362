//! Append-only pipe-delimited sink for one output stream.
//!
//! Rows go to a temporary file in the output directory. [`CsvSink::finish`]
//! flushes it and renames it onto `<stream>_0_0.csv`; a sink dropped before
//! that removes its temporary file, so an aborted run never leaves a partial
//! stream behind.

use crate::error::PopulateError;
use crate::metrics::StreamMetrics;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use gtpc_core::Stream;
use std::fmt::Write as _;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Field delimiter.
pub const DELIMITER: u8 = b'|';

const PROGRESS_INTERVAL: u64 = 100_000;

/// One field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Int(i64),
    /// Float written with a fixed number of decimal places.
    Fixed { value: f64, precision: usize },
    Text(&'a str),
}

impl Field<'_> {
    pub fn fixed(value: f64, precision: usize) -> Self {
        Field::Fixed { value, precision }
    }
}

impl From<i64> for Field<'_> {
    fn from(value: i64) -> Self {
        Field::Int(value)
    }
}

impl From<u64> for Field<'_> {
    fn from(value: u64) -> Self {
        debug_assert!(value <= i64::MAX as u64);
        Field::Int(value as i64)
    }
}

impl From<u32> for Field<'_> {
    fn from(value: u32) -> Self {
        Field::Int(i64::from(value))
    }
}

impl<'a> From<&'a str> for Field<'a> {
    fn from(value: &'a str) -> Self {
        Field::Text(value)
    }
}

impl<'a> From<&'a String> for Field<'a> {
    fn from(value: &'a String) -> Self {
        Field::Text(value.as_str())
    }
}

/// Sink for one stream.
pub struct CsvSink {
    stream: Stream,
    path: PathBuf,
    writer: Writer<BufWriter<NamedTempFile>>,
    rows_written: u64,
    scratch: String,
}

impl CsvSink {
    /// Open the sink for `stream` inside `dir` and write its header.
    pub fn create(dir: &Path, stream: Stream) -> Result<Self, PopulateError> {
        let path = dir.join(stream.file_name());
        let temp = tempfile::Builder::new()
            .prefix(&format!(".{}", stream.name()))
            .suffix(".tmp")
            .tempfile_in(dir)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, temp);
        let mut writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(buf_writer);
        writer.write_record(stream.columns())?;

        debug!("Opened stream '{}' at {}", stream.name(), path.display());

        Ok(Self {
            stream,
            path,
            writer,
            rows_written: 0,
            scratch: String::new(),
        })
    }

    /// Append one field to the current record.
    pub fn field<'a>(&mut self, field: impl Into<Field<'a>>) -> Result<(), PopulateError> {
        match field.into() {
            Field::Text(text) => self.writer.write_field(text)?,
            Field::Int(value) => {
                self.scratch.clear();
                let _ = write!(self.scratch, "{value}");
                self.writer.write_field(&self.scratch)?;
            }
            Field::Fixed { value, precision } => {
                self.scratch.clear();
                let _ = write!(self.scratch, "{value:.precision$}");
                self.writer.write_field(&self.scratch)?;
            }
        }
        Ok(())
    }

    /// Terminate the current record.
    pub fn end_record(&mut self) -> Result<(), PopulateError> {
        self.writer.write_record(None::<&[u8]>)?;
        self.rows_written += 1;
        if self.rows_written % PROGRESS_INTERVAL == 0 {
            debug!("Written {} rows to '{}'", self.rows_written, self.stream.name());
        }
        Ok(())
    }

    /// Write a whole record.
    pub fn record<'a, I>(&mut self, fields: I) -> Result<(), PopulateError>
    where
        I: IntoIterator<Item = Field<'a>>,
    {
        for field in fields {
            self.field(field)?;
        }
        self.end_record()
    }

    /// Write a two-column edge record.
    pub fn edge(&mut self, from: u64, to: u64) -> Result<(), PopulateError> {
        self.field(from)?;
        self.field(to)?;
        self.end_record()
    }

    /// Rows written so far, header excluded.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Flush the stream and move it onto its final path.
    pub fn finish(mut self) -> Result<StreamMetrics, PopulateError> {
        self.writer.flush()?;
        let buf_writer = self
            .writer
            .into_inner()
            .map_err(|e| PopulateError::Io(std::io::Error::other(e.to_string())))?;
        let temp = buf_writer.into_inner().map_err(|e| e.into_error())?;
        let file = temp.persist(&self.path)?;
        let file_size_bytes = file.metadata()?.len();

        Ok(StreamMetrics {
            stream: self.stream,
            rows_written: self.rows_written,
            file_size_bytes,
        })
    }
}
