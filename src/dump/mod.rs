//! Output dumpers: append to a CSV file or print a console table.
//!
//! The target is chosen once at startup as an [`Output`] and reused for
//! every polling cycle.

mod csv_dumper;
mod table_dumper;

use std::io::Write;
use std::path::PathBuf;

pub use csv_dumper::CsvDumper;
pub use table_dumper::{project, render_table, transpose, Column, TableDumper};

use crate::error::Result;
use crate::record::PriceRecord;

/// Something that persists or displays a batch of records.
pub trait Dump {
    /// Writes `records`. An empty batch is a no-op.
    fn dump(&mut self, records: &[PriceRecord]) -> Result<()>;

    /// Whether records should carry a capture timestamp before dumping.
    fn wants_timestamp(&self) -> bool {
        false
    }
}

/// CSV target that reopens its file for each batch.
///
/// Every [`Dump::dump`] call opens a [`CsvDumper`], writes, and drops it,
/// so the handle is released between cycles and on every error path.
#[derive(Debug, Clone)]
pub struct CsvOutput {
    path: PathBuf,
    fields: Vec<&'static str>,
}

impl CsvOutput {
    pub fn new(path: impl Into<PathBuf>, fields: &[&'static str]) -> Self {
        CsvOutput {
            path: path.into(),
            fields: fields.to_vec(),
        }
    }
}

impl Dump for CsvOutput {
    fn dump(&mut self, records: &[PriceRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        let mut dumper = CsvDumper::open(&self.path, &self.fields)?;
        dumper.dump(records)
    }

    fn wants_timestamp(&self) -> bool {
        true
    }
}

/// The configured output target.
pub enum Output<W: Write> {
    Csv(CsvOutput),
    Table(TableDumper<W>),
}

impl<W: Write> Output<W> {
    /// CSV when a file was given, otherwise a table on `console`.
    pub fn select(
        output_file: Option<PathBuf>,
        console: W,
        csv_fields: &[&'static str],
        display_fields: &[&'static str],
    ) -> Self {
        match output_file {
            Some(path) => Output::Csv(CsvOutput::new(path, csv_fields)),
            None => Output::Table(TableDumper::new(console, display_fields)),
        }
    }
}

impl<W: Write> Dump for Output<W> {
    fn dump(&mut self, records: &[PriceRecord]) -> Result<()> {
        match self {
            Output::Csv(csv) => csv.dump(records),
            Output::Table(table) => table.dump(records),
        }
    }

    fn wants_timestamp(&self) -> bool {
        match self {
            Output::Csv(csv) => csv.wants_timestamp(),
            Output::Table(table) => table.wants_timestamp(),
        }
    }
}
