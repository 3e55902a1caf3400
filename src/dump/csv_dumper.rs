//! Append-only CSV dumping.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::info;
use serde_json::Value;

use crate::error::Result;
use crate::record::{value_text, PriceRecord};

/// An open CSV output file.
///
/// The file is opened in append mode and closed when the dumper is dropped,
/// on success and error paths alike. A header row is written on open only if
/// the file is empty at that moment.
#[derive(Debug)]
pub struct CsvDumper {
    path: PathBuf,
    fields: Vec<String>,
    file: File,
}

impl CsvDumper {
    /// Opens (creating if needed) `path` for appending rows with the given columns.
    pub fn open(path: impl AsRef<Path>, fields: &[&str]) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

        let fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();

        if file.metadata()?.len() == 0 {
            let mut header = WriterBuilder::new()
                .quote_style(QuoteStyle::Necessary)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(Vec::new());
            header.write_record(&fields)?;
            file.write_all(&into_bytes(header)?)?;
            file.flush()?;
        }

        Ok(CsvDumper { path, fields, file })
    }

    /// Appends one row per record.
    ///
    /// Values follow the configured column order: extra keys are dropped and
    /// missing keys are written empty. Quoting follows the JSON type of each
    /// value, not its text: the string `"1020"` stays quoted while the
    /// number `1020` does not. The batch is serialised up front and written
    /// in one call, so rows never interleave with a partial batch.
    pub fn dump(&mut self, records: &[PriceRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        for record in records {
            writer.write_record(self.fields.iter().map(|field| csv_cell(record.get(field))))?;
        }

        self.file.write_all(&into_bytes(writer)?)?;
        self.file.flush()?;

        info!("Data collected: {}", self.path.display());
        Ok(())
    }
}

/// Formats one data cell.
///
/// Numbers and booleans are written bare, null or missing values empty,
/// and everything else as a quoted string with embedded quotes doubled.
fn csv_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => value.to_string(),
        Some(value) => format!("\"{}\"", value_text(value).replace('"', "\"\"")),
    }
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| e.into_error().into())
}
