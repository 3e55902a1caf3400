//! Console table rendering.

use std::collections::HashMap;
use std::io::Write;

use log::info;
use serde_json::Value;

use super::Dump;
use crate::error::Result;
use crate::record::{value_text, PriceRecord};

/// A named column of rendered values, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

/// Converts row records into a field name -> values mapping.
///
/// Every column has one entry per record; a record lacking a field
/// contributes `Null` at its position so rows stay aligned.
pub fn transpose(records: &[PriceRecord]) -> HashMap<String, Vec<Value>> {
    let mut columns: HashMap<String, Vec<Value>> = HashMap::new();

    for (row, record) in records.iter().enumerate() {
        for (key, value) in record {
            let column = columns
                .entry(key.clone())
                .or_insert_with(|| vec![Value::Null; row]);
            column.push(value.clone());
        }
        for column in columns.values_mut() {
            if column.len() == row {
                column.push(Value::Null);
            }
        }
    }

    columns
}

/// Projects records onto `fields`, in that order.
///
/// Fields not listed are dropped; listed fields no record has still get a
/// column of empty values.
pub fn project(records: &[PriceRecord], fields: &[&str]) -> Vec<Column> {
    let columns = transpose(records);

    fields
        .iter()
        .map(|field| Column {
            name: field.to_string(),
            values: match columns.get(*field) {
                Some(values) => values.iter().map(value_text).collect(),
                None => vec![String::new(); records.len()],
            },
        })
        .collect()
}

/// Renders columns as a bordered text table.
///
/// ```text
/// +--------------+------------+
/// | display_name | estimate   |
/// +--------------+------------+
/// | uberX        | PHP204-250 |
/// +--------------+------------+
/// ```
pub fn render_table(columns: &[Column]) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .map(|c| {
            c.values
                .iter()
                .map(|v| v.chars().count())
                .chain(std::iter::once(c.name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let row_line = |cells: Vec<&str>| {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(&widths) {
            let pad = width - cell.chars().count();
            line.push(' ');
            line.push_str(cell);
            line.push_str(&" ".repeat(pad + 1));
            line.push('|');
        }
        line
    };

    let rows = columns.iter().map(|c| c.values.len()).max().unwrap_or(0);

    let mut lines = vec![border.clone()];
    lines.push(row_line(columns.iter().map(|c| c.name.as_str()).collect()));
    lines.push(border.clone());
    for row in 0..rows {
        lines.push(row_line(
            columns
                .iter()
                .map(|c| c.values.get(row).map_or("", String::as_str))
                .collect(),
        ));
    }
    if rows > 0 {
        lines.push(border);
    }

    let mut table = lines.join("\n");
    table.push('\n');
    table
}

/// Writes records to a console sink as a table of the configured fields.
pub struct TableDumper<W: Write> {
    out: W,
    fields: Vec<&'static str>,
}

impl<W: Write> TableDumper<W> {
    pub fn new(out: W, fields: &[&'static str]) -> Self {
        TableDumper {
            out,
            fields: fields.to_vec(),
        }
    }

    /// Returns the sink, consuming the dumper.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Dump for TableDumper<W> {
    fn dump(&mut self, records: &[PriceRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let table = render_table(&project(records, &self.fields));
        self.out.write_all(table.as_bytes())?;
        self.out.flush()?;

        info!("Fare estimates collected: {} products", records.len());
        Ok(())
    }
}
