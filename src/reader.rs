use std::{collections::HashMap, fs::File, path::Path};

use csv::{ReaderBuilder, Trim};
use tracing::warn;

use crate::utils::{Result, SeedError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    line: u64,
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new(line: u64, fields: HashMap<String, String>) -> Self {
        Self { line, fields }
    }

    /// 1-based line in the source file.
    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    /// Rows dropped for a field-count mismatch.
    pub skipped: usize,
}

/// Reads a header-keyed CSV file. Rows whose field count differs from the
/// header's are dropped and counted, not reported as errors.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let csv_error = |source| SeedError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut table = Table {
        headers,
        ..Table::default()
    };

    if table.headers.is_empty() {
        return Ok(table);
    }

    for (i, column) in table.headers.iter().enumerate() {
        if table.headers[..i].contains(column) {
            return Err(SeedError::DuplicateColumn {
                path: path.to_path_buf(),
                column: column.clone(),
            });
        }
    }

    for result in reader.records() {
        let row = result.map_err(csv_error)?;
        let line = row.position().map_or(0, |p| p.line());

        if row.len() != table.headers.len() {
            warn!(
                file = %path.display(),
                line,
                expected = table.headers.len(),
                found = row.len(),
                "dropping row with mismatched column count"
            );
            table.skipped += 1;
            continue;
        }

        let fields = table
            .headers
            .iter()
            .cloned()
            .zip(row.iter().map(str::to_owned))
            .collect();

        table.records.push(Record::new(line, fields));
    }

    Ok(table)
}
