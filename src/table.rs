//! Delimited-text tables.
//!
//! The first line names the columns; every following non-empty line is a
//! row. Fields are split on a single delimiter character and kept verbatim.

use crate::access::{Header, Row};
use crate::expression::{Clause, ExpressionResult};
use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A header plus the rows that follow it
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    header: Header,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table, checking every row against the header width
    pub fn new(header: Header, rows: Vec<Row>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != header.len() {
                bail!(
                    "Row {} has {} fields, header has {} columns",
                    i,
                    row.len(),
                    header.len()
                );
            }
        }
        Ok(Self { header, rows })
    }

    /// Load a table from a file
    pub fn open(path: impl AsRef<Path>, delimiter: char) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        Self::from_reader(BufReader::new(file), delimiter)
            .with_context(|| format!("Failed to load table from {}", path.display()))
    }

    /// Load a table from delimited text
    pub fn from_reader<R: BufRead>(reader: R, delimiter: char) -> Result<Self> {
        let mut lines = reader.lines().enumerate();

        let header = match lines.next() {
            Some((_, line)) => {
                let line = line.context("Failed to read header line")?;
                Header::new(split_line(&line, delimiter))?
            }
            None => bail!("Input is empty: expected a header line"),
        };

        let mut rows = Vec::new();
        for (i, line) in lines {
            let line = line.with_context(|| format!("Failed to read line {}", i + 1))?;
            if line.trim().is_empty() {
                continue;
            }
            let row: Row = split_line(&line, delimiter).collect();
            if row.len() != header.len() {
                bail!(
                    "Line {}: expected {} fields, found {}",
                    i + 1,
                    header.len(),
                    row.len()
                );
            }
            rows.push(row);
        }

        log::debug!(
            "Loaded table with {} columns and {} rows",
            header.len(),
            rows.len()
        );
        Ok(Self { header, rows })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows for which the clause holds, in table order
    pub fn filter(&self, clause: &Clause) -> ExpressionResult<Vec<&Row>> {
        let mut matched = Vec::new();
        for row in &self.rows {
            if clause.evaluate(&self.header, row)? {
                matched.push(row);
            }
        }
        log::debug!(
            "WHERE {} matched {} of {} rows",
            clause,
            matched.len(),
            self.rows.len()
        );
        Ok(matched)
    }
}

/// Split a line on the delimiter, dropping a trailing carriage return
fn split_line(line: &str, delimiter: char) -> impl Iterator<Item = &str> {
    line.strip_suffix('\r').unwrap_or(line).split(delimiter)
}
