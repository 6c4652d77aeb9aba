//! Header and row types consumed by condition evaluation.

use anyhow::{bail, Result};
use std::collections::HashMap;

/// Maps column names to zero-based field positions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    indexes: HashMap<String, usize>,
    names: Vec<String>,
}

impl Header {
    /// Create a header from column names in field order.
    ///
    /// Fails if the same name appears twice.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut header = Header::default();
        for name in names {
            let name = name.into();
            if header.indexes.contains_key(&name) {
                bail!("Duplicate column name: {}", name);
            }
            header.indexes.insert(name.clone(), header.names.len());
            header.names.push(name);
        }
        Ok(header)
    }

    /// Look up the field position of a column
    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.indexes.get(column).copied()
    }

    /// Column names in field order
    pub fn columns(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One record: raw, untyped text fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Row::new(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for Row {
    fn from(fields: Vec<String>) -> Self {
        Row::new(fields)
    }
}
