//! Column-oriented table value consumed by the sanitiser.
//!
//! Hosts with their own tabular representation only need to copy the two
//! columns under analysis into a [`Table`]; no particular in-memory layout
//! is assumed beyond name-addressable columns.

use std::collections::BTreeMap;

/// A single named column. Missing numeric values are represented as NaN.
#[derive(Debug, Clone)]
pub enum Column {
    /// Real-valued data; NaN marks a missing entry
    Numeric(Vec<f64>),
    /// String data; present so type errors can be reported, never analysed
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }

    /// The numeric values, or `None` for a non-numeric column.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Column::Numeric(values) => Some(values),
            Column::Text(_) => None,
        }
    }
}

/// An in-memory mapping from column name to column data.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: BTreeMap<String, Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a column, replacing any existing column with the same name.
    pub fn insert(&mut self, name: impl Into<String>, column: Column) {
        self.columns.insert(name.into(), column);
    }

    /// Builder-style [`Table::insert`].
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        self.insert(name, column);
        self
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }
}
