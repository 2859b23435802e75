use super::Cursor;
use crate::{stmt::Value, Error, Result};

use indexmap::IndexSet;

/// Rows held in memory behind the [`Cursor`] interface.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResultSet {
    columns: IndexSet<String>,
    rows: Vec<Vec<Value>>,

    /// `None` before the first call to `advance`.
    position: Option<usize>,
}

impl ResultSet {
    /// Creates an empty result with the given column names.
    pub fn new<I>(columns: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut set = IndexSet::new();
        for column in columns {
            let column = column.into();
            if set.contains(&column) {
                return Err(Error::invalid_result(format!(
                    "duplicate column `{column}`"
                )));
            }
            set.insert(column);
        }

        Ok(Self {
            columns: set,
            rows: vec![],
            position: None,
        })
    }

    /// Appends a row. It must have one value per column.
    pub fn push_row(&mut self, values: Vec<Value>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(Error::invalid_result(format!(
                "row has {} values but the result has {} columns",
                values.len(),
                self.columns.len()
            )));
        }

        self.rows.push(values);
        Ok(())
    }

    /// Builder form of [`push_row`](Self::push_row).
    pub fn with_row(mut self, values: Vec<Value>) -> Result<Self> {
        self.push_row(values)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Moves back before the first row.
    pub fn rewind(&mut self) {
        self.position = None;
    }

    fn current(&self) -> Result<&[Value]> {
        self.position
            .and_then(|index| self.rows.get(index))
            .map(Vec::as_slice)
            .ok_or_else(|| Error::invalid_result("cursor is not positioned on a row"))
    }
}

impl Cursor for ResultSet {
    fn advance(&mut self) -> Result<bool> {
        let next = self.position.map_or(0, |index| index + 1);
        self.position = Some(next.min(self.rows.len()));
        Ok(next < self.rows.len())
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, ordinal: usize) -> Option<&str> {
        self.columns.get_index(ordinal).map(String::as_str)
    }

    fn ordinal(&self, name: &str) -> Option<usize> {
        self.columns.get_index_of(name)
    }

    fn get_at(&self, ordinal: usize) -> Result<Value> {
        let row = self.current()?;
        row.get(ordinal).cloned().ok_or_else(|| {
            Error::invalid_result(format!(
                "ordinal {ordinal} out of range for {} columns",
                row.len()
            ))
        })
    }
}
