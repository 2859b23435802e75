use crate::{stmt::Value, Error, Result};

/// Forward-only access to the rows of a result.
///
/// A cursor starts before the first row; call [`advance`](Cursor::advance)
/// before reading cells.
pub trait Cursor {
    /// Moves to the next row. Returns `false` once the rows are exhausted.
    fn advance(&mut self) -> Result<bool>;

    fn column_count(&self) -> usize;

    fn column_name(&self, ordinal: usize) -> Option<&str>;

    /// Position of the column named exactly `name`.
    fn ordinal(&self, name: &str) -> Option<usize>;

    /// Reads a cell of the current row by position.
    fn get_at(&self, ordinal: usize) -> Result<Value>;

    fn column_names(&self) -> Vec<&str> {
        (0..self.column_count())
            .filter_map(|ordinal| self.column_name(ordinal))
            .collect()
    }

    fn has_column(&self, name: &str) -> bool {
        self.ordinal(name).is_some()
    }

    /// Reads a cell of the current row by column name.
    fn get(&self, name: &str) -> Result<Value> {
        match self.ordinal(name) {
            Some(ordinal) => self.get_at(ordinal),
            None => Err(Error::invalid_result(format!("no column named `{name}`"))),
        }
    }

    fn is_null(&self, name: &str) -> Result<bool> {
        Ok(self.get(name)?.is_null())
    }
}
