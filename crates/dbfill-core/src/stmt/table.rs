use crate::{schema::StorageType, stmt::Value, Error, Result};

use std::sync::Arc;

/// A column of a table-valued parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub name: String,
    pub ty: StorageType,
}

impl TableColumn {
    pub fn new(name: impl Into<String>, ty: StorageType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// One row of a table-valued parameter.
///
/// All records of a table share the same column layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    columns: Arc<[TableColumn]>,
    values: Vec<Value>,
}

impl Record {
    /// Creates a record, checking that there is exactly one value per column.
    pub fn new(columns: Arc<[TableColumn]>, values: Vec<Value>) -> Result<Self> {
        if columns.len() != values.len() {
            return Err(Error::argument_invalid(
                "values",
                format!(
                    "record has {} values but the table has {} columns",
                    values.len(),
                    columns.len()
                ),
            ));
        }

        Ok(Self { columns, values })
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Returns the value of the named column.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|column| column.name == name)
            .map(|index| &self.values[index])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A multi-row parameter value.
#[derive(Debug, Clone, PartialEq)]
pub struct TableValue {
    columns: Arc<[TableColumn]>,
    rows: Vec<Record>,
}

impl TableValue {
    pub fn new(columns: impl Into<Arc<[TableColumn]>>) -> Self {
        Self {
            columns: columns.into(),
            rows: vec![],
        }
    }

    /// Builds a table from records, which must all share `columns`.
    pub fn from_records(
        columns: impl Into<Arc<[TableColumn]>>,
        records: impl IntoIterator<Item = Record>,
    ) -> Result<Self> {
        let mut table = Self::new(columns);
        for record in records {
            if record.columns() != table.columns() {
                return Err(Error::argument_invalid(
                    "records",
                    "record column layout does not match the table",
                ));
            }
            table.rows.push(record);
        }
        Ok(table)
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    /// Appends a row built from `values`.
    pub fn push(&mut self, values: Vec<Value>) -> Result<()> {
        let record = Record::new(self.columns.clone(), values)?;
        self.rows.push(record);
        Ok(())
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
