use crate::{
    stmt::{Record, TableColumn, TableValue},
    Error, Load, Param, Parameter, Result, Store, StructuredType, Target, Value,
};

use std::sync::Arc;

const ROW_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = '|';
const ESCAPE: char = '\\';

/// Element type of a [`Structured`] collection.
///
/// Describes how an element maps to one row of the table-valued parameter
/// and to one row of the delimited text form.
pub trait TableRow: Sized {
    /// Column layout shared by every row.
    fn columns() -> Vec<TableColumn>;

    /// Cell values, one per column.
    fn values(&self) -> Vec<Value>;

    /// Text fields of the delimited form, unescaped.
    ///
    /// The default uses each value's textual form. Null and binary values
    /// have none and fail; rows holding them must provide their own encoding.
    fn encode_fields(&self) -> Result<Vec<String>> {
        self.values()
            .into_iter()
            .map(|value| match value.to_text() {
                Some(text) => Ok(text),
                None => Err(Error::type_conversion(value, "structured text field")),
            })
            .collect()
    }

    /// Builds an element from the unescaped fields of one row.
    fn decode_fields(fields: &[&str]) -> Result<Self>;
}

/// An ordered collection sent as a single multi-row parameter.
///
/// In result rows the collection arrives as delimited text: every `;` ends a
/// row, fields are separated by `|`, and `\` escapes either separator or
/// itself. Empty text holds no rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Structured<T> {
    rows: Vec<T>,
}

impl<T> Structured<T> {
    pub fn new() -> Self {
        Self { rows: vec![] }
    }

    pub fn add(&mut self, row: T) {
        self.rows.push(row);
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn contains(&self, row: &T) -> bool
    where
        T: PartialEq,
    {
        self.rows.contains(row)
    }

    /// Removes the first element equal to `row`. Returns `true` if one was found.
    pub fn remove(&mut self, row: &T) -> bool
    where
        T: PartialEq,
    {
        match self.rows.iter().position(|r| r == row) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.rows
    }
}

impl<T: TableRow> Structured<T> {
    /// Native records, one per element, built as the iterator is consumed.
    pub fn records(&self) -> impl Iterator<Item = Result<Record>> + '_ {
        let columns: Arc<[TableColumn]> = T::columns().into();
        self.rows
            .iter()
            .map(move |row| Record::new(columns.clone(), row.values()))
    }

    pub fn to_table(&self) -> Result<TableValue> {
        let mut table = TableValue::new(T::columns());
        for row in &self.rows {
            table.push(row.values())?;
        }
        Ok(table)
    }

    /// Stores the collection in `parameter` and marks it structured.
    pub fn write_parameter(&self, parameter: &mut Parameter) -> Result<()> {
        parameter.set_table(self.to_table()?);
        Ok(())
    }

    /// Parses the delimited text form.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = vec![];

        for (index, fields) in split_rows(text)?.into_iter().enumerate() {
            let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
            let row = T::decode_fields(&fields).map_err(|err| {
                err.context(Error::format_invalid(format!(
                    "row {index} of structured text cannot be decoded"
                )))
            })?;
            rows.push(row);
        }

        Ok(Self { rows })
    }

    /// Encodes the collection as delimited text. Every row ends with `;`.
    pub fn encode(&self) -> Result<String> {
        let mut out = String::new();

        for (index, row) in self.rows.iter().enumerate() {
            let fields = row.encode_fields().map_err(|err| {
                err.context(Error::format_invalid(format!(
                    "row {index} cannot be encoded as structured text"
                )))
            })?;

            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(FIELD_SEPARATOR);
                }
                escape_into(&mut out, field);
            }
            out.push(ROW_SEPARATOR);
        }

        Ok(out)
    }
}

fn escape_into(out: &mut String, field: &str) {
    for c in field.chars() {
        if matches!(c, ESCAPE | ROW_SEPARATOR | FIELD_SEPARATOR) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
}

/// Splits delimited text into rows of unescaped fields. Text after the last
/// `;` forms a final row.
fn split_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = vec![];
    let mut row = vec![];
    let mut field = String::new();
    let mut chars = text.char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some((_, escaped @ (ESCAPE | ROW_SEPARATOR | FIELD_SEPARATOR))) => {
                    field.push(escaped)
                }
                Some((_, other)) => {
                    return Err(Error::format_invalid(format!(
                        "invalid escape `\\{other}` at offset {offset}"
                    )))
                }
                None => {
                    return Err(Error::format_invalid(format!(
                        "dangling escape at offset {offset}"
                    )))
                }
            },
            FIELD_SEPARATOR => row.push(std::mem::take(&mut field)),
            ROW_SEPARATOR => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            c => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    Ok(rows)
}

impl<T> Default for Structured<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Structured<T> {
    fn from(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

impl<T> FromIterator<T> for Structured<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Structured<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Structured<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T: TableRow> StructuredType for Structured<T> {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn write_parameter(&self, parameter: &mut Parameter) -> Result<()> {
        Structured::write_parameter(self, parameter)
    }

    fn encode(&self) -> Result<String> {
        Structured::encode(self)
    }
}

impl<T: TableRow> Store for Structured<T> {
    fn store(&self) -> Param<'_> {
        Param::Structured(self)
    }
}

impl<T: TableRow> Load for Structured<T> {
    const TARGET: Target = Target::Structured;
    const TYPE_NAME: &'static str = "Structured";

    fn load(value: Value) -> Result<Self> {
        match value.as_str() {
            Some(text) => Self::parse(text),
            None => Err(Error::type_conversion(value, Self::TYPE_NAME)),
        }
    }
}
