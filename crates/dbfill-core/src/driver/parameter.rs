use crate::{
    schema::StorageType,
    stmt::{TableValue, Value},
};

/// A named value attached to a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: ParameterValue,

    /// Explicit storage type. When `None` the driver infers one from the value.
    pub storage_type: Option<StorageType>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    Scalar(Value),
    Table(TableValue),
}

impl Parameter {
    /// Creates a parameter holding null.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ParameterValue::Scalar(Value::Null),
            storage_type: None,
        }
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = ParameterValue::Scalar(value.into());
    }

    /// Stores a table value and marks the parameter as structured.
    pub fn set_table(&mut self, table: TableValue) {
        self.value = ParameterValue::Table(table);
        self.storage_type = Some(StorageType::Structured);
    }

    pub fn set_storage_type(&mut self, ty: StorageType) {
        self.storage_type = Some(ty);
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match &self.value {
            ParameterValue::Scalar(value) => Some(value),
            ParameterValue::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&TableValue> {
        match &self.value {
            ParameterValue::Table(table) => Some(table),
            ParameterValue::Scalar(_) => None,
        }
    }

    /// The explicit storage type, or the one inferred from the value.
    pub fn effective_storage_type(&self) -> Option<StorageType> {
        self.storage_type.or_else(|| match &self.value {
            ParameterValue::Scalar(value) => StorageType::infer(value),
            ParameterValue::Table(_) => Some(StorageType::Structured),
        })
    }
}
