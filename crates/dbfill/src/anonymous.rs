use crate::{coerce, Load, Model, Param, Result, Schema, Store, Value};

/// A single value with a runtime name.
///
/// Sent as one parameter named by the alias, or populated from the first
/// column of a row.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AnonymousValue<T> {
    alias: String,
    value: T,
}

impl<T> AnonymousValue<T> {
    pub fn new(alias: impl Into<String>, value: T) -> Self {
        Self {
            alias: alias.into(),
            value,
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Store + Load + 'static> Model for AnonymousValue<T> {
    fn build_schema() -> Schema<Self> {
        fn alias<T>(model: &AnonymousValue<T>) -> &str {
            &model.alias
        }

        fn get<T: Store>(model: &AnonymousValue<T>) -> Param<'_> {
            model.value.store()
        }

        fn set<T: Load>(model: &mut AnonymousValue<T>, value: Value) -> Result<()> {
            model.value = coerce(value)?;
            Ok(())
        }

        Schema::scalar(
            core::any::type_name::<Self>(),
            alias::<T>,
            get::<T>,
            set::<T>,
        )
    }
}
