use super::Parameter;
use crate::{Error, Result};

/// A command that accepts named parameters.
pub trait Command {
    /// Creates a detached parameter. It is not part of the command until
    /// passed to [`add_parameter`](Command::add_parameter).
    fn create_parameter(&self, name: &str) -> Parameter {
        Parameter::new(name)
    }

    fn add_parameter(&mut self, parameter: Parameter) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    #[default]
    Text,
    StoredProcedure,
}

/// A command text plus its parameters.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Statement {
    pub text: String,
    pub kind: CommandKind,
    parameters: Vec<Parameter>,
}

impl Statement {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CommandKind::Text,
            parameters: vec![],
        }
    }

    pub fn procedure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CommandKind::StoredProcedure,
            parameters: vec![],
        }
    }

    /// Parameters in the order they were added.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|param| param.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parameter(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn clear_parameters(&mut self) {
        self.parameters.clear();
    }
}

impl Command for Statement {
    fn add_parameter(&mut self, parameter: Parameter) -> Result<()> {
        if self.contains(&parameter.name) {
            return Err(Error::argument_invalid(
                "parameter",
                format!("duplicate parameter `{}`", parameter.name),
            ));
        }

        self.parameters.push(parameter);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::Value;

    #[test]
    fn add_in_order() {
        let mut stmt = Statement::procedure("[dbo].[Save]");
        let mut a = stmt.create_parameter("@a");
        a.set_value(1_i32);
        stmt.add_parameter(a).unwrap();
        let b = stmt.create_parameter("@b");
        stmt.add_parameter(b).unwrap();

        assert_eq!(stmt.kind, CommandKind::StoredProcedure);
        assert_eq!(stmt.len(), 2);
        assert_eq!(stmt.parameters()[0].name, "@a");
        assert_eq!(stmt.parameter("@a").unwrap().as_scalar(), Some(&Value::I32(1)));
        assert_eq!(stmt.parameter("@b").unwrap().as_scalar(), Some(&Value::Null));
    }

    #[test]
    fn create_does_not_attach() {
        let stmt = Statement::text("select 1");
        let _ = stmt.create_parameter("@a");
        assert!(stmt.is_empty());
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut stmt = Statement::text("select 1");
        stmt.add_parameter(Parameter::new("@a")).unwrap();
        let err = stmt.add_parameter(Parameter::new("@a")).unwrap_err();
        assert!(err.is_argument_invalid());
        assert_eq!(stmt.len(), 1);
    }
}
