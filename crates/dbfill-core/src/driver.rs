mod command;
pub use command::{Command, CommandKind, Statement};

mod cursor;
pub use cursor::Cursor;

mod parameter;
pub use parameter::{Parameter, ParameterValue};

mod result_set;
pub use result_set::ResultSet;

use crate::{async_trait, Result};

use std::fmt::Debug;

/// An open connection able to execute statements.
#[async_trait]
pub trait Connection: Debug + Send {
    /// Executes `statement` and returns a cursor over its rows.
    async fn query(&mut self, statement: &Statement) -> Result<Box<dyn Cursor + Send>>;
}

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;

    /// Command text used to call a stored procedure.
    fn procedure_text(&self, schema: Option<&str>, name: &str) -> String {
        match schema {
            Some(schema) if !schema.trim().is_empty() => format!("[{schema}].[{name}]"),
            _ => format!("[{name}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Offline;

    #[async_trait]
    impl Driver for Offline {
        async fn connect(&self) -> Result<Box<dyn Connection>> {
            crate::bail!("offline")
        }
    }

    #[test]
    fn default_procedure_text() {
        assert_eq!(Offline.procedure_text(Some("dbo"), "GetUsers"), "[dbo].[GetUsers]");
        assert_eq!(Offline.procedure_text(None, "GetUsers"), "[GetUsers]");
        assert_eq!(Offline.procedure_text(Some(" "), "GetUsers"), "[GetUsers]");
    }
}
