use crate::{err, fill, Command, Driver, Error, Model, Response, Result, Statement};

use serde::Deserialize;
use tracing::{debug, warn};

/// Settings of a [`Procedures`] runner.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProcedureConfig {
    /// Schema the procedures live in. When unset the name is used alone.
    pub schema: Option<String>,
}

impl ProcedureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

/// Calls stored procedures by name and maps their input and output rows.
#[derive(Debug)]
pub struct Procedures<D> {
    driver: D,
    config: ProcedureConfig,
}

impl<D: Driver> Procedures<D> {
    /// Creates a runner, checking once that the driver can connect.
    pub async fn connect(driver: D, config: ProcedureConfig) -> Result<Self> {
        if let Err(err) = driver.connect().await {
            return Err(err.context(Error::argument_invalid(
                "driver",
                "connection appears to be invalid: couldn't open connection",
            )));
        }

        Ok(Self { driver, config })
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn config(&self) -> &ProcedureConfig {
        &self.config
    }

    /// Command text used for the procedure `name`.
    pub fn command_text(&self, name: &str) -> String {
        self.driver.procedure_text(self.config.schema.as_deref(), name)
    }

    /// Calls procedure `name` with the parameters projected from `input` and
    /// populates one `R` per returned row.
    ///
    /// `input` may be an [`AnonymousValue`](crate::AnonymousValue) to send a
    /// single parameter. Never fails: any error ends up in the response.
    pub async fn execute<I, R>(&self, name: &str, input: &I) -> Response<R>
    where
        I: Model + Sync,
        R: Model + Default,
    {
        self.run(name, |stmt| fill::project_parameters(stmt, input))
            .await
    }

    /// Calls procedure `name` without parameters.
    pub async fn execute_without_input<R>(&self, name: &str) -> Response<R>
    where
        R: Model + Default,
    {
        self.run(name, |_| Ok(())).await
    }

    async fn run<R, F>(&self, name: &str, project: F) -> Response<R>
    where
        R: Model + Default,
        F: FnOnce(&mut dyn Command) -> Result<()>,
    {
        if name.trim().is_empty() {
            return failed(
                "procedure name cannot be empty".to_string(),
                Error::argument_invalid("name", "procedure name cannot be empty"),
            );
        }

        let text = self.command_text(name);

        let mut connection = match self.driver.connect().await {
            Ok(connection) => connection,
            Err(err) => {
                return failed(
                    format!("couldn't open connection to database; procedure: {name}"),
                    err,
                )
            }
        };

        let mut stmt = Statement::procedure(text.clone());

        let rows: Result<Vec<R>> = async {
            project(&mut stmt)?;
            debug!(procedure = name, parameters = stmt.len(), "executing procedure");

            let mut cursor = connection.query(&stmt).await?;
            fill::populate_all::<R>(cursor.as_mut())
        }
        .await;

        match rows {
            Ok(rows) => {
                let mut response = Response::new();
                for row in rows {
                    response.add(row);
                }
                response
            }
            Err(err) => failed(
                format!(
                    "an error occurred while retrieving data for procedure `{name}`; command: '{text}'; error: {err}"
                ),
                err.context(err!("procedure `{name}` failed")),
            ),
        }
    }
}

fn failed<R>(message: String, cause: Error) -> Response<R> {
    warn!(error = %cause, "{message}");
    Response::failed(message, cause)
}
