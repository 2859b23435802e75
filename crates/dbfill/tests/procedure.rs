use dbfill::{
    async_trait, bail, AnonymousValue, Connection, Cursor, Driver, Error, Model, ProcedureConfig,
    Procedures, ResultSet, Result, Statement, Value,
};

use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

/// Replays a canned result and records every statement it receives.
#[derive(Debug, Clone)]
struct Canned {
    rows: ResultSet,
    fail_query: bool,
    executed: Arc<Mutex<Vec<Statement>>>,
}

impl Canned {
    fn new(rows: ResultSet) -> Self {
        Self {
            rows,
            fail_query: false,
            executed: Arc::default(),
        }
    }

    fn executed(&self) -> Vec<Statement> {
        self.executed.lock().unwrap().clone()
    }
}

#[derive(Debug)]
struct CannedConnection(Canned);

#[async_trait]
impl Driver for Canned {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Ok(Box::new(CannedConnection(self.clone())))
    }
}

#[async_trait]
impl Connection for CannedConnection {
    async fn query(&mut self, statement: &Statement) -> Result<Box<dyn Cursor + Send>> {
        self.0.executed.lock().unwrap().push(statement.clone());
        if self.0.fail_query {
            bail!("deadlock victim");
        }
        Ok(Box::new(self.0.rows.clone()))
    }
}

#[derive(Debug)]
struct Unreachable;

#[async_trait]
impl Driver for Unreachable {
    async fn connect(&self) -> Result<Box<dyn Connection>> {
        Err(Error::driver(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

#[derive(Debug, Default, Model)]
#[dbfill(prefix = "@")]
struct Search {
    pub name: String,
    pub limit: i32,
}

#[derive(Debug, Default, PartialEq, Model)]
#[dbfill(direction = from_store)]
struct User {
    pub id: i64,
    pub name: String,
}

fn users() -> ResultSet {
    let mut rows = ResultSet::new(["id", "name"]).unwrap();
    rows.push_row(vec![Value::I64(1), Value::from("ann")]).unwrap();
    rows.push_row(vec![Value::I64(2), Value::from("bob")]).unwrap();
    rows
}

fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
    }
}

#[tokio::test]
async fn execute_projects_and_populates() {
    let driver = Canned::new(users());
    let procedures = Procedures::connect(driver.clone(), ProcedureConfig::new().schema("app"))
        .await
        .unwrap();

    let input = Search {
        name: "a%".to_string(),
        limit: 10,
    };
    let response = procedures.execute::<_, User>("FindUsers", &input).await;

    assert!(!response.has_error(), "{:?}", response.error_message());
    assert_eq!(response.results(), &[user(1, "ann"), user(2, "bob")]);

    let executed = driver.executed();
    assert_eq!(executed.len(), 1);
    assert_eq!(executed[0].text, "[app].[FindUsers]");
    assert_eq!(
        executed[0].parameter("@limit").and_then(|p| p.as_scalar()),
        Some(&Value::I32(10))
    );
    assert_eq!(executed[0].len(), 2);
}

#[tokio::test]
async fn execute_without_input_sends_no_parameters() {
    let driver = Canned::new(users());
    let procedures = Procedures::connect(driver.clone(), ProcedureConfig::default())
        .await
        .unwrap();

    let response = procedures.execute_without_input::<User>("AllUsers").await;
    assert_eq!(response.results().len(), 2);

    let executed = driver.executed();
    assert_eq!(executed[0].text, "[AllUsers]");
    assert!(executed[0].is_empty());
}

#[tokio::test]
async fn anonymous_input_and_output() {
    let mut rows = ResultSet::new(["Total"]).unwrap();
    rows.push_row(vec![Value::I32(7)]).unwrap();

    let driver = Canned::new(rows);
    let procedures = Procedures::connect(driver.clone(), ProcedureConfig::default())
        .await
        .unwrap();

    let response = procedures
        .execute::<_, AnonymousValue<i32>>("CountOrders", &AnonymousValue::new("@CustomerId", 5_i64))
        .await;

    let totals: Vec<i32> = response.into_iter().map(AnonymousValue::into_value).collect();
    assert_eq!(totals, vec![7]);
    assert!(driver.executed()[0].contains("@CustomerId"));
}

#[tokio::test]
async fn empty_result_has_no_rows_and_no_error() {
    let driver = Canned::new(ResultSet::new(["id", "name"]).unwrap());
    let procedures = Procedures::connect(driver, ProcedureConfig::default())
        .await
        .unwrap();

    let response = procedures.execute_without_input::<User>("Nobody").await;
    assert!(!response.has_result());
    assert!(!response.has_error());
}

#[tokio::test]
async fn connect_checks_the_driver() {
    let err = Procedures::connect(Unreachable, ProcedureConfig::default())
        .await
        .unwrap_err();

    assert!(err.is_argument_invalid());
    assert!(err.is_driver());
    assert!(err.to_string().contains("couldn't open connection"), "{err}");
}

#[tokio::test]
async fn blank_procedure_name_fails_without_connecting() {
    let driver = Canned::new(users());
    let procedures = Procedures::connect(driver.clone(), ProcedureConfig::default())
        .await
        .unwrap();

    let response = procedures.execute_without_input::<User>("   ").await;
    assert!(response.has_error());
    assert!(response.error().unwrap().is_argument_invalid());
    assert!(driver.executed().is_empty());
}

#[tokio::test]
async fn query_failure_is_folded_into_response() {
    let mut driver = Canned::new(users());
    driver.fail_query = true;
    let procedures = Procedures::connect(driver, ProcedureConfig::default())
        .await
        .unwrap();

    let response = procedures.execute_without_input::<User>("Broken").await;
    assert!(response.has_error());
    assert!(!response.has_result());

    let message = response.error_message().unwrap();
    assert!(message.contains("procedure `Broken`"), "{message}");
    assert!(message.contains("command: '[Broken]'"), "{message}");
    assert!(message.contains("deadlock victim"), "{message}");

    let err = response.into_result().unwrap_err();
    assert!(err.to_string().ends_with("deadlock victim"), "{err}");
}

#[tokio::test]
async fn populate_failure_is_folded_into_response() {
    let mut rows = ResultSet::new(["id"]).unwrap();
    rows.push_row(vec![Value::I64(1)]).unwrap();

    let procedures = Procedures::connect(Canned::new(rows), ProcedureConfig::default())
        .await
        .unwrap();

    let response = procedures.execute_without_input::<User>("Partial").await;
    assert!(response.has_error());
    assert!(response.error().unwrap().is_missing_column());
    assert!(response.results().is_empty());
}

#[test]
fn config_deserializes_with_defaults() {
    let config: ProcedureConfig = serde_json::from_str(r#"{ "schema": "dbo" }"#).unwrap();
    assert_eq!(config, ProcedureConfig::new().schema("dbo"));

    let config: ProcedureConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.schema, None);
}
