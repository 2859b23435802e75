use dbfill::{
    add_anonymous_parameter, populate, populate_all, project_parameters, AnonymousValue, Cursor,
    ResultSet, Statement, Value,
};

use uuid::Uuid;

#[test]
fn projects_single_parameter_named_by_alias() {
    let value = AnonymousValue::new("@UserId", 42_i32);

    let mut stmt = Statement::procedure("GetUser");
    project_parameters(&mut stmt, &value).unwrap();

    assert_eq!(stmt.len(), 1);
    let param = stmt.parameter("@UserId").unwrap();
    assert_eq!(param.as_scalar(), Some(&Value::I32(42)));
}

#[test]
fn alias_is_required() {
    let mut stmt = Statement::procedure("GetUser");
    let err = add_anonymous_parameter(&mut stmt, &AnonymousValue::new("", 1_i32)).unwrap_err();
    assert!(err.is_argument_invalid());
}

#[test]
fn populates_from_first_column() {
    let mut rows = ResultSet::new(["Count", "Other"])
        .unwrap()
        .with_row(vec![Value::I64(12), Value::from("ignored")])
        .unwrap();
    assert!(rows.advance().unwrap());

    let mut value = AnonymousValue::new("whatever", 0_u32);
    populate(&mut value, &rows).unwrap();
    assert_eq!(*value.value(), 12);
}

#[test]
fn identifier_from_text() {
    let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    let mut rows = ResultSet::new(["Id"])
        .unwrap()
        .with_row(vec![Value::from("67e55044-10b1-426f-9247-bb680e5fe0c8")])
        .unwrap();
    assert!(rows.advance().unwrap());

    let mut value = AnonymousValue::<Uuid>::default();
    populate(&mut value, &rows).unwrap();
    assert_eq!(value.into_value(), id);
}

#[test]
fn empty_row_is_missing_column() {
    let mut rows = ResultSet::new(Vec::<String>::new())
        .unwrap()
        .with_row(vec![])
        .unwrap();
    assert!(rows.advance().unwrap());

    let mut value = AnonymousValue::new("Total", 0_i32);
    let err = populate(&mut value, &rows).unwrap_err();
    assert!(err.is_missing_column());
    assert!(err.to_string().contains("`Total`"), "{err}");
}

#[test]
fn conversion_failure_has_context() {
    let mut rows = ResultSet::new(["Total"])
        .unwrap()
        .with_row(vec![Value::from("many")])
        .unwrap();
    assert!(rows.advance().unwrap());

    let mut value = AnonymousValue::new("Total", 0_i32);
    let err = populate(&mut value, &rows).unwrap_err();
    assert!(err.is_type_conversion());
    assert!(err.to_string().starts_with("cannot populate scalar value"), "{err}");
}

#[test]
fn populate_all_collects_each_row() {
    let mut rows = ResultSet::new(["Name"]).unwrap();
    rows.push_row(vec![Value::from("a")]).unwrap();
    rows.push_row(vec![Value::Null]).unwrap();

    let values: Vec<AnonymousValue<Option<String>>> = populate_all(&mut rows).unwrap();
    let values: Vec<_> = values.into_iter().map(AnonymousValue::into_value).collect();
    assert_eq!(values, vec![Some("a".to_string()), None]);
}
