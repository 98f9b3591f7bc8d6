use super::*;

#[test]
fn scenario_two_inserts_then_search() {
    let mut engine = Engine::with_store(MemStore::new()).unwrap();
    engine.create_database("d").unwrap();
    engine.select_db("d").unwrap();
    engine
        .create_table(
            "t",
            vec![
                field("id", DataType::Int, &[Constraint::Primary, Constraint::Increment]),
                field("name", DataType::VarChar, &[Constraint::NotNull]),
            ],
        )
        .unwrap();
    engine.execute("insert into t(name) values('a')").unwrap();
    engine.execute("insert into t(name) values('b')").unwrap();

    let expected: Vec<Record> = vec![
        [("id", Value::Int(1)), ("name", Value::from("a"))].into_iter().collect(),
        [("id", Value::Int(2)), ("name", Value::from("b"))].into_iter().collect(),
    ];
    assert_eq!(rows(&mut engine, "select * from t"), expected);
}

#[test]
fn insert_returns_record_with_assigned_id() {
    let mut engine = test_engine();
    create_users(&mut engine);
    let outcome = engine
        .execute("insert into users(name) values('ann')")
        .unwrap();
    match outcome {
        Outcome::Inserted(record) => {
            assert_eq!(record.get("id"), Some(&Value::Int(1)));
            assert_eq!(record.get("name"), Some(&Value::from("ann")));
            assert_eq!(record.get("age"), Some(&Value::Null));
            assert_eq!(record.get("email"), Some(&Value::Null));
        }
        other => panic!("Expected Inserted, got {other:?}"),
    }
}

#[test]
fn supplied_increment_value_is_ignored() {
    let mut engine = test_engine();
    create_users(&mut engine);
    engine
        .execute("insert into users(id, name) values(50, 'ann')")
        .unwrap();
    engine
        .execute("insert into users(id, name) values(50, 'bob')")
        .unwrap();
    assert_eq!(ids(&rows(&mut engine, "select id from users")), vec![1, 2]);
}

#[test]
fn increment_never_reuses_deleted_ids() {
    let mut engine = test_engine();
    seed_users_3(&mut engine);
    engine.execute("delete from users").unwrap();
    engine.execute("insert into users(name) values('dan')").unwrap();
    assert_eq!(ids(&rows(&mut engine, "select * from users")), vec![4]);
}

#[test]
fn failed_insert_does_not_advance_counter() {
    let mut engine = test_engine();
    create_users(&mut engine);
    engine.execute("insert into users(name) values('ann')").unwrap();
    assert!(engine.execute("insert into users(age) values(3)").is_err());
    engine.execute("insert into users(name) values('bob')").unwrap();
    assert_eq!(ids(&rows(&mut engine, "select * from users")), vec![1, 2]);
}

#[test]
fn insert_into_missing_table() {
    let mut engine = test_engine();
    let err = engine
        .execute("insert into ghosts(name) values('x')")
        .unwrap_err();
    assert!(matches!(err, DbError::TableNotFound(ref t) if t == "ghosts"));
}

#[test]
fn insert_unknown_field_is_schema_error() {
    let mut engine = test_engine();
    create_users(&mut engine);
    let err = engine
        .execute("insert into users(name, shoe) values('ann', 42)")
        .unwrap_err();
    assert!(matches!(err, DbError::Schema(_)));
    assert!(err.to_string().contains("shoe"));
}

#[test]
fn insert_wrong_type_is_type_error() {
    let mut engine = test_engine();
    create_users(&mut engine);
    let err = engine
        .execute("insert into users(name, age) values('ann', 'old')")
        .unwrap_err();
    assert!(matches!(err, DbError::Type(_)));
}

#[test]
fn int_widens_into_float_field() {
    let mut engine = test_engine();
    engine
        .create_table("prices", vec![field("amount", DataType::Float, &[])])
        .unwrap();
    engine.execute("insert into prices(amount) values(3)").unwrap();
    let records = rows(&mut engine, "select * from prices");
    assert_eq!(records[0].get("amount"), Some(&Value::Float(3.0)));
}

#[test]
fn update_matching_rows() {
    let mut engine = test_engine();
    seed_users_3(&mut engine);
    let outcome = engine
        .execute("update users set age = 99 where age < 25")
        .unwrap();
    assert_eq!(outcome, Outcome::Updated(2));
    let aged = rows(&mut engine, "select id from users where age = 99");
    assert_eq!(ids(&aged), vec![2, 3]);
}

#[test]
fn update_without_where_touches_every_row() {
    let mut engine = test_engine();
    seed_users_3(&mut engine);
    assert_eq!(
        engine.execute("update users set age = 1").unwrap(),
        Outcome::Updated(3)
    );
}

#[test]
fn update_keeps_row_order() {
    let mut engine = test_engine();
    seed_users_3(&mut engine);
    engine
        .execute("update users set name = 'zed' where id = 1")
        .unwrap();
    assert_eq!(ids(&rows(&mut engine, "select * from users")), vec![1, 2, 3]);
}

#[test]
fn update_no_match_reports_zero() {
    let mut engine = test_engine();
    seed_users_3(&mut engine);
    assert_eq!(
        engine.execute("update users set age = 1 where id = 42").unwrap(),
        Outcome::Updated(0)
    );
}

#[test]
fn update_via_api() {
    let mut engine = test_engine();
    seed_users_3(&mut engine);
    let data = [("name".to_string(), Value::from("bobby"))].into_iter().collect();
    let n = engine
        .update("users", data, &where_(&[("name", Predicate::Equals(Value::from("bob")))]))
        .unwrap();
    assert_eq!(n, 1);
    let found = rows(&mut engine, "select id from users where name = 'bobby'");
    assert_eq!(ids(&found), vec![2]);
}

#[test]
fn delete_returns_removed_rows() {
    let mut engine = test_engine();
    seed_users_3(&mut engine);
    match engine.execute("delete from users where age >= 20").unwrap() {
        Outcome::Deleted(removed) => assert_eq!(ids(&removed), vec![1, 2]),
        other => panic!("Expected Deleted, got {other:?}"),
    }
    assert_eq!(ids(&rows(&mut engine, "select * from users")), vec![3]);
}

#[test]
fn delete_with_no_match_is_a_no_op() {
    let mut engine = test_engine();
    seed_users_3(&mut engine);
    let before = rows(&mut engine, "select * from users");
    let removed = engine
        .delete("users", &where_(&[("age", Predicate::GreaterThan(Value::Int(100)))]))
        .unwrap();
    assert!(removed.is_empty());
    assert_eq!(rows(&mut engine, "select * from users"), before);

    let again = engine
        .delete("users", &where_(&[("age", Predicate::GreaterThan(Value::Int(100)))]))
        .unwrap();
    assert!(again.is_empty());
}

#[test]
fn delete_everything() {
    let mut engine = test_engine();
    seed_users_3(&mut engine);
    engine.delete("users", &Conditions::new()).unwrap();
    assert!(rows(&mut engine, "select * from users").is_empty());
}
