use super::*;

#[test]
fn serialized_json_shape() {
    let json = serialize_catalog(&sample_catalog()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

    let databases = doc.as_array().unwrap();
    assert_eq!(databases.len(), 2);
    assert_eq!(databases[0]["name"], "empty");
    assert_eq!(databases[1]["name"], "shop");

    let items = &databases[1]["tables"][0];
    assert_eq!(items["name"], "items");
    assert_eq!(items["next_auto_increment"], 3);
    assert_eq!(items["fields"][0]["name"], "id");
    assert_eq!(items["fields"][0]["data_type"], "INT");
    assert_eq!(
        items["fields"][0]["constraints"],
        serde_json::json!(["PRIMARY", "INCREMENT"])
    );
    assert_eq!(items["rows"][0], serde_json::json!([1, "pen \"blue\"", 1.5]));
    assert_eq!(items["rows"][1], serde_json::json!([2, "cap", null]));
}

#[test]
fn roundtrip_through_blob_keeps_everything() {
    let catalog = sample_catalog();
    let decoded = decode_catalog(&encode_catalog(&catalog).unwrap()).unwrap();
    assert_eq!(decoded, catalog);

    let items = decoded.database("shop").unwrap().table("items").unwrap();
    assert_eq!(items.next_auto_increment(), 3);
    assert_eq!(items.rows()[1], vec![Value::Int(2), Value::from("cap"), Value::Null]);
    assert!(decoded.database("empty").unwrap().table_names().is_empty());
}

#[test]
fn json_with_wrong_value_type_is_rejected() {
    let json = r#"[{"name":"d","tables":[{"name":"t","fields":[{"name":"a","data_type":"INT","constraints":[]}],"rows":[["x"]],"next_auto_increment":1}]}]"#;
    assert!(matches!(deserialize_catalog(json), Err(DbError::Storage(_))));
}

#[test]
fn json_with_unknown_constraint_is_rejected() {
    let json = r#"[{"name":"d","tables":[{"name":"t","fields":[{"name":"a","data_type":"INT","constraints":["CHECK"]}],"rows":[],"next_auto_increment":1}]}]"#;
    assert!(matches!(deserialize_catalog(json), Err(DbError::Storage(_))));
}

#[test]
fn json_with_invalid_schema_is_rejected() {
    let json = r#"[{"name":"d","tables":[{"name":"t","fields":[{"name":"a","data_type":"VARCHAR","constraints":["INCREMENT"]}],"rows":[],"next_auto_increment":1}]}]"#;
    assert!(matches!(deserialize_catalog(json), Err(DbError::Schema(_))));
}

#[test]
fn awkward_floats_survive_the_blob() {
    let floats = [
        1.0715660391465826e-75,
        -1.81996730402717e-179,
        -1.603964615428183e143,
        -9.643915712060552e-234,
        0.1 + 0.2,
        f64::MIN_POSITIVE,
        f64::MAX,
    ];
    let mut catalog = Catalog::new();
    catalog.create_database("m").unwrap();
    let db = catalog.database_mut("m").unwrap();
    db.create_table(
        "readings",
        vec![("x".to_string(), SchemaField::new(DataType::Float))],
    )
    .unwrap();
    let readings = db.table_mut("readings").unwrap();
    for x in floats {
        readings
            .insert([("x".to_string(), Value::Float(x))].into_iter().collect())
            .unwrap();
    }

    let decoded = decode_catalog(&encode_catalog(&catalog).unwrap()).unwrap();
    let stored: Vec<u64> = decoded
        .database("m")
        .unwrap()
        .table("readings")
        .unwrap()
        .rows()
        .iter()
        .map(|row| match row[0] {
            Value::Float(x) => x.to_bits(),
            ref other => panic!("Expected float, got {other:?}"),
        })
        .collect();
    let expected: Vec<u64> = floats.iter().map(|x| x.to_bits()).collect();
    assert_eq!(stored, expected);
}
