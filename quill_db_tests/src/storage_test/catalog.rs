use super::*;

#[test]
fn database_names_are_sorted() {
    let catalog = sample_catalog();
    assert_eq!(
        catalog.database_names(),
        vec!["empty".to_string(), "shop".to_string()]
    );
    assert!(catalog.exists("shop"));
    assert!(!catalog.exists("nope"));
}

#[test]
fn duplicate_database_rejected() {
    let mut catalog = sample_catalog();
    let err = catalog.create_database("shop").unwrap_err();
    assert_eq!(err.to_string(), "Database 'shop' already exists");
}

#[test]
fn drop_database_returns_it() {
    let mut catalog = sample_catalog();
    let dropped = catalog.drop_database("shop").unwrap();
    assert_eq!(dropped.name(), "shop");
    assert_eq!(dropped.table_names(), vec!["items".to_string()]);
    assert!(!catalog.exists("shop"));
    assert!(matches!(
        catalog.drop_database("shop"),
        Err(DbError::DatabaseNotFound(_))
    ));
}

#[test]
fn table_lookup_and_drop() {
    let mut catalog = sample_catalog();
    let db = catalog.database_mut("shop").unwrap();
    assert!(db.exists("items"));
    assert!(matches!(db.table("ghost"), Err(DbError::TableNotFound(_))));

    let dropped = db.drop_table("items").unwrap();
    assert_eq!(dropped.len(), 2);
    assert!(db.table_names().is_empty());
    assert!(matches!(db.drop_table("items"), Err(DbError::TableNotFound(_))));
}

#[test]
fn duplicate_table_rejected() {
    let mut catalog = sample_catalog();
    let db = catalog.database_mut("shop").unwrap();
    let err = db
        .create_table(
            "items",
            vec![("x".to_string(), SchemaField::new(DataType::Int))],
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "Table 'items' already exists");
}

#[test]
fn empty_catalog() {
    let catalog = Catalog::new();
    assert!(catalog.is_empty());
    assert!(catalog.database_names().is_empty());
    assert!(matches!(
        catalog.database("any"),
        Err(DbError::DatabaseNotFound(_))
    ));
}
