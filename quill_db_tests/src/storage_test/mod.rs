use quill_db_core::storage::codec::{
    decode_catalog, deserialize_catalog, encode_catalog, serialize_catalog,
};
use quill_db_core::storage::{
    BlobStore, Catalog, Constraint, FileStore, MemStore, Projection, SchemaField, Sort, Table,
};
use quill_db_core::types::datatype::DataType;
use quill_db_core::types::predicate::Conditions;
use quill_db_core::types::value::Value;
use quill_db_core::DbError;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

fn temp_dir(prefix: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut path = std::env::temp_dir();
    path.push(format!(
        "quill_db_storage_{}_{}_{}",
        prefix,
        std::process::id(),
        id
    ));
    let _ = std::fs::remove_dir_all(&path);
    path
}

/// `shop.items(id INT PRIMARY INCREMENT, label VARCHAR NOT_NULL, price FLOAT)`
/// with two rows, plus an empty database `empty`.
fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.create_database("shop").unwrap();
    catalog.create_database("empty").unwrap();
    let db = catalog.database_mut("shop").unwrap();
    db.create_table(
        "items",
        vec![
            (
                "id".to_string(),
                SchemaField::new(DataType::Int)
                    .with(Constraint::Primary)
                    .with(Constraint::Increment),
            ),
            (
                "label".to_string(),
                SchemaField::new(DataType::VarChar).with(Constraint::NotNull),
            ),
            ("price".to_string(), SchemaField::new(DataType::Float)),
        ],
    )
    .unwrap();
    let items = db.table_mut("items").unwrap();
    items
        .insert(
            [
                ("label".to_string(), Value::from("pen \"blue\"")),
                ("price".to_string(), Value::Float(1.5)),
            ]
            .into_iter()
            .collect(),
        )
        .unwrap();
    items
        .insert([("label".to_string(), Value::from("cap"))].into_iter().collect())
        .unwrap();
    catalog
}

mod catalog;
mod codec;
