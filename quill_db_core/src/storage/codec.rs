//! Catalog <-> blob conversion.
//!
//! The catalog is written as a JSON document, the text is reversed
//! character by character, and the result is base64 encoded. Loading undoes
//! the three steps in the opposite order. This is obfuscation, not
//! protection.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{DbError, DbResult};
use crate::storage::catalog::{Catalog, Database};
use crate::storage::schema::{Constraint, Schema, SchemaField};
use crate::storage::table::Table;
use crate::types::Row;
use crate::types::datatype::{DataType, parse_datatype};
use crate::types::value::Value;

#[derive(Debug, Serialize, Deserialize)]
struct DatabaseFile {
    name: String,
    tables: Vec<TableFile>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    name: String,
    fields: Vec<FieldFile>,
    rows: Vec<Vec<JsonValue>>,
    next_auto_increment: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct FieldFile {
    name: String,
    data_type: String,
    constraints: Vec<String>,
}

/// Encodes the whole catalog into the persisted blob.
pub fn encode_catalog(catalog: &Catalog) -> DbResult<Vec<u8>> {
    let json = serialize_catalog(catalog)?;
    let reversed: String = json.chars().rev().collect();
    Ok(BASE64.encode(reversed.as_bytes()).into_bytes())
}

/// Decodes a blob written by [`encode_catalog`]. An empty blob is an empty
/// catalog; ASCII whitespace (line-wrapped base64) is ignored.
pub fn decode_catalog(blob: &[u8]) -> DbResult<Catalog> {
    let compact: Vec<u8> = blob
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return Ok(Catalog::new());
    }

    let bytes = BASE64
        .decode(&compact)
        .map_err(|e| DbError::Storage(format!("Malformed catalog encoding: {e}")))?;
    let reversed = String::from_utf8(bytes)
        .map_err(|e| DbError::Storage(format!("Catalog is not valid UTF-8: {e}")))?;
    let json: String = reversed.chars().rev().collect();
    deserialize_catalog(&json)
}

/// Structured (JSON) form of the catalog, before obfuscation.
pub fn serialize_catalog(catalog: &Catalog) -> DbResult<String> {
    let databases = catalog
        .databases()
        .map(database_to_file)
        .collect::<DbResult<Vec<_>>>()?;
    serde_json::to_string(&databases)
        .map_err(|e| DbError::Storage(format!("Failed to serialize catalog as JSON: {e}")))
}

pub fn deserialize_catalog(json: &str) -> DbResult<Catalog> {
    let files: Vec<DatabaseFile> = serde_json::from_str(json)
        .map_err(|e| DbError::Storage(format!("Malformed catalog JSON: {e}")))?;

    let mut catalog = Catalog::new();
    for file in files {
        let mut database = Database::new(file.name);
        for table in file.tables {
            database.insert_table(table_from_file(table)?);
        }
        catalog.insert_database(database);
    }
    Ok(catalog)
}

fn database_to_file(database: &Database) -> DbResult<DatabaseFile> {
    Ok(DatabaseFile {
        name: database.name().to_string(),
        tables: database
            .tables()
            .map(table_to_file)
            .collect::<DbResult<Vec<_>>>()?,
    })
}

fn table_to_file(table: &Table) -> DbResult<TableFile> {
    let fields = table
        .schema()
        .columns
        .iter()
        .map(|c| FieldFile {
            name: c.name.clone(),
            data_type: c.field.data_type.as_str().to_string(),
            constraints: c
                .field
                .constraints
                .iter()
                .map(|k| k.as_str().to_string())
                .collect(),
        })
        .collect();

    let rows = table
        .rows()
        .iter()
        .map(|row| row.iter().map(value_to_json).collect::<DbResult<Vec<_>>>())
        .collect::<DbResult<Vec<_>>>()?;

    Ok(TableFile {
        name: table.name().to_string(),
        fields,
        rows,
        next_auto_increment: table.next_auto_increment(),
    })
}

fn table_from_file(file: TableFile) -> DbResult<Table> {
    let mut fields: Vec<(String, SchemaField)> = Vec::with_capacity(file.fields.len());
    for f in file.fields {
        let data_type = parse_datatype(&f.data_type).map_err(DbError::Storage)?;
        let mut field = SchemaField::new(data_type);
        for k in &f.constraints {
            field = field.with(Constraint::parse(k).map_err(DbError::Storage)?);
        }
        fields.push((f.name, field));
    }
    let schema = Schema::new(fields)?;

    let mut rows: Vec<Row> = Vec::with_capacity(file.rows.len());
    for (line_no, raw) in file.rows.into_iter().enumerate() {
        if raw.len() != schema.column_count() {
            return Err(DbError::Storage(format!(
                "Malformed row in table '{}' at position {}: expected {} values, got {}",
                file.name,
                line_no + 1,
                schema.column_count(),
                raw.len()
            )));
        }
        let row = raw
            .iter()
            .zip(&schema.columns)
            .map(|(v, col)| value_from_json(v, col.field.data_type, &file.name))
            .collect::<DbResult<Row>>()?;
        rows.push(row);
    }

    Ok(Table::from_parts(
        file.name,
        schema,
        rows,
        file.next_auto_increment,
    ))
}

fn value_to_json(value: &Value) -> DbResult<JsonValue> {
    Ok(match value {
        Value::Int(n) => JsonValue::from(*n),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(JsonValue::Number)
            .ok_or_else(|| DbError::Storage(format!("Cannot persist non-finite float {x}")))?,
        Value::VarChar(s) => JsonValue::String(s.clone()),
        Value::Null => JsonValue::Null,
    })
}

fn value_from_json(raw: &JsonValue, dtype: DataType, table: &str) -> DbResult<Value> {
    let value = match (dtype, raw) {
        (_, JsonValue::Null) => Some(Value::Null),
        (DataType::Int, JsonValue::Number(n)) => n.as_i64().map(Value::Int),
        (DataType::Float, JsonValue::Number(n)) => n.as_f64().map(Value::Float),
        (DataType::VarChar, JsonValue::String(s)) => Some(Value::VarChar(s.clone())),
        _ => None,
    };
    value.ok_or_else(|| {
        DbError::Storage(format!(
            "Malformed value {raw} for {dtype} field in table '{table}'"
        ))
    })
}
