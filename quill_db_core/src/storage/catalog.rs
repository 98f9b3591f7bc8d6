use std::collections::BTreeMap;

use crate::error::{DbError, DbResult};
use crate::storage::schema::SchemaField;
use crate::storage::table::Table;

/// A named collection of tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Database {
    name: String,
    tables: BTreeMap<String, Table>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Checks if a table exists in this database
    pub fn exists(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    /// Creates a new, empty table
    /// Returns an error if the table already exists or the schema is invalid
    pub fn create_table(
        &mut self,
        table: impl Into<String>,
        fields: Vec<(String, SchemaField)>,
    ) -> DbResult<&Table> {
        let table = table.into();
        if self.exists(&table) {
            return Err(DbError::AlreadyExists(format!("Table '{table}'")));
        }
        let created = Table::create(table.clone(), fields)?;
        Ok(self.tables.entry(table).or_insert(created))
    }

    pub fn drop_table(&mut self, table: &str) -> DbResult<Table> {
        self.tables
            .remove(table)
            .ok_or_else(|| DbError::TableNotFound(table.to_string()))
    }

    pub fn table(&self, table: &str) -> DbResult<&Table> {
        self.tables
            .get(table)
            .ok_or_else(|| DbError::TableNotFound(table.to_string()))
    }

    pub fn table_mut(&mut self, table: &str) -> DbResult<&mut Table> {
        self.tables
            .get_mut(table)
            .ok_or_else(|| DbError::TableNotFound(table.to_string()))
    }

    /// Table names in sorted order
    pub fn table_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub(crate) fn insert_table(&mut self, table: Table) {
        self.tables.insert(table.name().to_string(), table);
    }
}

/// Every database the engine knows about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    databases: BTreeMap<String, Database>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, database: &str) -> bool {
        self.databases.contains_key(database)
    }

    pub fn create_database(&mut self, name: impl Into<String>) -> DbResult<()> {
        let name = name.into();
        if self.exists(&name) {
            return Err(DbError::AlreadyExists(format!("Database '{name}'")));
        }
        self.databases.insert(name.clone(), Database::new(name));
        Ok(())
    }

    pub fn drop_database(&mut self, name: &str) -> DbResult<Database> {
        self.databases
            .remove(name)
            .ok_or_else(|| DbError::DatabaseNotFound(name.to_string()))
    }

    pub fn database(&self, name: &str) -> DbResult<&Database> {
        self.databases
            .get(name)
            .ok_or_else(|| DbError::DatabaseNotFound(name.to_string()))
    }

    pub fn database_mut(&mut self, name: &str) -> DbResult<&mut Database> {
        self.databases
            .get_mut(name)
            .ok_or_else(|| DbError::DatabaseNotFound(name.to_string()))
    }

    /// Database names in sorted order
    pub fn database_names(&self) -> Vec<String> {
        self.databases.keys().cloned().collect()
    }

    pub fn databases(&self) -> impl Iterator<Item = &Database> {
        self.databases.values()
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }

    pub(crate) fn insert_database(&mut self, database: Database) {
        self.databases.insert(database.name().to_string(), database);
    }
}
