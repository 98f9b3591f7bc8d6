use tracing::debug;

use crate::engine::{Engine, Selection};
use crate::error::DbResult;
use crate::storage::SchemaField;

impl Engine {
    pub fn create_database(&mut self, name: &str) -> DbResult<()> {
        self.catalog.create_database(name)?;
        debug!(database = name, "database created");
        Ok(())
    }

    /// Dropping the selected database clears the selection.
    pub fn drop_database(&mut self, name: &str) -> DbResult<()> {
        self.catalog.drop_database(name)?;
        if self.selected_database() == Some(name) {
            self.selection = Selection::NoDatabaseSelected;
        }
        debug!(database = name, "database dropped");
        Ok(())
    }

    pub fn databases(&self) -> Vec<String> {
        self.catalog.database_names()
    }

    /// Table names of the selected database.
    pub fn tables(&self) -> DbResult<Vec<String>> {
        Ok(self.current_db()?.table_names())
    }

    pub fn create_table(&mut self, name: &str, fields: Vec<(String, SchemaField)>) -> DbResult<()> {
        let db = self.current_db_mut()?;
        db.create_table(name, fields)?;
        debug!(database = db.name(), table = name, "table created");
        Ok(())
    }

    pub fn drop_table(&mut self, name: &str) -> DbResult<()> {
        let db = self.current_db_mut()?;
        db.drop_table(name)?;
        debug!(database = db.name(), table = name, "table dropped");
        Ok(())
    }
}
