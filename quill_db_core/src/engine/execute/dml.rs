use crate::engine::Engine;
use crate::error::DbResult;
use crate::storage::{Assignments, Projection, Sort};
use crate::types::Record;
use crate::types::predicate::Conditions;

impl Engine {
    pub fn insert(&mut self, table: &str, data: Assignments) -> DbResult<Record> {
        self.current_db_mut()?.table_mut(table)?.insert(data)
    }

    /// Returns how many rows changed. Nothing changes when any row fails.
    pub fn update(
        &mut self,
        table: &str,
        data: Assignments,
        conditions: &Conditions,
    ) -> DbResult<usize> {
        self.current_db_mut()?
            .table_mut(table)?
            .update(data, conditions)
    }

    /// Returns the removed rows.
    pub fn delete(&mut self, table: &str, conditions: &Conditions) -> DbResult<Vec<Record>> {
        self.current_db_mut()?.table_mut(table)?.delete(conditions)
    }

    pub fn search(
        &self,
        table: &str,
        fields: &Projection,
        sort: &Sort,
        conditions: &Conditions,
    ) -> DbResult<Vec<Record>> {
        self.current_db()?.table(table)?.search(fields, sort, conditions)
    }
}
