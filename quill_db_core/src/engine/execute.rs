mod ddl;
mod dml;

use tracing::debug;

use crate::engine::Engine;
use crate::error::DbResult;
use crate::parser::{Action, DropKind, ShowKind, parse};
use crate::types::Record;
use crate::types::value::Value;

/// What a statement produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Rows(Vec<Record>),
    Inserted(Record),
    Updated(usize),
    Deleted(Vec<Record>),
    Selected(String),
    Dropped { kind: DropKind, name: String },
    Exit,
}

impl Outcome {
    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit)
    }
}

impl Engine {
    /// Parses and runs one statement. Successful mutations are committed
    /// before returning.
    pub fn execute(&mut self, input: &str) -> DbResult<Outcome> {
        let action = parse(input)?;
        let mutating = action.is_mutating();
        let outcome = self.dispatch(action)?;
        if mutating {
            self.commit()?;
        }
        Ok(outcome)
    }

    /// Runs an already parsed statement without committing.
    pub fn dispatch(&mut self, action: Action) -> DbResult<Outcome> {
        debug!(?action, "dispatch");
        match action {
            Action::Insert { table, data } => self.insert(&table, data).map(Outcome::Inserted),
            Action::Update {
                table,
                data,
                conditions,
            } => self.update(&table, data, &conditions).map(Outcome::Updated),
            Action::Delete { table, conditions } => {
                self.delete(&table, &conditions).map(Outcome::Deleted)
            }
            Action::Search {
                table,
                fields,
                conditions,
                sort,
            } => self
                .search(&table, &fields, &sort, &conditions)
                .map(Outcome::Rows),
            Action::Use { database } => {
                self.select_db(&database)?;
                Ok(Outcome::Selected(database))
            }
            Action::Show { kind } => {
                let names = match kind {
                    ShowKind::Databases => self.databases(),
                    ShowKind::Tables => self.tables()?,
                };
                Ok(Outcome::Rows(names.into_iter().map(name_record).collect()))
            }
            Action::Drop { kind, name } => {
                match kind {
                    DropKind::Database => self.drop_database(&name)?,
                    DropKind::Table => self.drop_table(&name)?,
                }
                Ok(Outcome::Dropped { kind, name })
            }
            Action::Exit => Ok(Outcome::Exit),
        }
    }
}

fn name_record(name: String) -> Record {
    [("name", Value::VarChar(name))].into_iter().collect()
}
