use crate::storage::table::{Assignments, Projection, Sort};
use crate::types::predicate::Conditions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowKind {
    Databases,
    Tables,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    Database,
    Table,
}

impl DropKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DropKind::Database => "database",
            DropKind::Table => "table",
        }
    }
}

/// One parsed statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Insert {
        table: String,
        data: Assignments,
    },

    Update {
        table: String,
        data: Assignments,
        conditions: Conditions,
    },

    Delete {
        table: String,
        conditions: Conditions,
    },

    Search {
        table: String,
        fields: Projection,
        conditions: Conditions,
        sort: Sort,
    },

    Use {
        database: String,
    },

    Show {
        kind: ShowKind,
    },

    Drop {
        kind: DropKind,
        name: String,
    },

    Exit,
}

impl Action {
    /// Actions after which the engine writes the catalog back to storage.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Action::Insert { .. } | Action::Update { .. } | Action::Delete { .. } | Action::Drop { .. }
        )
    }
}
