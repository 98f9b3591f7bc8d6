use std::io;
use thiserror::Error;

/// Result type used throughout the core.
pub type DbResult<T> = Result<T, DbError>;

/// Every failure the core can report to its caller.
#[derive(Debug, Error)]
pub enum DbError {
    /// Query text that does not follow the grammar.
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Database '{0}' does not exist")]
    DatabaseNotFound(String),

    #[error("Table '{0}' does not exist")]
    TableNotFound(String),

    #[error("No database selected. Use: use <database>")]
    NoDatabaseSelected,

    /// Invalid schema definition, or a reference to a field the schema lacks.
    #[error("Schema error: {0}")]
    Schema(String),

    /// PRIMARY / UNIQUE / NOT_NULL / INCREMENT violation.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Value not coercible to the declared field type.
    #[error("Type error: {0}")]
    Type(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    /// Backend I/O or a blob the codec cannot read.
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Storage I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl DbError {
    pub(crate) fn syntax(msg: impl Into<String>) -> Self {
        DbError::Syntax(msg.into())
    }

    pub(crate) fn schema(msg: impl Into<String>) -> Self {
        DbError::Schema(msg.into())
    }

    pub(crate) fn constraint(msg: impl Into<String>) -> Self {
        DbError::Constraint(msg.into())
    }
}
