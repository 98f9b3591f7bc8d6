pub mod types;
pub mod parser;
pub mod storage;
pub mod engine;
pub mod error;

pub use engine::{Engine, EngineConfig, Outcome, Selection, format_outcome, format_records};
pub use error::{DbError, DbResult};
pub use parser::{Action, parse};
pub use storage::{
    Assignments, BlobStore, Constraint, FileStore, MemStore, Projection, SchemaField, Sort,
    SortOrder,
};
pub use types::datatype::DataType;
pub use types::predicate::{Conditions, Predicate};
pub use types::value::Value;
pub use types::Record;
