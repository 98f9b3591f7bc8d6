pub mod catalog;
pub mod codec;
pub mod disk;
pub mod engine;
pub mod mem;
pub mod schema;
pub mod table;

// Re-export main types for convenience
pub use catalog::{Catalog, Database};
pub use disk::FileStore;
pub use engine::BlobStore;
pub use mem::MemStore;
pub use schema::{Column, Constraint, Schema, SchemaField};
pub use table::{Assignments, Projection, Sort, SortOrder, Table};
