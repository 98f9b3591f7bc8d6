pub mod config;
pub mod execute;
pub mod format;

pub use config::EngineConfig;
pub use execute::Outcome;
pub use format::{format_outcome, format_records};

use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::storage::codec::{decode_catalog, encode_catalog};
use crate::storage::{BlobStore, Catalog, Database, FileStore};

/// Which database unqualified table names resolve against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoDatabaseSelected,
    DatabaseSelected(String),
}

/// Owns the catalog, the selection, and the store the catalog persists to.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    catalog: Catalog,
    selection: Selection,
    store: Box<dyn BlobStore>,
}

impl Engine {
    /// Opens the file-backed catalog at `config.path`.
    pub fn open(config: EngineConfig) -> DbResult<Self> {
        let store = FileStore::new(config.path.clone());
        Self::with_config_and_store(config, Box::new(store))
    }

    /// Engine over an arbitrary store, default config.
    pub fn with_store(store: impl BlobStore + 'static) -> DbResult<Self> {
        Self::with_config_and_store(EngineConfig::default(), Box::new(store))
    }

    pub fn with_config_and_store(config: EngineConfig, store: Box<dyn BlobStore>) -> DbResult<Self> {
        let catalog = load_catalog(store.as_ref())?;
        let mut engine = Self {
            config,
            catalog,
            selection: Selection::NoDatabaseSelected,
            store,
        };
        if let Some(name) = engine.config.database.clone() {
            engine.select_db(&name)?;
        }
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_database(&self) -> Option<&str> {
        match &self.selection {
            Selection::DatabaseSelected(name) => Some(name),
            Selection::NoDatabaseSelected => None,
        }
    }

    /// On failure the current selection is kept.
    pub fn select_db(&mut self, name: &str) -> DbResult<()> {
        if !self.catalog.exists(name) {
            return Err(DbError::DatabaseNotFound(name.to_string()));
        }
        self.selection = Selection::DatabaseSelected(name.to_string());
        debug!(database = name, "database selected");
        Ok(())
    }

    /// Writes the whole catalog to the store, replacing what was there.
    pub fn commit(&mut self) -> DbResult<()> {
        let blob = encode_catalog(&self.catalog)?;
        self.store.write_all(&blob)?;
        debug!(bytes = blob.len(), "catalog committed");
        Ok(())
    }

    /// Replaces the in-memory catalog with the last committed one.
    pub fn rollback(&mut self) -> DbResult<()> {
        self.catalog = load_catalog(self.store.as_ref())?;
        if let Selection::DatabaseSelected(name) = &self.selection {
            if !self.catalog.exists(name) {
                debug!(database = name.as_str(), "selected database gone after rollback");
                self.selection = Selection::NoDatabaseSelected;
            }
        }
        debug!("catalog rolled back");
        Ok(())
    }

    fn current_db(&self) -> DbResult<&Database> {
        match &self.selection {
            Selection::DatabaseSelected(name) => self.catalog.database(name),
            Selection::NoDatabaseSelected => Err(DbError::NoDatabaseSelected),
        }
    }

    fn current_db_mut(&mut self) -> DbResult<&mut Database> {
        match &self.selection {
            Selection::DatabaseSelected(name) => self.catalog.database_mut(name),
            Selection::NoDatabaseSelected => Err(DbError::NoDatabaseSelected),
        }
    }
}

fn load_catalog(store: &dyn BlobStore) -> DbResult<Catalog> {
    let catalog = match store.read_all()? {
        Some(blob) => decode_catalog(&blob)?,
        None => Catalog::new(),
    };
    debug!(databases = catalog.database_names().len(), "catalog loaded");
    Ok(catalog)
}
