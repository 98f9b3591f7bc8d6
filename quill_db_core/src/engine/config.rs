use std::path::PathBuf;

/// File the catalog lives in when nothing else is configured.
pub const DEFAULT_PATH: &str = "db.data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Location of the persisted catalog.
    pub path: PathBuf,
    /// Database to select right after loading.
    pub database: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            database: None,
        }
    }
}

impl EngineConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            database: None,
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }
}
