use std::cell::RefCell;
use std::rc::Rc;

use crate::error::DbResult;
use crate::storage::engine::BlobStore;

/// In-memory blob store. Clones share the same blob, so a test can hand one
/// clone to an engine and keep another to inspect or reopen.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    blob: Rc<RefCell<Option<Vec<u8>>>>,
}

impl MemStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `bytes`
    pub fn with_blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            blob: Rc::new(RefCell::new(Some(bytes.into()))),
        }
    }

    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.blob.borrow().clone()
    }
}

impl BlobStore for MemStore {
    fn read_all(&self) -> DbResult<Option<Vec<u8>>> {
        Ok(self.blob.borrow().clone())
    }

    fn write_all(&mut self, bytes: &[u8]) -> DbResult<()> {
        *self.blob.borrow_mut() = Some(bytes.to_vec());
        Ok(())
    }
}
