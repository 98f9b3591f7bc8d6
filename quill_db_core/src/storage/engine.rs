use std::fmt::Debug;

use crate::error::DbResult;

/// Storage backend trait - read-all / write-all of one opaque blob.
/// The engine never looks inside the bytes; the codec does.
pub trait BlobStore: Debug {
    /// Returns the stored blob, or `None` if nothing has been written yet
    fn read_all(&self) -> DbResult<Option<Vec<u8>>>;

    /// Replaces the stored blob with `bytes`
    fn write_all(&mut self, bytes: &[u8]) -> DbResult<()>;
}
