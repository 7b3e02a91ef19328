use std::path::Path;

use serde_json::Value;

use crate::error::{PersistenceError, Result};

/// Conversion of model instances to plain records and back.
///
/// `save` and `load` need a storage encoding. Implementations without one
/// keep the default bodies, which fail with
/// [`PersistenceError::UnsupportedOperation`].
pub trait Serializer {
    /// The model type this serializer handles.
    type Model;

    /// Name used in error messages.
    fn name(&self) -> &'static str;

    /// Convert instances to records, preserving their order.
    fn serialize(&self, instances: &[Self::Model]) -> Vec<Value>;

    /// Rebuild instances from records. Fails on the first malformed record.
    fn deserialize(&self, data: Vec<Value>) -> Result<Vec<Self::Model>>;

    /// Serialize and store instances at `path`, replacing existing content.
    fn save(&self, _instances: &[Self::Model], _path: &Path) -> Result<()> {
        Err(PersistenceError::UnsupportedOperation {
            operation: "save",
            serializer: self.name(),
        })
    }

    /// Read stored records from `path` and deserialize them.
    fn load(&self, _path: &Path) -> Result<Vec<Self::Model>> {
        Err(PersistenceError::UnsupportedOperation {
            operation: "load",
            serializer: self.name(),
        })
    }
}
