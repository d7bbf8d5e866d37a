use crate::StoreError;

/// Keys of the persisted records.
pub mod keys {
    pub const FAVORITES: &str = "favorites";
    pub const RECENT: &str = "recent";
    pub const SCORES: &str = "scores";
    pub const THEME: &str = "theme";
}

/// A process-wide string key-value store.
///
/// Each `write` replaces one whole record atomically; a failed write must
/// leave every other key as it was.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Called once when the owner is done with the store.
    fn close(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }

    fn close(&self) -> Result<(), StoreError> {
        (**self).close()
    }
}
