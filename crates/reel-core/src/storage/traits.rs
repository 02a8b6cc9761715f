//! Key-value storage trait definition.
//!
//! The `KeyValueStore` trait is the only persistence seam in Reel. The
//! library and session services are generic over it, so the same state
//! logic runs against files on disk or an in-memory map.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Synchronous string key-value storage.
///
/// Implementations must ensure:
/// - `set` replaces the whole value atomically
/// - `remove` on a missing key is not an error
/// - keys are validated with [`super::keys::validate`]
pub trait KeyValueStore {
    /// Read the raw value for `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Read and deserialize a JSON value.
    ///
    /// # Errors
    ///
    /// Returns `ReelError::Validation` if the stored value is not valid JSON
    /// for `T`. Callers decide whether that means "no data" or a failure.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` as JSON and store it.
    fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn(_store: &dyn KeyValueStore) {}
    }
}
