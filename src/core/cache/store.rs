//! Persistent cache store.
//!
//! Durable, origin-scoped key/value storage for the last successfully
//! fetched payload of each cache key. Backed by IndexedDB in the browser;
//! the [`CacheStore`] trait exists so the orchestrator can be exercised in
//! native tests with an in-memory stand-in.
//!
//! Every failure is absorbed here: reads report a miss, writes report
//! `false`, and the error is logged. The cache layer must degrade to
//! "always fetch from network" rather than take the page down.

use serde_json::Value;

use super::CacheKey;

/// Async key/value store for cached API payloads.
///
/// Implementations must be safe to call concurrently for different keys;
/// writes to the same key are last-writer-wins.
#[allow(async_fn_in_trait)]
pub trait CacheStore {
    /// Most recently stored payload for `key`, or `None` if never stored
    /// (or the underlying storage failed - a miss either way).
    async fn get(&self, key: &CacheKey) -> Option<Value>;

    /// Overwrite the entry for `key`. Returns `false` on storage failure.
    async fn set(&self, key: &CacheKey, value: &Value) -> bool;

    /// Remove the entry for `key`, so subsequent `get` reports a miss.
    async fn delete(&self, key: &CacheKey) -> bool;
}

pub use idb_store::IdbStore;

mod idb_store {
    use idb::{Database, DatabaseEvent, Factory, ObjectStoreParams, TransactionMode};
    use serde::Serialize;
    use serde_json::Value;
    use wasm_bindgen::JsValue;

    use super::{CacheKey, CacheStore};
    use crate::config::cache;
    use crate::core::error::StoreError;

    /// IndexedDB-backed [`CacheStore`].
    ///
    /// Holds no connection of its own: each operation opens the database,
    /// which the browser dedupes internally, so concurrent opens are
    /// idempotent and never create duplicate schemas.
    #[derive(Clone, Default)]
    pub struct IdbStore;

    impl IdbStore {
        pub fn new() -> Self {
            Self
        }

        async fn open(&self) -> Result<Database, StoreError> {
            let factory =
                Factory::new().map_err(|e| StoreError::OpenFailed(e.to_string()))?;
            let mut request = factory
                .open(cache::DB_NAME, Some(cache::DB_VERSION))
                .map_err(|e| StoreError::OpenFailed(e.to_string()))?;
            request.on_upgrade_needed(|event| {
                let Ok(database) = event.database() else {
                    return;
                };
                // Forward-only versioning: recreate the store, never migrate.
                if !database
                    .store_names()
                    .iter()
                    .any(|name| name == cache::STORE_NAME)
                {
                    let _ = database
                        .create_object_store(cache::STORE_NAME, ObjectStoreParams::new());
                }
            });
            request
                .await
                .map_err(|e| StoreError::OpenFailed(e.to_string()))
        }

        async fn try_get(&self, key: &CacheKey) -> Result<Option<Value>, StoreError> {
            let database = self.open().await?;
            let read = |e: idb::Error| StoreError::ReadFailed(e.to_string());
            let transaction = database
                .transaction(&[cache::STORE_NAME], TransactionMode::ReadOnly)
                .map_err(read)?;
            let store = transaction.object_store(cache::STORE_NAME).map_err(read)?;
            let stored = store
                .get(JsValue::from_str(key.as_str()))
                .map_err(read)?
                .await
                .map_err(read)?;
            // Awaiting the transaction waits for it to settle.
            transaction.await.map_err(read)?;

            stored
                .map(|js| {
                    serde_wasm_bindgen::from_value(js)
                        .map_err(|e| StoreError::ValueCorrupt(e.to_string()))
                })
                .transpose()
        }

        async fn try_set(&self, key: &CacheKey, value: &Value) -> Result<(), StoreError> {
            let database = self.open().await?;
            let write = |e: idb::Error| StoreError::WriteFailed(e.to_string());
            let js_value = value
                .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
            let transaction = database
                .transaction(&[cache::STORE_NAME], TransactionMode::ReadWrite)
                .map_err(write)?;
            let store = transaction.object_store(cache::STORE_NAME).map_err(write)?;
            store
                .put(&js_value, Some(&JsValue::from_str(key.as_str())))
                .map_err(write)?
                .await
                .map_err(write)?;
            transaction.commit().map_err(write)?.await.map_err(write)?;
            Ok(())
        }

        async fn try_delete(&self, key: &CacheKey) -> Result<(), StoreError> {
            let database = self.open().await?;
            let write = |e: idb::Error| StoreError::WriteFailed(e.to_string());
            let transaction = database
                .transaction(&[cache::STORE_NAME], TransactionMode::ReadWrite)
                .map_err(write)?;
            let store = transaction.object_store(cache::STORE_NAME).map_err(write)?;
            store
                .delete(JsValue::from_str(key.as_str()))
                .map_err(write)?
                .await
                .map_err(write)?;
            transaction.commit().map_err(write)?.await.map_err(write)?;
            Ok(())
        }

        fn log_failure(context: &str, key: &CacheKey, err: StoreError) {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "{} for '{}': {}",
                context, key, err
            )));
        }
    }

    impl CacheStore for IdbStore {
        async fn get(&self, key: &CacheKey) -> Option<Value> {
            match self.try_get(key).await {
                Ok(value) => value,
                Err(err) => {
                    Self::log_failure("Cache read failed", key, err);
                    None
                }
            }
        }

        async fn set(&self, key: &CacheKey, value: &Value) -> bool {
            match self.try_set(key, value).await {
                Ok(()) => true,
                Err(err) => {
                    Self::log_failure("Cache write failed", key, err);
                    false
                }
            }
        }

        async fn delete(&self, key: &CacheKey) -> bool {
            match self.try_delete(key).await {
                Ok(()) => true,
                Err(err) => {
                    Self::log_failure("Cache delete failed", key, err);
                    false
                }
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use serde_json::json;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::{CacheKey, CacheStore, IdbStore};

    wasm_bindgen_test_configure!(run_in_browser);

    // Exercises open (with schema upgrade), put, get, and delete against a
    // real IndexedDB instance.
    #[wasm_bindgen_test]
    async fn test_round_trip_against_indexeddb() {
        let store = IdbStore::new();
        let key = CacheKey::sellers_list();

        assert!(store.set(&key, &json!([{"_id": "s1"}])).await);
        assert_eq!(store.get(&key).await, Some(json!([{"_id": "s1"}])));
        assert!(store.delete(&key).await);
        assert_eq!(store.get(&key).await, None);
    }
}

#[cfg(test)]
pub mod testing {
    //! In-memory stand-ins used by the cache tests.

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use serde_json::Value;

    use super::{CacheKey, CacheStore};

    /// Faithful in-memory [`CacheStore`].
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        entries: Rc<RefCell<HashMap<CacheKey, Value>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored entries (assertion helper).
        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }
    }

    impl CacheStore for MemoryStore {
        async fn get(&self, key: &CacheKey) -> Option<Value> {
            self.entries.borrow().get(key).cloned()
        }

        async fn set(&self, key: &CacheKey, value: &Value) -> bool {
            self.entries.borrow_mut().insert(key.clone(), value.clone());
            true
        }

        async fn delete(&self, key: &CacheKey) -> bool {
            self.entries.borrow_mut().remove(key);
            true
        }
    }

    /// Store whose every operation fails, for degradation tests.
    #[derive(Clone, Default)]
    pub struct BrokenStore;

    impl CacheStore for BrokenStore {
        async fn get(&self, _key: &CacheKey) -> Option<Value> {
            None
        }

        async fn set(&self, _key: &CacheKey, _value: &Value) -> bool {
            false
        }

        async fn delete(&self, _key: &CacheKey) -> bool {
            false
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_get_absent_key() {
            let store = MemoryStore::new();
            assert_eq!(store.get(&CacheKey::sellers_list()).await, None);
        }

        #[tokio::test]
        async fn test_set_then_get() {
            let store = MemoryStore::new();
            let key = CacheKey::sellers_list();
            assert!(store.set(&key, &json!([{"_id": "s1"}])).await);
            assert_eq!(store.get(&key).await, Some(json!([{"_id": "s1"}])));
        }

        #[tokio::test]
        async fn test_set_is_idempotent_overwrite() {
            let store = MemoryStore::new();
            let key = CacheKey::plans_list();
            let value = json!(["basic"]);
            assert!(store.set(&key, &value).await);
            assert!(store.set(&key, &value).await);
            assert_eq!(store.get(&key).await, Some(value));
            assert_eq!(store.len(), 1);
        }

        #[tokio::test]
        async fn test_delete_causes_miss() {
            let store = MemoryStore::new();
            let key = CacheKey::plans_list();
            store.set(&key, &json!(1)).await;
            assert!(store.delete(&key).await);
            assert_eq!(store.get(&key).await, None);
        }

        #[tokio::test]
        async fn test_keys_do_not_interfere() {
            let store = MemoryStore::new();
            store.set(&CacheKey::sellers_list(), &json!("sellers")).await;
            store.set(&CacheKey::plans_list(), &json!("plans")).await;
            store.delete(&CacheKey::sellers_list()).await;
            assert_eq!(store.get(&CacheKey::plans_list()).await, Some(json!("plans")));
        }
    }
}
