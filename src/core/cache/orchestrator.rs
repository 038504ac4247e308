//! Fetch orchestration over the two cache tiers.
//!
//! One generic implementation of the serve-from-cache-or-fetch decision,
//! instantiated per data domain by handing it a cache key and a fetch
//! future. The rules, in order:
//!
//! 1. If the key is session-fresh and the persistent store has a readable
//!    entry, serve it with zero network calls.
//! 2. Otherwise fetch from the network. On success, write the payload to
//!    the persistent store (best-effort), mark the key session-fresh, and
//!    hand the payload to the caller.
//! 3. A failed fetch is surfaced but never marks freshness, so the next
//!    mount retries the network.
//! 4. A cancelled run is discarded silently: no state update, no cache
//!    write, no freshness marker. The token is re-checked after every
//!    suspension point (the store read and the fetch), so a run that lost
//!    a supersede race can neither overwrite fresher data nor hand back a
//!    payload, not even a cached one.
//!
//! `refresh` skips rule 1 entirely; it is the manual-refresh and
//! post-mutation path and the only way to re-fetch a key that is already
//! fresh in the current session.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{CacheKey, CancelToken, SessionTracker, store::CacheStore};
use crate::core::error::ApiError;

/// Result of one orchestrated load.
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// Served from the persistent store; no network call was made.
    Cached(T),
    /// Fetched from the network; both cache tiers were updated.
    Fetched(T),
    /// The request was cancelled; the caller must discard it silently.
    Cancelled,
    /// The fetch failed; freshness was not marked.
    Failed(ApiError),
}

impl<T> LoadOutcome<T> {
    /// The payload, if this outcome carries one.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Cached(data) | Self::Fetched(data) => Some(data),
            Self::Cancelled | Self::Failed(_) => None,
        }
    }
}

/// The serve-or-fetch decision engine, shared by every data domain.
///
/// Cheap to clone; clones share the same store and tracker.
#[derive(Clone)]
pub struct Orchestrator<S> {
    store: S,
    session: SessionTracker,
}

impl<S: CacheStore> Orchestrator<S> {
    pub fn new(store: S, session: SessionTracker) -> Self {
        Self { store, session }
    }

    /// Session freshness tracker shared with this orchestrator.
    pub fn session(&self) -> &SessionTracker {
        &self.session
    }

    /// Load the dataset for `key`, preferring the cache tiers.
    ///
    /// `fetch` is only invoked when the key is not session-fresh, or when
    /// the persistent store misses despite a fresh marker (the entry may
    /// have been evicted, or its shape may no longer deserialize after an
    /// application update - both degrade to a network fetch).
    pub async fn load<T, F, Fut>(
        &self,
        key: &CacheKey,
        token: &CancelToken,
        fetch: F,
    ) -> LoadOutcome<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if token.is_cancelled() {
            return LoadOutcome::Cancelled;
        }
        if self.session.has_fetched(key)
            && let Some(value) = self.store.get(key).await
            && let Ok(data) = serde_json::from_value(value)
        {
            // The store read is a suspension point: the owner may have been
            // superseded while it was pending. A cancelled run must not hand
            // back a payload, even a cached one.
            if token.is_cancelled() {
                return LoadOutcome::Cancelled;
            }
            return LoadOutcome::Cached(data);
        }
        self.fetch_into_cache(key, token, fetch).await
    }

    /// Forced refresh: always hits the network, ignoring both cache tiers,
    /// and on success overwrites them.
    pub async fn refresh<T, F, Fut>(
        &self,
        key: &CacheKey,
        token: &CancelToken,
        fetch: F,
    ) -> LoadOutcome<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.fetch_into_cache(key, token, fetch).await
    }

    /// Drop the persistent entry for `key`. The freshness marker is left
    /// alone; markers are only ever cleared wholesale.
    pub async fn invalidate(&self, key: &CacheKey) {
        let _ = self.store.delete(key).await;
    }

    async fn fetch_into_cache<T, F, Fut>(
        &self,
        key: &CacheKey,
        token: &CancelToken,
        fetch: F,
    ) -> LoadOutcome<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        if token.is_cancelled() {
            return LoadOutcome::Cancelled;
        }

        match fetch().await {
            Ok(data) => {
                // The owner may have cancelled while the response was in
                // flight; a late result must not touch either tier.
                if token.is_cancelled() {
                    return LoadOutcome::Cancelled;
                }
                if let Ok(value) = serde_json::to_value(&data) {
                    let _ = self.store.set(key, &value).await;
                }
                self.session.mark_fetched(key);
                LoadOutcome::Fetched(data)
            }
            Err(err) if err.is_cancelled() => LoadOutcome::Cancelled,
            Err(err) => {
                log_fetch_failure(key, &err);
                LoadOutcome::Failed(err)
            }
        }
    }
}

fn log_fetch_failure(key: &CacheKey, err: &ApiError) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!(
        "Failed to fetch '{}': {}",
        key, err
    )));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (key, err);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use serde_json::json;

    use super::super::store::testing::{BrokenStore, MemoryStore};
    use super::*;

    /// Fetcher returning a fixed payload and counting its invocations.
    fn counted_fetch<T: Clone>(
        calls: &Rc<Cell<u32>>,
        payload: T,
    ) -> impl FnOnce() -> std::future::Ready<Result<T, ApiError>> {
        let calls = calls.clone();
        move || {
            calls.set(calls.get() + 1);
            std::future::ready(Ok(payload))
        }
    }

    fn failing_fetch<T>(err: ApiError) -> impl FnOnce() -> std::future::Ready<Result<T, ApiError>> {
        move || std::future::ready(Err(err))
    }

    #[tokio::test]
    async fn test_cold_start_fetches_once_and_fills_both_tiers() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store.clone(), SessionTracker::new());
        let key = CacheKey::sellers_list();
        let calls = Rc::new(Cell::new(0));

        let outcome = orch
            .load(&key, &CancelToken::new(), counted_fetch(&calls, json!([{"_id": "s1"}])))
            .await;

        assert!(matches!(outcome, LoadOutcome::Fetched(_)));
        assert_eq!(calls.get(), 1);
        assert_eq!(store.get(&key).await, Some(json!([{"_id": "s1"}])));
        assert!(orch.session().has_fetched(&key));
    }

    #[tokio::test]
    async fn test_warm_navigation_serves_cache_with_zero_network_calls() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store, SessionTracker::new());
        let key = CacheKey::sellers_list();
        let calls = Rc::new(Cell::new(0));

        orch.load(&key, &CancelToken::new(), counted_fetch(&calls, json!(["a"])))
            .await;
        let outcome = orch
            .load(&key, &CancelToken::new(), counted_fetch(&calls, json!(["b"])))
            .await;

        assert_eq!(calls.get(), 1);
        match outcome {
            LoadOutcome::Cached(value) => assert_eq!(value, json!(["a"])),
            other => panic!("expected cached outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_reload_refetches_despite_persisted_entry() {
        let store = MemoryStore::new();
        let key = CacheKey::sellers_list();
        let calls = Rc::new(Cell::new(0));

        // First session populates the store.
        let first = Orchestrator::new(store.clone(), SessionTracker::new());
        first
            .load(&key, &CancelToken::new(), counted_fetch(&calls, json!(["old"])))
            .await;

        // Reload: new tracker, same store. Freshness is lost, so the stale
        // entry is not trusted and exactly one network call fires.
        let reloaded = Orchestrator::new(store.clone(), SessionTracker::new());
        let outcome = reloaded
            .load(&key, &CancelToken::new(), counted_fetch(&calls, json!(["new"])))
            .await;

        assert!(matches!(outcome, LoadOutcome::Fetched(_)));
        assert_eq!(calls.get(), 2);
        assert_eq!(store.get(&key).await, Some(json!(["new"])));
    }

    #[tokio::test]
    async fn test_manual_refresh_bypasses_fresh_cache() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store.clone(), SessionTracker::new());
        let key = CacheKey::plans_list();
        let calls = Rc::new(Cell::new(0));

        orch.load(&key, &CancelToken::new(), counted_fetch(&calls, json!(["v1"])))
            .await;
        let outcome = orch
            .refresh(&key, &CancelToken::new(), counted_fetch(&calls, json!(["v2"])))
            .await;

        assert_eq!(calls.get(), 2);
        assert!(matches!(outcome, LoadOutcome::Fetched(_)));
        assert_eq!(store.get(&key).await, Some(json!(["v2"])));
        assert!(orch.session().has_fetched(&key));
    }

    #[tokio::test]
    async fn test_superseded_response_does_not_overwrite() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store.clone(), SessionTracker::new());
        let key = CacheKey::dashboard(crate::models::TimeFilter::Today);

        // Request A is superseded: its token is cancelled while its
        // response is still in flight.
        let token_a = CancelToken::new();
        let cancel_during_flight = {
            let token_a = token_a.clone();
            move || {
                token_a.cancel();
                std::future::ready(Ok(json!("slow-stale")))
            }
        };
        let outcome_a = orch.load(&key, &token_a, cancel_during_flight).await;
        assert!(matches!(outcome_a, LoadOutcome::Cancelled));
        assert_eq!(store.get(&key).await, None);
        assert!(!orch.session().has_fetched(&key));

        // Request B lands normally and its result sticks.
        let outcome_b = orch
            .load(&key, &CancelToken::new(), || {
                std::future::ready(Ok(json!("fast-fresh")))
            })
            .await;
        assert!(matches!(outcome_b, LoadOutcome::Fetched(_)));
        assert_eq!(store.get(&key).await, Some(json!("fast-fresh")));
    }

    #[tokio::test]
    async fn test_cancelled_token_never_serves_cache() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store.clone(), SessionTracker::new());
        let key = CacheKey::sellers_list();

        // The key is fresh and the entry is present, so an uncancelled load
        // would resolve Cached.
        store.set(&key, &json!(["stale"])).await;
        orch.session().mark_fetched(&key);

        let token = CancelToken::new();
        token.cancel();
        let outcome: LoadOutcome<serde_json::Value> = orch
            .load(&key, &token, || std::future::ready(Ok(json!(["fresh"]))))
            .await;

        assert!(matches!(outcome, LoadOutcome::Cancelled));
    }

    /// Store whose read trips the cancel token, modelling a run that is
    /// superseded while its store read is pending.
    #[derive(Clone)]
    struct CancelDuringRead {
        inner: MemoryStore,
        token: CancelToken,
    }

    impl CacheStore for CancelDuringRead {
        async fn get(&self, key: &CacheKey) -> Option<serde_json::Value> {
            self.token.cancel();
            self.inner.get(key).await
        }

        async fn set(&self, key: &CacheKey, value: &serde_json::Value) -> bool {
            self.inner.set(key, value).await
        }

        async fn delete(&self, key: &CacheKey) -> bool {
            self.inner.delete(key).await
        }
    }

    #[tokio::test]
    async fn test_supersede_during_store_read_discards_cached_payload() {
        let inner = MemoryStore::new();
        let key = CacheKey::dashboard(crate::models::TimeFilter::Today);
        inner.set(&key, &json!(["stale"])).await;

        let token = CancelToken::new();
        let store = CancelDuringRead {
            inner,
            token: token.clone(),
        };
        let orch = Orchestrator::new(store, SessionTracker::new());
        orch.session().mark_fetched(&key);

        let outcome: LoadOutcome<serde_json::Value> = orch
            .load(&key, &token, || std::future::ready(Ok(json!(["fresh"]))))
            .await;

        assert!(matches!(outcome, LoadOutcome::Cancelled));
    }

    #[tokio::test]
    async fn test_already_cancelled_token_skips_fetch_entirely() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store, SessionTracker::new());
        let key = CacheKey::sellers_list();
        let calls = Rc::new(Cell::new(0));

        let token = CancelToken::new();
        token.cancel();
        let outcome = orch
            .load(&key, &token, counted_fetch(&calls, json!(["never"])))
            .await;

        assert!(matches!(outcome, LoadOutcome::Cancelled));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn test_cancelled_error_is_discarded_silently() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store.clone(), SessionTracker::new());
        let key = CacheKey::sellers_list();

        let outcome: LoadOutcome<serde_json::Value> = orch
            .load(&key, &CancelToken::new(), failing_fetch(ApiError::Cancelled))
            .await;

        assert!(matches!(outcome, LoadOutcome::Cancelled));
        assert_eq!(store.len(), 0);
        assert!(!orch.session().has_fetched(&key));
    }

    #[tokio::test]
    async fn test_failed_fetch_does_not_mark_freshness() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store.clone(), SessionTracker::new());
        let key = CacheKey::sellers_list();
        let calls = Rc::new(Cell::new(0));

        let outcome: LoadOutcome<serde_json::Value> = orch
            .load(
                &key,
                &CancelToken::new(),
                failing_fetch(ApiError::Http(502)),
            )
            .await;
        assert!(matches!(outcome, LoadOutcome::Failed(ApiError::Http(502))));
        assert!(!orch.session().has_fetched(&key));
        assert_eq!(store.len(), 0);

        // Next mount retries the network.
        let retry = orch
            .load(&key, &CancelToken::new(), counted_fetch(&calls, json!(["ok"])))
            .await;
        assert!(matches!(retry, LoadOutcome::Fetched(_)));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_broken_store_degrades_to_always_fetch() {
        let orch = Orchestrator::new(BrokenStore, SessionTracker::new());
        let key = CacheKey::sellers_list();
        let calls = Rc::new(Cell::new(0));

        let first = orch
            .load(&key, &CancelToken::new(), counted_fetch(&calls, json!(["a"])))
            .await;
        assert!(matches!(first, LoadOutcome::Fetched(_)));

        // The marker is set but the store cannot produce the entry, so the
        // defensive fallback goes back to the network instead of failing.
        let second = orch
            .load(&key, &CancelToken::new(), counted_fetch(&calls, json!(["b"])))
            .await;
        assert!(matches!(second, LoadOutcome::Fetched(_)));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn test_unreadable_entry_falls_back_to_network() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store.clone(), SessionTracker::new());
        let key = CacheKey::sellers_list();
        let calls = Rc::new(Cell::new(0));

        // Simulate a shape drift: the marker is fresh but the stored entry
        // no longer matches the expected payload type.
        store.set(&key, &json!({"legacy": true})).await;
        orch.session().mark_fetched(&key);

        let outcome: LoadOutcome<Vec<String>> = orch
            .load(&key, &CancelToken::new(), counted_fetch(&calls, vec!["ok".to_string()]))
            .await;

        assert!(matches!(outcome, LoadOutcome::Fetched(_)));
        assert_eq!(calls.get(), 1);
        assert_eq!(store.get(&key).await, Some(json!(["ok"])));
    }

    #[tokio::test]
    async fn test_mutation_forced_refresh_drops_deleted_entity() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store.clone(), SessionTracker::new());
        let key = CacheKey::plans_list();

        orch.load(&key, &CancelToken::new(), || {
            std::future::ready(Ok(json!([{"_id": "p1"}, {"_id": "p2"}])))
        })
        .await;

        // Plan p2 is deleted server-side; the mutation path forces a
        // re-fetch whose result supersedes the cached list.
        let outcome = orch
            .refresh(&key, &CancelToken::new(), || {
                std::future::ready(Ok(json!([{"_id": "p1"}])))
            })
            .await;

        assert!(matches!(outcome, LoadOutcome::Fetched(_)));
        let cached = store.get(&key).await.expect("entry should exist");
        assert!(!cached.to_string().contains("p2"));
    }

    #[tokio::test]
    async fn test_invalidate_deletes_entry_only() {
        let store = MemoryStore::new();
        let orch = Orchestrator::new(store.clone(), SessionTracker::new());
        let key = CacheKey::plans_list();

        orch.load(&key, &CancelToken::new(), || {
            std::future::ready(Ok(json!(["p1"])))
        })
        .await;
        orch.invalidate(&key).await;

        assert_eq!(store.get(&key).await, None);
        // Marker untouched; only wholesale clears remove markers.
        assert!(orch.session().has_fetched(&key));
    }
}
