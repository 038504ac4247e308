//! Shared data-fetching hook for the page components.
//!
//! Binds the cache orchestrator to Leptos signals: every page declares its
//! query parameters, cache key, and fetcher once, and gets back reactive
//! `data` / `loading` / `error` signals plus a manual-refresh handle.
//!
//! Lifecycle per parameter change: the previous in-flight request (if any)
//! is cancelled - both its cooperative token and its wire-level abort
//! signal - before a new one is issued, so at most one request per view
//! instance is ever authoritative. A superseded run resolves to
//! `Cancelled` and leaves all state alone.
//!
//! Loading UI contract: `loading` is true while a run is outstanding, but
//! `data` keeps its last value, so views can distinguish "no data yet"
//! (skeleton) from "refreshing with stale data on screen" (spinner).

use std::rc::Rc;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal};

use crate::app::AppContext;
use crate::core::cache::{CacheKey, CancelToken, LoadOutcome};
use crate::core::error::ApiError;

/// One outstanding request: cooperative token plus wire-level abort.
struct InFlight {
    token: CancelToken,
    controller: Option<AbortController>,
}

impl InFlight {
    fn cancel(&self) {
        self.token.cancel();
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

/// Reactive handle to one cached dataset.
pub struct CachedQuery<T: Send + Sync + 'static> {
    /// Last payload shown to the operator; kept during background refresh.
    pub data: RwSignal<Option<T>>,
    /// True while a load or refresh is outstanding.
    pub loading: RwSignal<bool>,
    /// Failure text from the most recent run, if it failed.
    pub error: RwSignal<Option<String>>,
    refresh: StoredValue<Rc<dyn Fn()>, LocalStorage>,
}

impl<T: Send + Sync + 'static> CachedQuery<T> {
    /// Force a network fetch, ignoring both cache tiers.
    pub fn refresh(&self) {
        self.refresh.with_value(|f| f());
    }

    /// True while the initial load is running and nothing is on screen yet.
    pub fn is_initial_loading(&self) -> bool {
        self.loading.get() && self.data.with(|d| d.is_none())
    }

    /// True while refreshing with stale data still rendered.
    pub fn is_refreshing(&self) -> bool {
        self.loading.get() && self.data.with(|d| d.is_some())
    }
}

impl<T: Send + Sync + 'static> Clone for CachedQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CachedQuery<T> {}

/// Hook wiring one data domain into the cache orchestrator.
///
/// `key_fn` maps the current parameters to their cache key; `fetch_fn`
/// builds the network future for those parameters, honoring the abort
/// signal it is given. The query re-runs whenever `params` changes.
pub fn use_cached_query<T, P, KeyFn, FetchFn, Fut>(
    params: Memo<P>,
    key_fn: KeyFn,
    fetch_fn: FetchFn,
) -> CachedQuery<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    P: Clone + PartialEq + Send + Sync + 'static,
    KeyFn: Fn(&P) -> CacheKey + Copy + 'static,
    FetchFn: Fn(P, Option<AbortSignal>) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let data = RwSignal::new(None::<T>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let in_flight = StoredValue::new_local(None::<InFlight>);

    let run = {
        let cache = ctx.cache;
        move |params: P, force: bool| {
            // Supersede: cancel the previous request before issuing a new one.
            in_flight.update_value(|slot| {
                if let Some(previous) = slot.take() {
                    previous.cancel();
                }
            });

            let token = CancelToken::new();
            let controller = AbortController::new().ok();
            let signal = controller.as_ref().map(|c| c.signal());
            in_flight.set_value(Some(InFlight {
                token: token.clone(),
                controller,
            }));

            loading.set(true);
            let key = key_fn(&params);
            let cache = cache.with_value(|cache| cache.clone());
            spawn_local(async move {
                let fetch = move || fetch_fn(params, signal);
                let outcome = if force {
                    cache.refresh(&key, &token, fetch).await
                } else {
                    cache.load(&key, &token, fetch).await
                };
                match outcome {
                    LoadOutcome::Cached(value) | LoadOutcome::Fetched(value) => {
                        data.set(Some(value));
                        error.set(None);
                        loading.set(false);
                    }
                    LoadOutcome::Failed(err) => {
                        // Keep any stale data on screen; just surface the failure.
                        error.set(Some(err.to_string()));
                        loading.set(false);
                    }
                    // Superseded or unmounted: the newer run owns the state.
                    LoadOutcome::Cancelled => {}
                }
            });
        }
    };

    Effect::new({
        let run = run.clone();
        move |previous: Option<P>| {
            let current = params.get();
            if previous.as_ref() != Some(&current) {
                run(current.clone(), false);
            }
            current
        }
    });

    on_cleanup(move || {
        in_flight.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
        });
    });

    let refresh: Rc<dyn Fn()> = Rc::new(move || run(params.get_untracked(), true));

    CachedQuery {
        data,
        loading,
        error,
        refresh: StoredValue::new_local(refresh),
    }
}
