//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::auth;
use crate::core::cache::{Orchestrator, SessionTracker, store::IdbStore};
use crate::models::{AdminUser, Route};

/// Application-wide context.
///
/// Created once at startup and provided at the root of the component tree;
/// any child can access it with `use_context::<AppContext>()`. The cache
/// services are explicit members rather than ambient globals so tests can
/// build an [`Orchestrator`] around a fake store.
///
/// The orchestrator itself is single-threaded state (`Rc` internals), so it
/// lives in the local arena behind a `StoredValue` handle; the handle is a
/// plain `Copy` key, which keeps the whole context `Send + Sync` as the
/// context API requires.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Serve-or-fetch engine over the two cache tiers (process-wide
    /// singletons by construction: one store, one tracker).
    pub cache: StoredValue<Orchestrator<IdbStore>, LocalStorage>,

    /// Logged-in admin profile, if any.
    pub admin: RwSignal<Option<AdminUser>>,

    /// Current route, kept in sync with the URL hash.
    pub route: RwSignal<Route>,
}

impl AppContext {
    /// Creates the context, restoring any persisted admin session.
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new_local(Orchestrator::new(
                IdbStore::new(),
                SessionTracker::new(),
            )),
            admin: RwSignal::new(auth::current_admin()),
            route: RwSignal::new(Route::current()),
        }
    }

    /// Navigate to `route`: update the URL (adds a history entry) and the
    /// route signal. `pushState` does not fire `hashchange`, so the signal
    /// has to be set explicitly here.
    pub fn navigate(&self, route: Route) {
        route.push();
        self.route.set(route);
    }

    /// Tear down the session: drop the persisted token and profile, wipe
    /// all freshness markers, and return to the login screen. Persistent
    /// cache entries are left behind; without markers they are never
    /// served without a revalidating fetch.
    pub fn logout(&self) {
        auth::logout();
        self.cache.with_value(|cache| cache.session().clear());
        self.admin.set(None);
        self.navigate(Route::Login);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="error-screen">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <button on:click=move |_| crate::utils::dom::reload()>"Reload Page"</button>
                </div>
            }
        }>
            <AppRouter />
        </ErrorBoundary>
    }
}
