//! Application router component.
//!
//! Hash-based routing: the URL hash is the source of truth, `hashchange`
//! events keep browser back/forward working, and programmatic navigation
//! goes through [`AppContext::navigate`]. Every route except the login
//! screen requires a stored session token.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::layout::AdminLayout;
use crate::components::login::LoginPage;
use crate::core::auth;
use crate::models::Route;

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Route guard: protected routes without a session go to the login screen.
    Effect::new(move |_| {
        let current = route.get();
        if current != Route::Login && !auth::is_logged_in() {
            ctx.navigate(Route::Login);
        }
    });

    view! {
        <Show
            when=move || route.get() != Route::Login
            fallback=|| view! { <LoginPage /> }
        >
            <AdminLayout />
        </Show>
    }
}
