//! Sellers list with client-side search.

use leptos::prelude::*;
use web_sys::AbortSignal;

use crate::app::AppContext;
use crate::components::hooks::use_cached_query;
use crate::core::cache::CacheKey;
use crate::core::domains;
use crate::models::Route;
use crate::utils::format;

#[component]
pub fn SellersPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let search = RwSignal::new(String::new());

    let params = Memo::new(|_| ());
    let sellers = use_cached_query(
        params,
        |(): &()| CacheKey::sellers_list(),
        |(), signal: Option<AbortSignal>| async move {
            domains::fetch_sellers(signal.as_ref()).await
        },
    );

    // Search filters the cached list locally; it never re-fetches.
    let visible = Memo::new(move |_| {
        let term = search.get();
        sellers
            .data
            .get()
            .unwrap_or_default()
            .into_iter()
            .filter(|s| s.matches(&term))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page sellers">
            <div class="page-header">
                <div>
                    <h1>"Sellers"</h1>
                    <p class="subtitle">"All seller accounts registered on the platform"</p>
                </div>
                <div class="filter-bar">
                    <input
                        type="search"
                        class="search-box"
                        placeholder="Search by name, email or shop..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button
                        class="refresh"
                        class:spinning=move || sellers.is_refreshing()
                        title="Refresh Sellers"
                        on:click=move |_| sellers.refresh()
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || sellers.error.get().is_some()>
                <div class="load-error">{move || sellers.error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !sellers.is_initial_loading()
                fallback=|| view! { <div class="skeleton-grid">"Loading sellers..."</div> }
            >
                <div class="panel">
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Seller"</th>
                                <th>"Shop"</th>
                                <th>"Status"</th>
                                <th>"Joined"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                visible
                                    .get()
                                    .into_iter()
                                    .map(|seller| {
                                        let joined = seller
                                            .created_at
                                            .as_deref()
                                            .map(|t| format::date_only(t).to_string())
                                            .unwrap_or_else(|| "-".to_string());
                                        let id = seller.id.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    <p class="cell-primary">{seller.name.clone()}</p>
                                                    <p class="cell-muted">{seller.email.clone()}</p>
                                                </td>
                                                <td>
                                                    {seller
                                                        .shop_name
                                                        .clone()
                                                        .unwrap_or_else(|| "N/A".to_string())}
                                                </td>
                                                <td>
                                                    <span
                                                        class="badge"
                                                        class:badge-active=seller.is_active
                                                        class:badge-inactive=!seller.is_active
                                                    >
                                                        {if seller.is_active {
                                                            "Active"
                                                        } else {
                                                            "Inactive"
                                                        }}
                                                    </span>
                                                </td>
                                                <td>{joined}</td>
                                                <td>
                                                    <button
                                                        class="link-button"
                                                        on:click=move |_| {
                                                            ctx.navigate(Route::Seller {
                                                                id: id.clone(),
                                                            })
                                                        }
                                                    >
                                                        "View"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <div class="empty-state">"No sellers match this search"</div>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
