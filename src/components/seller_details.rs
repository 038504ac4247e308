//! Full profile view for a single seller.

use leptos::prelude::*;
use web_sys::AbortSignal;

use crate::app::AppContext;
use crate::components::hooks::use_cached_query;
use crate::core::cache::CacheKey;
use crate::core::domains;
use crate::models::Route;
use crate::utils::format;

#[component]
pub fn SellerDetailsPage(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // The id is part of the cache key, so navigating between sellers keeps
    // each profile cached independently.
    let params = Memo::new(move |_| id.clone());
    let details = use_cached_query(
        params,
        |id: &String| CacheKey::seller(id),
        |id: String, signal: Option<AbortSignal>| async move {
            domains::fetch_seller(&id, signal.as_ref()).await
        },
    );

    view! {
        <div class="page seller-details">
            <div class="page-header">
                <div>
                    <button class="link-button" on:click=move |_| ctx.navigate(Route::Sellers)>
                        "< Back to Sellers"
                    </button>
                    <h1>"Seller Profile"</h1>
                </div>
                <button
                    class="refresh"
                    class:spinning=move || details.is_refreshing()
                    title="Refresh Profile"
                    on:click=move |_| details.refresh()
                >
                    "Refresh"
                </button>
            </div>

            <Show when=move || details.error.get().is_some()>
                <div class="load-error">{move || details.error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !details.is_initial_loading()
                fallback=|| view! { <div class="skeleton-grid">"Loading profile..."</div> }
            >
                {move || {
                    details
                        .data
                        .get()
                        .map(|seller| {
                            let joined = seller
                                .created_at
                                .as_deref()
                                .map(|t| format::date_only(t).to_string())
                                .unwrap_or_else(|| "-".to_string());
                            let last_active = seller
                                .last_activity_date
                                .as_deref()
                                .map(|t| format::date_only(t).to_string())
                                .unwrap_or_else(|| "-".to_string());
                            let address = [
                                seller.shop_address.clone(),
                                seller.city.clone(),
                                seller.state.clone(),
                                seller.pincode.clone(),
                            ]
                            .into_iter()
                            .flatten()
                            .collect::<Vec<_>>()
                            .join(", ");
                            view! {
                                <div class="detail-grid">
                                    <div class="panel">
                                        <div class="panel-header">
                                            <h2>{seller.name.clone()}</h2>
                                            <span
                                                class="badge"
                                                class:badge-active=seller.is_active
                                                class:badge-inactive=!seller.is_active
                                            >
                                                {if seller.is_active { "Active" } else { "Inactive" }}
                                            </span>
                                        </div>
                                        <DetailRow label="Email" value=seller.email.clone() />
                                        <DetailRow
                                            label="Phone"
                                            value=seller
                                                .phone_number
                                                .clone()
                                                .unwrap_or_else(|| "-".to_string())
                                        />
                                        <DetailRow label="Joined" value=joined />
                                        <DetailRow label="Last Active" value=last_active />
                                        <DetailRow
                                            label="Profile"
                                            value=if seller.profile_completed {
                                                "Complete".to_string()
                                            } else {
                                                "Incomplete".to_string()
                                            }
                                        />
                                    </div>
                                    <div class="panel">
                                        <div class="panel-header">
                                            <h2>"Business"</h2>
                                        </div>
                                        <DetailRow
                                            label="Shop Name"
                                            value=seller
                                                .shop_name
                                                .clone()
                                                .unwrap_or_else(|| "N/A".to_string())
                                        />
                                        <DetailRow
                                            label="Business Type"
                                            value=seller
                                                .business_type
                                                .clone()
                                                .unwrap_or_else(|| "-".to_string())
                                        />
                                        <DetailRow
                                            label="Address"
                                            value=if address.is_empty() {
                                                "-".to_string()
                                            } else {
                                                address
                                            }
                                        />
                                        <DetailRow
                                            label="GST Number"
                                            value=seller
                                                .gst_number
                                                .clone()
                                                .unwrap_or_else(|| "-".to_string())
                                        />
                                        <DetailRow
                                            label="Current Plan"
                                            value=seller
                                                .current_plan_id
                                                .clone()
                                                .unwrap_or_else(|| "No plan".to_string())
                                        />
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{value}</span>
        </div>
    }
}
