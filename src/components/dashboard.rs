//! Dashboard overview: platform stats, recent registrations, and a compact
//! system snapshot, filterable by time window.

use leptos::prelude::*;
use web_sys::AbortSignal;

use crate::components::hooks::use_cached_query;
use crate::core::cache::CacheKey;
use crate::core::domains;
use crate::models::{DashboardData, SystemInfo, TimeFilter};
use crate::utils::format;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let filter = RwSignal::new(TimeFilter::default());
    let params = Memo::new(move |_| filter.get());

    let stats = use_cached_query(
        params,
        |f: &TimeFilter| CacheKey::dashboard(*f),
        |f: TimeFilter, signal: Option<AbortSignal>| async move {
            domains::fetch_dashboard(f, signal.as_ref()).await
        },
    );

    // The system snapshot is cached under its own key so refreshing the
    // dashboard never invalidates the full system page.
    let snapshot_params = Memo::new(|_| ());
    let snapshot = use_cached_query(
        snapshot_params,
        |(): &()| CacheKey::system_status_dashboard(),
        |(), signal: Option<AbortSignal>| async move {
            domains::fetch_system_status(signal.as_ref()).await
        },
    );

    let refresh_all = move |_| {
        stats.refresh();
        snapshot.refresh();
    };

    view! {
        <div class="page dashboard">
            <div class="page-header">
                <div>
                    <h1>"Dashboard Overview"</h1>
                    <p class="subtitle">"Welcome back, get an update on your platform."</p>
                </div>
                <div class="filter-bar">
                    {TimeFilter::ALL
                        .into_iter()
                        .map(|value| {
                            view! {
                                <button
                                    class="filter-button"
                                    class:active=move || filter.get() == value
                                    on:click=move |_| filter.set(value)
                                >
                                    {value.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <button
                        class="refresh"
                        class:spinning=move || stats.is_refreshing()
                        title="Refresh Dashboard"
                        on:click=refresh_all
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || stats.error.get().is_some()>
                <div class="load-error">{move || stats.error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !stats.is_initial_loading()
                fallback=|| view! { <div class="skeleton-grid">"Loading dashboard..."</div> }
            >
                {move || {
                    let data = stats.data.get().unwrap_or_default();
                    let period_note = if filter.get() == TimeFilter::All {
                        "Total to date"
                    } else {
                        "In selected period"
                    };
                    view! {
                        <div class="stat-grid">
                            <StatCard
                                label="Total Sellers"
                                value=data.stats.total_sellers.to_string()
                                note="Registered on platform"
                            />
                            <StatCard
                                label="Active Sellers"
                                value=data.stats.active_sellers.to_string()
                                note="Currently active on platform"
                            />
                            <StatCard
                                label="New Registrations"
                                value=data.stats.new_registrations.to_string()
                                note=period_note
                            />
                            <SystemSnapshotCard snapshot=snapshot.data />
                        </div>
                        <RecentSellers data=data />
                    }
                }}
            </Show>
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    value: String,
    note: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <h3 class="stat-value">{value}</h3>
            <span class="stat-note">{note}</span>
        </div>
    }
}

#[component]
fn SystemSnapshotCard(snapshot: RwSignal<Option<SystemInfo>>) -> impl IntoView {
    view! {
        <div class="stat-card stat-card-dark">
            <p class="stat-label">"Backend Status"</p>
            <h3 class="stat-value">
                {move || {
                    snapshot
                        .get()
                        .map(|s| s.database.status.to_uppercase())
                        .unwrap_or_else(|| "UNKNOWN".to_string())
                }}
            </h3>
            <div class="snapshot-rows">
                <div>
                    <span>"Host"</span>
                    <span>
                        {move || {
                            snapshot
                                .get()
                                .map(|s| s.database.host)
                                .unwrap_or_else(|| "-".to_string())
                        }}
                    </span>
                </div>
                <div>
                    <span>"Uptime"</span>
                    <span>
                        {move || {
                            snapshot
                                .get()
                                .map(|s| format!("{}m", s.uptime_minutes()))
                                .unwrap_or_else(|| "-".to_string())
                        }}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn RecentSellers(data: DashboardData) -> impl IntoView {
    let empty = data.recent_sellers.is_empty();
    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Recent Registrations"</h2>
                <p class="subtitle">"New sellers joining the platform"</p>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Seller Name"</th>
                        <th>"Shop Info"</th>
                        <th>"Contact"</th>
                        <th>"Joined Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {data
                        .recent_sellers
                        .into_iter()
                        .map(|seller| {
                            let joined = seller
                                .created_at
                                .as_deref()
                                .map(|t| format::date_only(t).to_string())
                                .unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr>
                                    <td>
                                        <p class="cell-primary">{seller.name.clone()}</p>
                                        <p class="cell-muted">
                                            {format!("ID: {}", seller.short_id())}
                                        </p>
                                    </td>
                                    <td>
                                        {seller
                                            .shop_name
                                            .clone()
                                            .unwrap_or_else(|| "N/A".to_string())}
                                    </td>
                                    <td>{seller.email.clone()}</td>
                                    <td>{joined}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
            <Show when=move || empty>
                <div class="empty-state">"No recent sellers found"</div>
            </Show>
        </div>
    }
}
