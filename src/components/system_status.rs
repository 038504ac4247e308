//! System status page: server process, database, health checks, and the
//! request-traffic widget.

use leptos::prelude::*;
use web_sys::AbortSignal;

use crate::components::hooks::use_cached_query;
use crate::components::request_traffic::RequestTraffic;
use crate::core::cache::CacheKey;
use crate::core::domains;
use crate::models::SystemInfo;
use crate::utils::format;

#[component]
pub fn SystemStatusPage() -> impl IntoView {
    let params = Memo::new(|_| ());
    let system = use_cached_query(
        params,
        |(): &()| CacheKey::system_status(),
        |(), signal: Option<AbortSignal>| async move {
            domains::fetch_system_status(signal.as_ref()).await
        },
    );

    view! {
        <div class="page system">
            <div class="page-header">
                <div>
                    <h1>"System Status"</h1>
                    <p class="subtitle">"Backend server and database health"</p>
                </div>
                <button
                    class="refresh"
                    class:spinning=move || system.is_refreshing()
                    title="Refresh System Status"
                    on:click=move |_| system.refresh()
                >
                    "Refresh"
                </button>
            </div>

            <Show when=move || system.error.get().is_some()>
                <div class="load-error">{move || system.error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !system.is_initial_loading()
                fallback=|| view! { <div class="skeleton-grid">"Loading system status..."</div> }
            >
                {move || {
                    let info = system.data.get().unwrap_or_default();
                    view! {
                        <div class="detail-grid">
                            <ServerPanel info=info.clone() />
                            <DatabasePanel info=info.clone() />
                            <HealthPanel info=info />
                        </div>
                        <RequestTraffic />
                    }
                }}
            </Show>
        </div>
    }
}

#[component]
fn ServerPanel(info: SystemInfo) -> impl IntoView {
    let server = info.server;
    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"API Server"</h2>
                <span
                    class="badge"
                    class:badge-active=server.status == "running"
                    class:badge-inactive=server.status != "running"
                >
                    {server.status.clone()}
                </span>
            </div>
            <DetailRow label="Uptime" value=server.uptime_formatted.clone() />
            <DetailRow label="RSS" value=server.memory.rss.clone() />
            <DetailRow label="Heap Used" value=server.memory.heap_used.clone() />
            <DetailRow label="Heap Total" value=server.memory.heap_total.clone() />
            <DetailRow label="External" value=server.memory.external.clone() />
        </div>
    }
}

#[component]
fn DatabasePanel(info: SystemInfo) -> impl IntoView {
    let operational = info.database_operational();
    let db = info.database;
    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Database"</h2>
                <span
                    class="badge"
                    class:badge-active=operational
                    class:badge-inactive=!operational
                >
                    {db.status.clone()}
                </span>
            </div>
            <DetailRow label="Host" value=db.host.clone() />
            <DetailRow label="Data Size" value=format::bytes(db.stats.data_size) />
            <DetailRow label="Storage Size" value=format::bytes(db.stats.storage_size) />
            <DetailRow label="Index Size" value=format::bytes(db.stats.index_size) />
            <DetailRow label="Documents" value=db.stats.objects.to_string() />
            <div class="collection-list">
                {db
                    .collections
                    .into_iter()
                    .map(|c| {
                        view! {
                            <div class="detail-row">
                                <span class="detail-label">{c.name}</span>
                                <span class="detail-value">{c.count.to_string()}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn HealthPanel(info: SystemInfo) -> impl IntoView {
    let checks = info.health.checks;
    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Health Checks"</h2>
            </div>
            <HealthRow label="Memory" ok=checks.memory />
            <HealthRow label="Uptime" ok=checks.uptime />
        </div>
    }
}

#[component]
fn HealthRow(label: &'static str, ok: bool) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-label">{label}</span>
            <span class="badge" class:badge-active=ok class:badge-inactive=!ok>
                {if ok { "OK" } else { "Degraded" }}
            </span>
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
