//! Request-traffic histogram widget, embedded in the system status page.
//!
//! Each selectable range is cached under its own key, so switching back to
//! a previously viewed range renders instantly from cache.

use leptos::prelude::*;
use web_sys::AbortSignal;

use crate::components::hooks::use_cached_query;
use crate::core::cache::CacheKey;
use crate::core::domains;
use crate::models::TimeRange;

#[component]
pub fn RequestTraffic() -> impl IntoView {
    let range = RwSignal::new(TimeRange::default());
    let params = Memo::new(move |_| range.get());

    let stats = use_cached_query(
        params,
        |r: &TimeRange| CacheKey::request_stats(*r),
        |r: TimeRange, signal: Option<AbortSignal>| async move {
            domains::fetch_request_stats(r, signal.as_ref()).await
        },
    );

    view! {
        <div class="panel traffic">
            <div class="panel-header">
                <div>
                    <h2>"Request Traffic"</h2>
                    <p class="subtitle">
                        {move || {
                            let s = stats.data.get().unwrap_or_default();
                            format!(
                                "{} requests, avg {} ms",
                                s.summary.total_requests,
                                s.avg_latency_ms(),
                            )
                        }}
                    </p>
                </div>
                <div class="filter-bar">
                    <select
                        prop:value=move || range.get().as_query()
                        on:change=move |ev| {
                            if let Some(parsed) = TimeRange::from_query(&event_target_value(&ev)) {
                                range.set(parsed);
                            }
                        }
                    >
                        {TimeRange::ALL
                            .into_iter()
                            .map(|value| {
                                view! { <option value=value.as_query()>{value.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button
                        class="refresh"
                        class:spinning=move || stats.is_refreshing()
                        title="Refresh Traffic"
                        on:click=move |_| stats.refresh()
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
                fallback=|| view! { <div class="skeleton-grid">"Loading traffic..."</div> }
            >
                {move || {
                    let s = stats.data.get().unwrap_or_default();
                    let max = s.max_count();
                    let empty = s.data.is_empty();
                    view! {
                        <div class="bar-chart">
                            {s
                                .data
                                .into_iter()
                                .map(|bucket| {
                                    let height = bucket.count * 100 / max;
                                    let has_errors = bucket.errors > 0;
                                    let tooltip = format!(
                                        "{}: {} requests, {} errors, {:.0} ms avg",
                                        bucket.label,
                                        bucket.count,
                                        bucket.errors,
                                        bucket.avg_duration,
                                    );
                                    view! {
                                        <div class="bar-column" title=tooltip>
                                            <div
                                                class="bar"
                                                class:bar-errors=has_errors
                                                style=format!("height: {}%", height.max(2))
                                            ></div>
                                            <span class="bar-label">{bucket.label.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <Show when=move || empty>
                            <div class="empty-state">"No traffic recorded in this range"</div>
                        </Show>
                    }
                }}
            </Show>
        </div>
    }
}
