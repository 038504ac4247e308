//! Financial analytics: revenue totals, per-plan breakdown, subscription
//! status counts, and monthly history, filterable by time window.

use leptos::prelude::*;
use web_sys::AbortSignal;

use crate::components::hooks::use_cached_query;
use crate::core::cache::CacheKey;
use crate::core::domains;
use crate::models::{FinancialData, TimeFilter};
use crate::utils::format;

#[component]
pub fn FinancialPage() -> impl IntoView {
    let filter = RwSignal::new(TimeFilter::default());
    let params = Memo::new(move |_| filter.get());

    let financial = use_cached_query(
        params,
        |f: &TimeFilter| CacheKey::financial(*f),
        |f: TimeFilter, signal: Option<AbortSignal>| async move {
            domains::fetch_financial(f, signal.as_ref()).await
        },
    );

    view! {
        <div class="page financial">
            <div class="page-header">
                <div>
                    <h1>"Financial Overview"</h1>
                    <p class="subtitle">"Revenue and subscription analytics"</p>
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
                        class:spinning=move || financial.is_refreshing()
                        title="Refresh Financials"
                        on:click=move |_| financial.refresh()
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || financial.error.get().is_some()>
                <div class="load-error">{move || financial.error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !financial.is_initial_loading()
                fallback=|| view! { <div class="skeleton-grid">"Loading financials..."</div> }
            >
                {move || {
                    let data = financial.data.get().unwrap_or_default();
                    view! {
                        <div class="stat-grid">
                            <div class="stat-card">
                                <p class="stat-label">"Total Revenue"</p>
                                <h3 class="stat-value">{format::currency(data.total_revenue)}</h3>
                                <span class="stat-note">"In selected period"</span>
                            </div>
                            <div class="stat-card">
                                <p class="stat-label">"Active Subscriptions"</p>
                                <h3 class="stat-value">{data.active_subscriptions.to_string()}</h3>
                                <span class="stat-note">"Currently paying sellers"</span>
                            </div>
                        </div>
                        <div class="detail-grid">
                            <RevenueByPlan data=data.clone() />
                            <SubscriptionStatus data=data.clone() />
                        </div>
                        <MonthlyHistory data=data />
                    }
                }}
            </Show>
        </div>
    }
}

#[component]
fn RevenueByPlan(data: FinancialData) -> impl IntoView {
    let empty = data.revenue_by_plan.is_empty();
    let rows = data
        .revenue_by_plan
        .iter()
        .map(|plan| {
            let share = data.revenue_share(plan);
            view! {
                <div class="bar-row">
                    <div class="bar-row-header">
                        <span class="cell-primary">{plan.name.clone()}</span>
                        <span class="cell-muted">
                            {format!(
                                "{} ({} sales)",
                                format::currency(plan.revenue),
                                plan.count,
                            )}
                        </span>
                    </div>
                    <div class="bar-track">
                        <div class="bar-fill" style=format!("width: {:.1}%", share)></div>
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Revenue by Plan"</h2>
            </div>
            {rows}
            <Show when=move || empty>
                <div class="empty-state">"No revenue in this period"</div>
            </Show>
        </div>
    }
}

#[component]
fn SubscriptionStatus(data: FinancialData) -> impl IntoView {
    let empty = data.subscription_status.is_empty();
    let rows = data
        .subscription_status
        .into_iter()
        .map(|entry| {
            view! {
                <div class="detail-row">
                    <span class="detail-label">{entry.status.clone()}</span>
                    <span class="detail-value">{entry.count.to_string()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Subscription Status"</h2>
            </div>
            {rows}
            <Show when=move || empty>
                <div class="empty-state">"No subscriptions found"</div>
            </Show>
        </div>
    }
}

#[component]
fn MonthlyHistory(data: FinancialData) -> impl IntoView {
    let empty = data.monthly_revenue.is_empty();
    let rows = data
        .monthly_revenue
        .into_iter()
        .map(|month| {
            let label = format!("{} {}", format::month_name(month.id.month), month.id.year);
            view! {
                <tr>
                    <td>{label}</td>
                    <td>{format::currency(month.revenue)}</td>
                    <td>{month.count.to_string()}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h2>"Monthly Revenue"</h2>
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Month"</th>
                        <th>"Revenue"</th>
                        <th>"Transactions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || empty>
                <div class="empty-state">"No monthly history yet"</div>
            </Show>
        </div>
    }
}
