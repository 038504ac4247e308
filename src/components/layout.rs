//! Shell layout for authenticated pages: sidebar navigation, header with
//! the operator's name and logout, and the routed page content.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::dashboard::DashboardPage;
use crate::components::financial::FinancialPage;
use crate::components::plans::PlansPage;
use crate::components::seller_details::SellerDetailsPage;
use crate::components::sellers::SellersPage;
use crate::components::system_status::SystemStatusPage;
use crate::config::{APP_NAME, APP_VERSION};
use crate::models::Route;

/// Sidebar destinations, in display order.
fn nav_routes() -> [Route; 5] {
    [
        Route::Dashboard,
        Route::Sellers,
        Route::Plans,
        Route::Financial,
        Route::System,
    ]
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    let admin_name = move || {
        ctx.admin
            .get()
            .map(|a| a.name)
            .unwrap_or_else(|| "admin".to_string())
    };

    view! {
        <div class="layout">
            <aside class="sidebar">
                <div class="sidebar-brand">{APP_NAME}</div>
                <nav>
                    {nav_routes()
                        .into_iter()
                        .map(|target| {
                            let label = target.nav_label().unwrap_or_default();
                            let is_active = {
                                let target = target.clone();
                                move || route.get() == target
                            };
                            view! {
                                <button
                                    class="nav-item"
                                    class:active=is_active
                                    on:click=move |_| ctx.navigate(target.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="sidebar-version">{format!("v{}", APP_VERSION)}</div>
            </aside>
            <div class="content">
                <header class="topbar">
                    <span class="topbar-user">{admin_name}</span>
                    <button class="logout" on:click=move |_| ctx.logout()>
                        "Logout"
                    </button>
                </header>
                <main>
                    {move || match route.get() {
                        Route::Sellers => view! { <SellersPage /> }.into_any(),
                        Route::Seller { id } => view! { <SellerDetailsPage id=id /> }.into_any(),
                        Route::Plans => view! { <PlansPage /> }.into_any(),
                        Route::Financial => view! { <FinancialPage /> }.into_any(),
                        Route::System => view! { <SystemStatusPage /> }.into_any(),
                        // Login is handled by the router; anything else is home.
                        _ => view! { <DashboardPage /> }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
