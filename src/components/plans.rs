//! Subscription plan management: list, create, edit, delete.
//!
//! Every mutation goes through the API and then force-refreshes the plans
//! query, so the rendered list, the persistent cache, and the server agree
//! immediately after a write.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortSignal;

use crate::components::hooks::{CachedQuery, use_cached_query};
use crate::core::cache::CacheKey;
use crate::core::domains;
use crate::models::{AVAILABLE_MODULES, Plan, PlanForm};
use crate::utils::{dom, format};

#[component]
pub fn PlansPage() -> impl IntoView {
    let params = Memo::new(|_| ());
    let plans = use_cached_query(
        params,
        |(): &()| CacheKey::plans_list(),
        |(), signal: Option<AbortSignal>| async move { domains::fetch_plans(signal.as_ref()).await },
    );

    // `None` = modal closed; `Some(None)` = creating; `Some(Some(id))` = editing.
    let editing = RwSignal::new(None::<Option<String>>);
    let form = RwSignal::new(PlanForm::default());
    let saving = RwSignal::new(false);
    let save_error = RwSignal::new(None::<String>);

    let open_create = move |_| {
        form.set(PlanForm::default());
        save_error.set(None);
        editing.set(Some(None));
    };

    view! {
        <div class="page plans">
            <div class="page-header">
                <div>
                    <h1>"Subscription Plans"</h1>
                    <p class="subtitle">"Plans available to sellers on the platform"</p>
                </div>
                <div class="filter-bar">
                    <button class="primary" on:click=open_create>
                        "New Plan"
                    </button>
                    <button
                        class="refresh"
                        class:spinning=move || plans.is_refreshing()
                        title="Refresh Plans"
                        on:click=move |_| plans.refresh()
                    >
                        "Refresh"
                    </button>
                </div>
            </div>

            <Show when=move || plans.error.get().is_some()>
                <div class="load-error">{move || plans.error.get().unwrap_or_default()}</div>
            </Show>

            <Show
                when=move || !plans.is_initial_loading()
                fallback=|| view! { <div class="skeleton-grid">"Loading plans..."</div> }
            >
                <div class="card-grid">
                    {move || {
                        plans
                            .data
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|plan| {
                                view! {
                                    <PlanCard
                                        plan=plan
                                        plans=plans
                                        editing=editing
                                        form=form
                                        save_error=save_error
                                    />
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <Show when=move || plans.data.with(|d| d.as_ref().is_some_and(|p| p.is_empty()))>
                    <div class="empty-state">"No plans created yet"</div>
                </Show>
            </Show>

            <Show when=move || editing.get().is_some()>
                <PlanModal
                    plans=plans
                    editing=editing
                    form=form
                    saving=saving
                    save_error=save_error
                />
            </Show>
        </div>
    }
}

#[component]
fn PlanCard(
    plan: Plan,
    plans: CachedQuery<Vec<Plan>>,
    editing: RwSignal<Option<Option<String>>>,
    form: RwSignal<PlanForm>,
    save_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let edit_plan = plan.clone();
    let open_edit = move |_| {
        form.set(PlanForm::from(&edit_plan));
        save_error.set(None);
        editing.set(Some(Some(edit_plan.id.clone())));
    };

    let delete_id = plan.id.clone();
    let delete_name = plan.name.clone();
    let handle_delete = move |_| {
        if !dom::confirm(&format!("Delete plan \"{}\"?", delete_name)) {
            return;
        }
        let id = delete_id.clone();
        spawn_local(async move {
            match domains::delete_plan(&id).await {
                Ok(()) => plans.refresh(),
                Err(err) => dom::log_error(&format!("plan delete failed: {err}")),
            }
        });
    };

    view! {
        <div class="plan-card" class:plan-inactive=!plan.is_active>
            <div class="plan-card-header">
                <h3>{plan.name.clone()}</h3>
                <span class="plan-type">{plan.plan_type.clone()}</span>
            </div>
            <p class="plan-price">
                {format::currency(plan.price)}
                <span class="plan-duration">{format!(" / {} days", plan.duration_days)}</span>
            </p>
            <p class="plan-description">{plan.description.clone()}</p>
            <ul class="plan-limits">
                <li>{format!("{} customers", plan.max_customers)}</li>
                <li>{format!("{} products", plan.max_products)}</li>
                <li>{format!("{} orders", plan.max_orders)}</li>
            </ul>
            <div class="plan-modules">
                {plan
                    .unlocked_modules
                    .iter()
                    .map(|m| view! { <span class="module-chip">{m.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="plan-card-actions">
                <button on:click=open_edit>"Edit"</button>
                <button class="danger" on:click=handle_delete>
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PlanModal(
    plans: CachedQuery<Vec<Plan>>,
    editing: RwSignal<Option<Option<String>>>,
    form: RwSignal<PlanForm>,
    saving: RwSignal<bool>,
    save_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let title = move || {
        if editing.get().flatten().is_some() {
            "Edit Plan"
        } else {
            "Create Plan"
        }
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        save_error.set(None);

        let payload = form.get_untracked();
        let target = editing.get_untracked().flatten();
        spawn_local(async move {
            let result = match &target {
                Some(id) => domains::update_plan(id, &payload).await,
                None => domains::create_plan(&payload).await,
            };
            match result {
                Ok(()) => {
                    editing.set(None);
                    plans.refresh();
                }
                Err(err) => save_error.set(Some(err.to_string())),
            }
            saving.set(false);
        });
    };

    let toggle_module = move |module: &'static str| {
        form.update(|f| {
            if let Some(pos) = f.unlocked_modules.iter().position(|m| m == module) {
                f.unlocked_modules.remove(pos);
            } else {
                f.unlocked_modules.push(module.to_string());
            }
            f.locked_modules = AVAILABLE_MODULES
                .iter()
                .filter(|m| !f.unlocked_modules.iter().any(|u| u == *m))
                .map(|m| m.to_string())
                .collect();
        });
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| editing.set(None)>
            <form
                class="modal"
                on:click=|ev| ev.stop_propagation()
                on:submit=handle_submit
            >
                <h2>{title}</h2>
                <Show when=move || save_error.get().is_some()>
                    <div class="load-error">{move || save_error.get().unwrap_or_default()}</div>
                </Show>

                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| {
                            form.update(|f| f.description = event_target_value(&ev))
                        }
                    />
                </label>
                <div class="field-row">
                    <label>
                        "Price"
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            required
                            prop:value=move || form.with(|f| f.price.to_string())
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.price = event_target_value(&ev).parse().unwrap_or(0.0)
                                })
                            }
                        />
                    </label>
                    <label>
                        "Duration (days)"
                        <input
                            type="number"
                            min="1"
                            required
                            prop:value=move || form.with(|f| f.duration_days.to_string())
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.duration_days = event_target_value(&ev).parse().unwrap_or(30)
                                })
                            }
                        />
                    </label>
                    <label>
                        "Type"
                        <select
                            prop:value=move || form.with(|f| f.plan_type.clone())
                            on:change=move |ev| {
                                form.update(|f| f.plan_type = event_target_value(&ev))
                            }
                        >
                            <option value="standard">"Standard"</option>
                            <option value="premium">"Premium"</option>
                            <option value="trial">"Trial"</option>
                        </select>
                    </label>
                </div>
                <div class="field-row">
                    <label>
                        "Max Customers"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || form.with(|f| f.max_customers.to_string())
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.max_customers = event_target_value(&ev).parse().unwrap_or(0)
                                })
                            }
                        />
                    </label>
                    <label>
                        "Max Products"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || form.with(|f| f.max_products.to_string())
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.max_products = event_target_value(&ev).parse().unwrap_or(0)
                                })
                            }
                        />
                    </label>
                    <label>
                        "Max Orders"
                        <input
                            type="number"
                            min="0"
                            prop:value=move || form.with(|f| f.max_orders.to_string())
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.max_orders = event_target_value(&ev).parse().unwrap_or(0)
                                })
                            }
                        />
                    </label>
                </div>

                <fieldset class="module-picker">
                    <legend>"Unlocked Modules"</legend>
                    {AVAILABLE_MODULES
                        .iter()
                        .map(|&module| {
                            view! {
                                <label class="module-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            form.with(|f| {
                                                f.unlocked_modules.iter().any(|m| m == module)
                                            })
                                        }
                                        on:change=move |_| toggle_module(module)
                                    />
                                    {module}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>

                <label class="module-option">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_active)
                        on:change=move |_| form.update(|f| f.is_active = !f.is_active)
                    />
                    "Plan is active"
                </label>

                <div class="modal-actions">
                    <button type="button" on:click=move |_| editing.set(None)>
                        "Cancel"
                    </button>
                    <button type="submit" class="primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Plan" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
