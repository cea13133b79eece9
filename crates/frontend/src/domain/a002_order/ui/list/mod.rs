pub mod state;

use contracts::domain::a002_order::FilterField;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{create_state, failure_notice, Applied};
use crate::domain::a001_category::api as category_api;
use crate::domain::a002_order::{api, export};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::notifications::use_notifications;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::config::config;
use crate::shared::date_utils::{format_amount, format_date};
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::{use_gateway, use_session};

#[component]
pub fn OrdersList() -> impl IntoView {
    let list_cfg = &config().list;
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify = use_notifications();
    let session = use_session();
    let gw = StoredValue::new(use_gateway());
    let state = create_state(list_cfg.default_page_size);
    let (exporting, set_exporting) = signal(false);

    // Categories: once per mount; also released on failure
    {
        let gw = gw.get_value();
        spawn_local(async move {
            let result = category_api::fetch_all(&gw).await;
            if let Err(e) = &result {
                if let Some(message) =
                    failure_notice("Failed to load categories", e, session.is_active())
                {
                    notify.error(message);
                }
            }
            state.try_update(|s| s.apply_categories(result));
        });
    }

    // One retrieval per filter change
    let query = Memo::new(move |_| state.with(|s| (s.filters.clone(), s.revision)));
    let debounce_ms = list_cfg.search_debounce_ms;
    Effect::new(move |_| {
        query.track();
        let mut request = None;
        state.update(|s| request = Some(s.begin_fetch()));
        let Some((ticket, filters)) = request else {
            return;
        };

        let Some(gw) = gw.try_get_value() else {
            return;
        };
        spawn_local(async move {
            if debounce_ms > 0 {
                TimeoutFuture::new(debounce_ms).await;
                let current = state
                    .try_with_untracked(|s| s.sequencer.is_current(ticket))
                    .unwrap_or(false);
                if !current {
                    return;
                }
            }

            let outcome = api::fetch_orders(&gw, &filters).await;
            let mut applied = Applied::Stale;
            state.try_update(|s| applied = s.apply_outcome(ticket, outcome));
            match applied {
                Applied::Rendered => {}
                Applied::Stale => log::debug!("dropped stale orders response #{}", ticket),
                Applied::Failed(reason) => {
                    if let Some(message) =
                        failure_notice("Failed to fetch orders", &reason, session.is_active())
                    {
                        notify.error(message);
                    }
                }
            }
        });
    });

    let set_filter = move |field: FilterField, value: String| {
        state.update(|s| s.set_filter(field, value));
    };

    let on_delete = move |id: String, customer: String| {
        if !confirm(&format!(
            "Are you sure you want to delete order for \"{}\"?",
            customer
        )) {
            return;
        }
        let Some(gw) = gw.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match api::delete(&gw, &id).await {
                Ok(()) => {
                    notify.success("Order deleted successfully");
                    state.update(|s| s.refresh());
                }
                Err(e) => notify.error(format!("Failed to delete order: {}", e)),
            }
        });
    };

    let on_export = move |_| {
        let Some(gw) = gw.try_get_value() else {
            return;
        };
        let (filters, categories) =
            state.with_untracked(|s| (s.filters.clone(), s.categories.clone()));
        let export_page_size = config().list.export_page_size;
        set_exporting.set(true);
        spawn_local(async move {
            let result = export::export_orders(
                &gw,
                &filters,
                export_page_size,
                categories.as_deref(),
            )
            .await;
            match result {
                Ok(_) => notify.success("Orders exported successfully"),
                Err(e) => {
                    if let Some(message) =
                        failure_notice("Failed to export orders", &e, session.is_active())
                    {
                        notify.error(message);
                    }
                }
            }
            set_exporting.set(false);
        });
    };

    let filter_value = move |field: FilterField| {
        move || state.with(|s| s.filters.value(field).to_string())
    };

    view! {
        <PageFrame page_id="a002_order--list" category=PAGE_CAT_LIST>
            <PageHeader title="Orders" subtitle="Manage and track customer orders".to_string() icon_name="orders">
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_export
                        disabled=Signal::derive(move || exporting.get())
                    >
                        {icon("download")}
                        {move || if exporting.get() { " Exporting..." } else { " Export CSV" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.navigate(Page::OrderNew)
                    >
                        {icon("plus")}
                        " Add Order"
                    </Button>
                </Flex>
            </PageHeader>

            <div class="page__content">
                <div class="filter-panel">
                    <h3 class="filter-panel__title">{icon("filter")} " Filters"</h3>
                    <div class="filter-panel__grid">
                        <div class="form-group">
                            <label>"Search"</label>
                            <input
                                type="text"
                                placeholder="Customer, source, geo..."
                                prop:value=filter_value(FilterField::Search)
                                on:input=move |ev| set_filter(FilterField::Search, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Category"</label>
                            <select
                                prop:value=filter_value(FilterField::Category)
                                on:change=move |ev| set_filter(FilterField::Category, event_target_value(&ev))
                            >
                                <option value="">"All Categories"</option>
                                {move || {
                                    state
                                        .with(|s| s.categories.clone().unwrap_or_default())
                                        .into_iter()
                                        .map(|c| {
                                            let name = c.display_name().to_string();
                                            view! { <option value=c.id>{name}</option> }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Start Date"</label>
                            <input
                                type="date"
                                prop:value=filter_value(FilterField::StartDate)
                                on:input=move |ev| set_filter(FilterField::StartDate, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"End Date"</label>
                            <input
                                type="date"
                                prop:value=filter_value(FilterField::EndDate)
                                on:input=move |ev| set_filter(FilterField::EndDate, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Source"</label>
                            <input
                                type="text"
                                placeholder="Web, App..."
                                prop:value=filter_value(FilterField::Source)
                                on:input=move |ev| set_filter(FilterField::Source, event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label>"Geo"</label>
                            <input
                                type="text"
                                placeholder="City, country..."
                                prop:value=filter_value(FilterField::Geo)
                                on:input=move |ev| set_filter(FilterField::Geo, event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>

                <Show
                    when=move || state.with(|s| s.is_ready())
                    fallback=|| view! { <div class="page__loading"><Spinner /> " Loading orders..."</div> }
                >
                    <div class="table-card">
                        <div class="table-card__header">
                            <h3>{move || format!("Orders ({})", state.with(|s| s.total))}</h3>
                            <Show when=move || state.with(|s| s.is_loading)>
                                <Spinner size=SpinnerSize::Tiny />
                            </Show>
                        </div>

                        <Show
                            when=move || state.with(|s| !s.orders.is_empty())
                            fallback=move || view! {
                                <div class="page__empty">
                                    {icon("orders")}
                                    <h3>"No orders"</h3>
                                    <p>"Get started by creating a new order."</p>
                                </div>
                            }
                        >
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Order"</th>
                                        <th>"Customer"</th>
                                        <th>"Category"</th>
                                        <th>"Date"</th>
                                        <th>"Source"</th>
                                        <th>"Amount"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || {
                                        state.with(|s| {
                                            s.orders
                                                .iter()
                                                .map(|order| {
                                                    let category = s.category_name(order);
                                                    let view_id = order.id.clone();
                                                    let edit_id = order.id.clone();
                                                    let delete_id = order.id.clone();
                                                    let customer = order.customer.clone();
                                                    let source = order.source.clone();
                                                    view! {
                                                        <tr>
                                                            <td class="data-table__strong">{order.order_id.clone()}</td>
                                                            <td>{order.customer.clone()}</td>
                                                            <td>{category}</td>
                                                            <td>{format_date(&order.date)}</td>
                                                            <td><Badge>{source}</Badge></td>
                                                            <td class="data-table__strong">{format_amount(order.amount)}</td>
                                                            <td class="data-table__actions">
                                                                <button
                                                                    class="icon-btn"
                                                                    title="View"
                                                                    on:click=move |_| ctx.navigate(Page::OrderView(view_id.clone()))
                                                                >
                                                                    {icon("eye")}
                                                                </button>
                                                                <button
                                                                    class="icon-btn"
                                                                    title="Edit"
                                                                    on:click=move |_| ctx.navigate(Page::OrderEdit(edit_id.clone()))
                                                                >
                                                                    {icon("edit")}
                                                                </button>
                                                                <button
                                                                    class="icon-btn icon-btn--danger"
                                                                    title="Delete"
                                                                    on:click=move |_| on_delete(delete_id.clone(), customer.clone())
                                                                >
                                                                    {icon("trash")}
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()
                                        })
                                    }}
                                </tbody>
                            </table>
                        </Show>

                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page()))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                            total_count=Signal::derive(move || state.with(|s| s.total))
                            page_size=Signal::derive(move || state.with(|s| s.page_size()))
                            on_page_change=Callback::new(move |page| state.update(|s| s.set_page(page)))
                            on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                            page_size_options=list_cfg.page_size_options.clone()
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}
