use super::view_model::OrderDetailsViewModel;
use crate::layout::notifications::use_notifications;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_gateway;
use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn OrderDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let gw = use_gateway();
    let notify = use_notifications();
    let vm = OrderDetailsViewModel::new(id);
    vm.load_categories(gw.clone());
    vm.load_if_needed(gw.clone(), notify, on_cancel);

    let gw = StoredValue::new(gw);
    let title = if vm.is_edit_mode() { "Edit Order" } else { "Create New Order" };
    let subtitle = if vm.is_edit_mode() {
        "Update the order details"
    } else {
        "Fill in the details to create a new order"
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(gw.get_value(), notify, on_saved);
    };

    view! {
        <PageFrame page_id="a002_order--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=title subtitle=subtitle.to_string() icon_name="orders">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| on_cancel.run(())
                >
                    {icon("arrow-left")}
                    " Back to Orders"
                </Button>
            </PageHeader>

            <Show
                when=move || !vm.is_loading.get()
                fallback=|| view! { <div class="page__loading"><Spinner /> " Loading order..."</div> }
            >
                <form class="details-form" on:submit=on_submit>
                    {move || vm.error.get().map(|e| view! {
                        <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                    })}

                    <div class="form-group">
                        <label for="customer">"Customer Name *"</label>
                        <input
                            type="text"
                            id="customer"
                            placeholder="Enter customer name"
                            prop:value=move || vm.form.get().customer
                            on:input=move |ev| vm.form.update(|f| f.customer = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="category">"Category *"</label>
                        <select
                            id="category"
                            prop:value=move || vm.form.get().category
                            on:change=move |ev| vm.form.update(|f| f.category = event_target_value(&ev))
                        >
                            <option value="">"Select a category"</option>
                            {move || {
                                let selected = vm.form.get().category;
                                vm.categories
                                    .get()
                                    .into_iter()
                                    .map(|c| {
                                        let is_selected = c.id == selected;
                                        let name = c.display_name().to_string();
                                        view! { <option value=c.id selected=is_selected>{name}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="date">"Order Date *"</label>
                            <input
                                type="date"
                                id="date"
                                prop:value=move || vm.form.get().date
                                on:input=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="amount">"Amount *"</label>
                            <input
                                type="number"
                                id="amount"
                                step="0.01"
                                min="1"
                                max="10"
                                placeholder="0.00"
                                prop:value=move || vm.amount_input.get()
                                on:input=move |ev| vm.amount_input.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="source">"Source *"</label>
                            <input
                                type="text"
                                id="source"
                                placeholder="e.g. Website, Mobile App"
                                prop:value=move || vm.form.get().source
                                on:input=move |ev| vm.form.update(|f| f.source = event_target_value(&ev))
                            />
                        </div>

                        <div class="form-group">
                            <label for="geo">"Geographic Location *"</label>
                            <input
                                type="text"
                                id="geo"
                                placeholder="e.g. New York, USA"
                                prop:value=move || vm.form.get().geo
                                on:input=move |ev| vm.form.update(|f| f.geo = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="details-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || vm.is_saving.get()
                        >
                            {move || match (vm.is_saving.get(), vm.is_edit_mode()) {
                                (true, true) => "Updating...",
                                (true, false) => "Creating...",
                                (false, true) => "Update Order",
                                (false, false) => "Create Order",
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </PageFrame>
    }
}
