use super::view_model::CategoryDetailsViewModel;
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
pub fn CategoryDetails(
    id: Option<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let gw = use_gateway();
    let notify = use_notifications();
    let vm = CategoryDetailsViewModel::new();
    vm.load_if_needed(id, gw.clone(), notify, on_cancel);

    let gw = StoredValue::new(gw);
    let is_edit = vm.is_edit_mode();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(gw.get_value(), notify, on_saved);
    };

    view! {
        <PageFrame page_id="a001_category--detail" category=PAGE_CAT_DETAIL>
            <PageHeader
                title=if is_edit { "Edit Category" } else { "Create New Category" }
                subtitle=if is_edit { "Update the category details" } else { "Add a new product category" }.to_string()
                icon_name="tag"
            >
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_cancel.run(())>
                    {icon("arrow-left")}
                    " Back to Categories"
                </Button>
            </PageHeader>

            <Show
                when=move || !vm.is_loading.get()
                fallback=|| view! { <div class="page__loading"><Spinner /> " Loading category..."</div> }
            >
                <form class="details-form" on:submit=on_submit>
                    {move || vm.error.get().map(|e| view! {
                        <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                    })}

                    <div class="form-group">
                        <label for="name">"Category Name *"</label>
                        <input
                            type="text"
                            id="name"
                            placeholder="Enter category name"
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            rows="4"
                            placeholder="Enter category description (optional)"
                            prop:value=move || vm.form.get().description.unwrap_or_default()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.description = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        />
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
                            {move || match (vm.is_saving.get(), is_edit) {
                                (true, true) => "Updating...",
                                (true, false) => "Creating...",
                                (false, true) => "Update Category",
                                (false, false) => "Create Category",
                            }}
                        </button>
                    </div>
                </form>
            </Show>
        </PageFrame>
    }
}
