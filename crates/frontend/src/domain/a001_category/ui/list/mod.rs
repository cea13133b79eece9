use contracts::domain::a001_category::{filter_categories, Category};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::api;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::notifications::use_notifications;
use crate::shared::components::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_gateway;

#[component]
pub fn CategoriesList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify = use_notifications();
    let gw = StoredValue::new(use_gateway());

    let (items, set_items) = signal::<Vec<Category>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());

    let fetch = move || {
        set_loading.set(true);
        let Some(gw) = gw.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_all(&gw).await {
                Ok(list) => set_items.set(list),
                Err(e) => notify.error(format!("Failed to fetch categories: {}", e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let visible = Memo::new(move |_| items.with(|all| search.with(|q| filter_categories(all, q))));

    let on_delete = move |id: String, name: String| {
        if !confirm(&format!("Are you sure you want to delete \"{}\"?", name)) {
            return;
        }
        let Some(gw) = gw.try_get_value() else {
            return;
        };
        spawn_local(async move {
            match api::delete(&gw, &id).await {
                Ok(()) => {
                    notify.success("Category deleted successfully");
                    fetch();
                }
                Err(e) => notify.error(format!("Failed to delete category: {}", e)),
            }
        });
    };

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Categories"
                subtitle="Organize your products into categories".to_string()
                icon_name="tag"
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| ctx.navigate(Page::CategoryNew)
                >
                    {icon("plus")}
                    " Add Category"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search categories..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="page__loading"><Spinner /> " Loading categories..."</div> }
                >
                    <Show
                        when=move || visible.with(|v| !v.is_empty())
                        fallback=move || {
                            let filtered = search.with(|q| !q.trim().is_empty());
                            view! {
                                <div class="page__empty">
                                    {icon("tag")}
                                    <h3>"No categories"</h3>
                                    <p>
                                        {if filtered {
                                            "No categories match your search."
                                        } else {
                                            "Get started by creating a new category."
                                        }}
                                    </p>
                                </div>
                            }
                        }
                    >
                        <div class="card-grid">
                            <For
                                each=move || visible.get()
                                key=|c| (c.id.clone(), c.updated_at.clone())
                                children=move |category| {
                                    let edit_id = category.id.clone();
                                    let delete_id = category.id.clone();
                                    let delete_name = category.name.clone();
                                    let created = category
                                        .created_at
                                        .as_deref()
                                        .map(format_date)
                                        .unwrap_or_default();
                                    view! {
                                        <div class="category-card">
                                            <div class="category-card__header">
                                                <div class="category-card__icon">{icon("tag")}</div>
                                                <div class="category-card__actions">
                                                    <button
                                                        class="icon-btn"
                                                        title="Edit"
                                                        on:click=move |_| ctx.navigate(Page::CategoryEdit(edit_id.clone()))
                                                    >
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="icon-btn icon-btn--danger"
                                                        title="Delete"
                                                        on:click=move |_| on_delete(delete_id.clone(), delete_name.clone())
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </div>
                                            <h3 class="category-card__name">{category.display_name().to_string()}</h3>
                                            <p class="category-card__code">{category.category_id.clone()}</p>
                                            {category.description.clone().filter(|d| !d.is_empty()).map(|d| view! {
                                                <p class="category-card__description">{d}</p>
                                            })}
                                            <div class="category-card__footer">
                                                <span>{category.slug.clone()}</span>
                                                <span>{created}</span>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </div>
        </PageFrame>
    }
}
