use crate::dashboards::OrderReportDashboard;
use crate::domain::a001_category::ui::{CategoriesList, CategoryDetails};
use crate::domain::a002_order::ui::{OrderCard, OrderDetails, OrdersList};
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::system::users::ui::UsersListPage;
use leptos::callback::Callback;
use leptos::prelude::*;

/// Renders the active page
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let to_orders = Callback::new(move |_| ctx.navigate(Page::Orders));
    let to_categories = Callback::new(move |_| ctx.navigate(Page::Categories));
    let to_edit = Callback::new(move |id: String| ctx.navigate(Page::OrderEdit(id)));

    view! {
        <div data-zone="center" class="app-main__content">
            {move || match ctx.active.get() {
                Page::Dashboard => view! { <OrderReportDashboard /> }.into_any(),
                Page::Orders => view! { <OrdersList /> }.into_any(),
                Page::OrderNew => view! {
                    <OrderDetails id=None on_saved=to_orders on_cancel=to_orders />
                }.into_any(),
                Page::OrderEdit(id) => view! {
                    <OrderDetails id=Some(id) on_saved=to_orders on_cancel=to_orders />
                }.into_any(),
                Page::OrderView(id) => view! {
                    <OrderCard id=id on_back=to_orders on_edit=to_edit />
                }.into_any(),
                Page::Categories => view! { <CategoriesList /> }.into_any(),
                Page::CategoryNew => view! {
                    <CategoryDetails id=None on_saved=to_categories on_cancel=to_categories />
                }.into_any(),
                Page::CategoryEdit(id) => view! {
                    <CategoryDetails id=Some(id) on_saved=to_categories on_cancel=to_categories />
                }.into_any(),
                Page::Admin => view! { <UsersListPage /> }.into_any(),
            }}
        </div>
    }
}
