//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the application title, the current user and
//! the logout button.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Admin Dashboard"</span>
                <span class="top-header__page">{move || ctx.active.with(|p| p.title())}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || session
                            .user()
                            .map(|u| u.email)
                            .unwrap_or_default()}
                    </span>
                    <Show when=move || session.is_admin()>
                        <span class="top-header__role">"admin"</span>
                    </Show>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| session.logout() title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
