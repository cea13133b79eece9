use leptos::prelude::*;

use super::context::use_session;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::notifications::use_notifications;

/// Component that requires admin privileges.
/// Non-admins are sent to the dashboard with a notification.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify = use_notifications();

    Effect::new(move |_| {
        if session.is_authenticated() && !session.is_admin() {
            notify.error("Access denied. Admin privileges required.");
            ctx.navigate(Page::Dashboard);
        }
    });

    view! {
        <Show
            when=move || session.is_authenticated() && session.is_admin()
            fallback=|| view! { <div class="page__empty">"Access denied. Admin privileges required."</div> }
        >
            {children()}
        </Show>
    }
}
