use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationService;
use crate::routes::routes::AppRoutes;
use crate::shared::config::config;
use crate::system::auth::context::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Navigation state shared by the whole app
    let nav = AppGlobalContext::new();
    provide_context(nav);

    let notify = NotificationService::new(config().notifications.timeout_ms);
    provide_context(notify);

    provide_context(SessionContext::init(nav, notify));

    view! {
        <AppRoutes />
    }
}
