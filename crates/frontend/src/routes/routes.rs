use crate::layout::global_context::{AppGlobalContext, AuthScreen};
use crate::layout::notifications::NotificationHost;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::{LoginPage, RegisterPage};
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Mirror the active page in the URL. Runs once per login.
    ctx.init_router_integration();

    view! { <Shell /> }
}

#[component]
fn AuthScreens() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        {move || match ctx.auth_screen.get() {
            AuthScreen::Login => view! { <LoginPage /> }.into_any(),
            AuthScreen::Register => view! { <RegisterPage /> }.into_any(),
        }}
        <NotificationHost />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <AuthScreens /> }
        >
            <MainLayout />
        </Show>
    }
}
