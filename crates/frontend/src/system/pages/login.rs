use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{AppGlobalContext, AuthScreen};
use crate::layout::notifications::use_notifications;
use crate::system::auth::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify = use_notifications();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_string();
        let password_val = password.get();
        if email_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Email and password are required".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match session.login(email_val, password_val).await {
                Ok(()) => notify.success("Logged in successfully"),
                Err(e) => {
                    notify.error(e.clone());
                    set_error_message.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Admin Dashboard"</h1>
                <h2>"Sign in to your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Don't have an account? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.show_auth_screen(AuthScreen::Register);
                        }>"Register"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
