use contracts::system::auth::RegisterRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{AppGlobalContext, AuthScreen};
use crate::layout::notifications::use_notifications;
use crate::system::auth::context::use_session;

/// Sign-up form; a successful registration logs the user in
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let notify = use_notifications();

    let form = RwSignal::new(RegisterRequest::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.get();
        if let Err(e) = request.validate() {
            set_error_message.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            if let Err(e) = session.register(request).await {
                notify.error(e.clone());
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Admin Dashboard"</h1>
                <h2>"Create your account"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="name">"First name"</label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="lastname">"Last name"</label>
                            <input
                                type="text"
                                id="lastname"
                                prop:value=move || form.with(|f| f.lastname.clone())
                                on:input=move |ev| form.update(|f| f.lastname = event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <div class="login-info">
                    <p>
                        "Already have an account? "
                        <a href="#" on:click=move |ev| {
                            ev.prevent_default();
                            ctx.show_auth_screen(AuthScreen::Login);
                        }>"Sign in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
