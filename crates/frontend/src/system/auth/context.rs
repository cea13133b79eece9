use contracts::system::auth::{RegisterRequest, UserInfo};
use leptos::prelude::*;

use super::api;
use super::session::AuthState;
use super::storage::BrowserStorage;
use crate::layout::global_context::{AppGlobalContext, AuthScreen, Page};
use crate::layout::notifications::NotificationService;
use crate::shared::api_utils::{api_base, Gateway};

/// Session of the logged-in user, provided once at the application root.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<AuthState>,
    nav: AppGlobalContext,
    notify: NotificationService,
    /// Owned by the application root, so pages that go away with the
    /// session cannot take it with them
    on_unauthorized: Callback<()>,
}

impl SessionContext {
    /// Reads the persisted token and identity
    pub fn init(nav: AppGlobalContext, notify: NotificationService) -> Self {
        let state = AuthState::init(&BrowserStorage);
        log::debug!("session init: authenticated={}", state.is_authenticated());
        let state = RwSignal::new(state);
        let on_unauthorized = Callback::new(move |_| expire_session(state, nav, notify));
        Self {
            state,
            nav,
            notify,
            on_unauthorized,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(AuthState::is_admin)
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.user.clone())
    }

    /// Gateway carrying the current token; a 401 ends the session
    pub fn gateway(&self) -> Gateway {
        Gateway::new(api_base())
            .with_token(self.state.with_untracked(|s| s.token.clone()))
            .on_unauthorized(self.on_unauthorized)
    }

    pub async fn login(self, email: String, password: String) -> Result<(), String> {
        let response = api::login(&Gateway::new(api_base()), email, password).await?;
        let mut result = Ok(());
        self.state
            .update(|s| result = s.establish(response, &BrowserStorage));
        if result.is_ok() {
            self.nav.navigate(Page::Dashboard);
        }
        result
    }

    pub async fn register(self, request: RegisterRequest) -> Result<(), String> {
        request.validate().map_err(str::to_string)?;
        let response = api::register(&Gateway::new(api_base()), &request).await?;
        let mut result = Ok(());
        self.state
            .update(|s| result = s.establish(response, &BrowserStorage));
        if result.is_ok() {
            self.notify.success("Account created");
            self.nav.navigate(Page::Dashboard);
        }
        result
    }

    /// Clears token and identity; no server call
    pub fn logout(&self) {
        self.state.update(|s| s.teardown(&BrowserStorage));
        self.nav.show_auth_screen(AuthScreen::Login);
        log::info!("logged out");
    }

    /// Untracked check usable from tasks that finish after a 401
    pub fn is_active(&self) -> bool {
        self.state
            .try_with_untracked(AuthState::is_authenticated)
            .unwrap_or(false)
    }
}

/// Ends the session after a `401`; later calls are no-ops
fn expire_session(
    state: RwSignal<AuthState>,
    nav: AppGlobalContext,
    notify: NotificationService,
) {
    let active = state
        .try_with_untracked(AuthState::is_authenticated)
        .unwrap_or(false);
    if !active {
        return;
    }
    let mut expired = false;
    state.update(|s| expired = s.expire(&BrowserStorage));
    if expired {
        nav.show_auth_screen(AuthScreen::Login);
        notify.warning("Your session has expired. Please log in again.");
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}

/// Gateway for API calls of the current component
pub fn use_gateway() -> Gateway {
    use_session().gateway()
}
