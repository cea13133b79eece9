use contracts::system::auth::{AuthResponse, UserInfo};

/// Where the session survives a page reload
pub trait SessionStorage {
    fn load_token(&self) -> Option<String>;
    fn save_token(&self, token: &str);
    fn load_user(&self) -> Option<UserInfo>;
    fn save_user(&self, user: &UserInfo);
    fn clear(&self);
}

/// Current credential and identity
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    /// Restore from storage. A user record without a token is stale and removed.
    pub fn init(store: &impl SessionStorage) -> Self {
        match store.load_token().filter(|t| !t.is_empty()) {
            Some(token) => Self {
                token: Some(token),
                user: store.load_user(),
            },
            None => {
                store.clear();
                Self::default()
            }
        }
    }

    /// Persist a successful login or registration
    pub fn establish(
        &mut self,
        response: AuthResponse,
        store: &impl SessionStorage,
    ) -> Result<(), String> {
        if response.token.trim().is_empty() {
            return Err("Server returned an empty token".to_string());
        }
        store.save_token(&response.token);
        store.save_user(&response.user);
        log::info!("session established for {}", response.user.email);
        self.token = Some(response.token);
        self.user = Some(response.user);
        Ok(())
    }

    pub fn teardown(&mut self, store: &impl SessionStorage) {
        store.clear();
        self.token = None;
        self.user = None;
    }

    /// Drop the session after a `401`.
    ///
    /// Returns `true` only for the call that actually ended an active session,
    /// so concurrent failing requests redirect once.
    pub fn expire(&mut self, store: &impl SessionStorage) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        log::warn!("session expired");
        self.teardown(store);
        true
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserInfo::is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::Role;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage {
        token: RefCell<Option<String>>,
        user: RefCell<Option<UserInfo>>,
    }

    impl SessionStorage for MemoryStorage {
        fn load_token(&self) -> Option<String> {
            self.token.borrow().clone()
        }
        fn save_token(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }
        fn load_user(&self) -> Option<UserInfo> {
            self.user.borrow().clone()
        }
        fn save_user(&self, user: &UserInfo) {
            *self.user.borrow_mut() = Some(user.clone());
        }
        fn clear(&self) {
            *self.token.borrow_mut() = None;
            *self.user.borrow_mut() = None;
        }
    }

    fn response(role: Role) -> AuthResponse {
        AuthResponse {
            token: "jwt-123".into(),
            user: UserInfo {
                id: "u1".into(),
                user_id: None,
                name: None,
                lastname: None,
                email: "admin@example.com".into(),
                role,
                created_at: None,
                updated_at: None,
            },
        }
    }

    #[test]
    fn test_login_sets_token_and_role() {
        let store = MemoryStorage::default();
        let mut state = AuthState::default();
        state.establish(response(Role::Admin), &store).unwrap();

        assert!(state.is_authenticated());
        assert!(state.is_admin());
        assert_eq!(store.load_token().as_deref(), Some("jwt-123"));
        assert_eq!(store.load_user().map(|u| u.role), Some(Role::Admin));
    }

    #[test]
    fn test_logout_clears_both() {
        let store = MemoryStorage::default();
        let mut state = AuthState::default();
        state.establish(response(Role::User), &store).unwrap();
        assert!(!state.is_admin());

        state.teardown(&store);
        assert_eq!(state, AuthState::default());
        assert_eq!(store.load_token(), None);
        assert_eq!(store.load_user(), None);
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let store = MemoryStorage::default();
        let mut state = AuthState::default();
        let mut resp = response(Role::User);
        resp.token = String::new();
        assert!(state.establish(resp, &store).is_err());
        assert!(!state.is_authenticated());
        assert_eq!(store.load_token(), None);
    }

    #[test]
    fn test_expire_fires_once() {
        let store = MemoryStorage::default();
        let mut state = AuthState::default();
        state.establish(response(Role::User), &store).unwrap();

        assert!(state.expire(&store));
        assert!(!state.expire(&store));
        assert!(!state.is_authenticated());
        assert_eq!(store.load_token(), None);
    }

    #[test]
    fn test_init_restores_or_clears() {
        let store = MemoryStorage::default();
        AuthState::default()
            .establish(response(Role::Admin), &store)
            .unwrap();
        let restored = AuthState::init(&store);
        assert!(restored.is_admin());

        *store.token.borrow_mut() = None;
        let anonymous = AuthState::init(&store);
        assert_eq!(anonymous, AuthState::default());
        assert_eq!(store.load_user(), None);
    }
}
