use contracts::system::auth::UserInfo;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

use super::session::SessionStorage;
use crate::shared::config::config;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// `Set-Cookie` style assignment for `document.cookie`
pub fn token_cookie(name: &str, token: &str, max_age_days: u32) -> String {
    format!(
        "{}={}; path=/; max-age={}; SameSite=Lax",
        name,
        urlencoding::encode(token),
        max_age_days * SECONDS_PER_DAY
    )
}

pub fn expired_cookie(name: &str) -> String {
    format!("{}=; path=/; max-age=0; SameSite=Lax", name)
}

/// Find `name` in a `document.cookie` string
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Token in a cookie, user identity as JSON in localStorage
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn load_token(&self) -> Option<String> {
        let cookies = get_html_document()?.cookie().ok()?;
        read_cookie(&cookies, &config().auth.cookie_name)
    }

    fn save_token(&self, token: &str) {
        let auth = &config().auth;
        if let Some(doc) = get_html_document() {
            if doc
                .set_cookie(&token_cookie(&auth.cookie_name, token, auth.cookie_max_age_days))
                .is_err()
            {
                log::error!("Failed to write the session cookie");
            }
        }
    }

    fn load_user(&self) -> Option<UserInfo> {
        let raw = get_local_storage()?
            .get_item(&config().auth.user_storage_key)
            .ok()??;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Ignoring stored user record: {}", e);
                None
            }
        }
    }

    fn save_user(&self, user: &UserInfo) {
        let Some(storage) = get_local_storage() else {
            return;
        };
        match serde_json::to_string(user) {
            Ok(json) => {
                if storage
                    .set_item(&config().auth.user_storage_key, &json)
                    .is_err()
                {
                    log::error!("Failed to write the user record to localStorage");
                }
            }
            Err(e) => log::error!("Failed to store user record: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(doc) = get_html_document() {
            let _ = doc.set_cookie(&expired_cookie(&config().auth.cookie_name));
        }
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(&config().auth.user_storage_key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cookie_lasts_seven_days() {
        assert_eq!(
            token_cookie("token", "a b", 7),
            "token=a%20b; path=/; max-age=604800; SameSite=Lax"
        );
    }

    #[test]
    fn test_read_cookie() {
        let cookies = "theme=dark; token=abc%3D%3D; other=1";
        assert_eq!(read_cookie(cookies, "token").as_deref(), Some("abc=="));
        assert_eq!(read_cookie(cookies, "missing"), None);
        assert_eq!(read_cookie("token=", "token"), None);
        assert_eq!(read_cookie("", "token"), None);
    }
}
