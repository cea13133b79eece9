use contracts::system::auth::{SeedAdminResponse, UserInfo};

use crate::shared::api_utils::Gateway;

/// All registered users (admin only)
pub async fn fetch_users(gw: &Gateway) -> Result<Vec<UserInfo>, String> {
    gw.get_json("/auth/users").await.map_err(|e| e.to_string())
}

/// Create the default admin account on the server
pub async fn seed_admin(gw: &Gateway) -> Result<SeedAdminResponse, String> {
    gw.post_json::<_, Option<SeedAdminResponse>>("/auth/seed-admin", &serde_json::json!({}))
        .await
        .map(Option::unwrap_or_default)
        .map_err(|e| e.to_string())
}
