use contracts::system::auth::{AuthResponse, LoginRequest, RegisterRequest};

use crate::shared::api_utils::{ApiError, Gateway};

fn auth_error(prefix: &str, e: ApiError) -> String {
    match e {
        // On the login form a 401 means bad credentials, not an expired session
        ApiError::Unauthorized => "Invalid email or password".to_string(),
        other => format!("{}: {}", prefix, other),
    }
}

/// Login with email and password
pub async fn login(gw: &Gateway, email: String, password: String) -> Result<AuthResponse, String> {
    let request = LoginRequest { email, password };
    gw.post_json("/auth/login", &request)
        .await
        .map_err(|e| auth_error("Login failed", e))
}

/// Create an account; answers like login
pub async fn register(gw: &Gateway, request: &RegisterRequest) -> Result<AuthResponse, String> {
    gw.post_json("/auth/register", request)
        .await
        .map_err(|e| auth_error("Registration failed", e))
}
