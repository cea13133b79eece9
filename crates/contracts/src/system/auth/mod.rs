use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.lastname.trim().is_empty() {
            return Err("First and last name are required");
        }
        if !self.email.contains('@') {
            return Err("A valid email is required");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        Ok(())
    }
}

/// Answer of `/auth/login` and `/auth/register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User identity. Login answers `{id, email, role}`; `/auth/users` answers
/// the full record with `_id`, names and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// "First Last" when names are known, otherwise the email
    pub fn display_name(&self) -> String {
        let full = [self.name.as_deref(), self.lastname.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.email.clone()
        } else {
            full
        }
    }
}

/// Answer of `POST /auth/seed-admin`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedAdminResponse {
    #[serde(default)]
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shape() {
        let json = r#"{"token":"abc","user":{"id":"u1","email":"a@b.c","role":"admin"}}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "abc");
        assert!(resp.user.is_admin());
        assert_eq!(resp.user.display_name(), "a@b.c");
    }

    #[test]
    fn test_full_user_record() {
        let json = r#"{"_id":"u2","userId":"USR-2","name":"Bob","lastname":"Stone",
            "email":"bob@x.io","role":"user","createdAt":"2024-01-01T00:00:00Z"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u2");
        assert!(!user.is_admin());
        assert_eq!(user.display_name(), "Bob Stone");
    }

    #[test]
    fn test_unknown_role_is_plain_user() {
        let json = r#"{"id":"u3","email":"c@d.e","role":"auditor"}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_register_validation() {
        let mut req = RegisterRequest {
            name: "Ann".into(),
            lastname: "Lee".into(),
            email: "ann@x.io".into(),
            password: "secret".into(),
            role: None,
        };
        assert!(req.validate().is_ok());
        req.email = "ann".into();
        assert_eq!(req.validate(), Err("A valid email is required"));
        assert!(!serde_json::to_string(&req).unwrap().contains("role"));
    }
}
