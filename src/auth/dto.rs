use serde::{Deserialize, Serialize};

use crate::store::Role;

/// Request body for registration. Every field is optional at the wire level
/// so the service can answer missing fields with the contractual
/// "All fields are required" payload instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub role: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub password: Option<String>,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub role: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Login success payload. The raw record id is the only artifact of a
/// login; no token is issued.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub role: Role,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_uses_camel_case_user_id() {
        let response = LoginResponse {
            message: "Login successful".into(),
            role: Role::Buyer,
            user_id: "abc123".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userId"], "abc123");
        assert_eq!(json["role"], "buyer");
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"name":"Anu"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Anu"));
        assert!(req.role.is_none());
        assert!(req.password.is_none());
    }
}
