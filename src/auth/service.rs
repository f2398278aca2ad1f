use std::sync::Arc;

use tracing::{info, warn};

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use super::password::{hash_password, verify_password};
use crate::error::ApiError;
use crate::store::{CredentialStore, NewUser, Role};

/// Orchestrates registration and login over an injected credential store.
///
/// Holds no other state; every call is a single-shot request/response and
/// uniqueness is delegated to the store, so concurrent requests need no
/// coordination here.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
}

/// Presence check: `None` and `""` both count as missing, matching the
/// original API's falsy-field validation.
fn require(field: &Option<String>) -> Result<&str, ApiError> {
    match field.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingFields),
    }
}

fn parse_role(field: &Option<String>) -> Result<Role, ApiError> {
    let raw = require(field)?;
    // Unknown roles are rejected rather than defaulted to farmer.
    Role::parse(raw).ok_or(ApiError::InvalidRole)
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub async fn register(&self, req: RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let name = require(&req.name)?;
        let phone = require(&req.phone)?;
        let location = require(&req.location)?;
        let password = require(&req.password)?;
        let role = parse_role(&req.role)?;

        if self.store.find_by_phone(role, phone).await?.is_some() {
            warn!(%role, phone, "registration attempt for existing phone");
            return Err(ApiError::AlreadyExists);
        }

        let password_hash = hash_password(password)?;

        // Not atomic with the check above; a racing duplicate surfaces as
        // DuplicateKey from the store and maps to AlreadyExists.
        let user = self
            .store
            .insert(
                role,
                NewUser {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    location: location.to_string(),
                    password_hash,
                },
            )
            .await?;

        info!(user_id = %user.id, %role, "user registered");
        Ok(RegisterResponse {
            message: format!("{} registered successfully", role.capitalized()),
        })
    }

    pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse, ApiError> {
        let phone = require(&req.phone)?;
        let password = require(&req.password)?;
        let role = parse_role(&req.role)?;

        // Unknown phone and wrong password answer identically so the
        // endpoint does not reveal whether an account exists.
        let Some(user) = self.store.find_by_phone(role, phone).await? else {
            warn!(%role, phone, "login for unknown phone");
            return Err(ApiError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, %role, "login with wrong password");
            return Err(ApiError::InvalidCredentials);
        }

        info!(user_id = %user.id, %role, "user logged in");
        Ok(LoginResponse {
            message: "Login successful".to_string(),
            role,
            user_id: user.id.to_string(),
        })
    }
}
