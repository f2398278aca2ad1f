use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Partition a credential record lives in. The role is never stored on the
/// record itself; the partition carries it, which is why the same phone
/// number may exist once as a buyer and once as a farmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Farmer,
}

impl Role {
    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "buyer" => Some(Role::Buyer),
            "farmer" => Some(Role::Farmer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Farmer => "farmer",
        }
    }

    /// Capitalized form used in the registration confirmation message.
    pub fn capitalized(&self) -> &'static str {
        match self {
            Role::Buyer => "Buyer",
            Role::Farmer => "Farmer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential record as persisted. The hash never leaves the process in JSON.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: OffsetDateTime,
}

/// Fields the caller supplies at registration; id and created_at are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub phone: String,
    pub location: String,
    pub password_hash: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("phone already registered in this partition")]
    DuplicateKey,
    #[error("store unavailable: {0}")]
    Unavailable(#[source] anyhow::Error),
}

/// Persistence seam for credentials, injected into the auth service so tests
/// can swap in [`MemoryStore`].
///
/// Uniqueness of `phone` within a partition is the store's job, not the
/// caller's: `insert` must fail with [`StoreError::DuplicateKey`] even when
/// two inserts race past any application-level existence check.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_phone(&self, role: Role, phone: &str)
        -> Result<Option<UserRecord>, StoreError>;

    async fn insert(&self, role: Role, user: NewUser) -> Result<UserRecord, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values_only() {
        assert_eq!(Role::parse("buyer"), Some(Role::Buyer));
        assert_eq!(Role::parse("farmer"), Some(Role::Farmer));
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("Farmer"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Buyer).unwrap(), r#""buyer""#);
        assert_eq!(serde_json::to_string(&Role::Farmer).unwrap(), r#""farmer""#);
    }

    #[test]
    fn user_record_never_serializes_the_hash() {
        let record = UserRecord {
            id: Uuid::new_v4(),
            name: "Anu".into(),
            phone: "9990001111".into(),
            location: "Kochi".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            created_at: OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2id"));
    }
}
