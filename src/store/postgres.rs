use async_trait::async_trait;
use sqlx::PgPool;

use super::{CredentialStore, NewUser, Role, StoreError, UserRecord};

/// Production store: one table per role partition, each with a native
/// `UNIQUE` constraint on `phone`.
#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn table(role: Role) -> &'static str {
    match role {
        Role::Buyer => "buyers",
        Role::Farmer => "farmers",
    }
}

fn unavailable(e: sqlx::Error) -> StoreError {
    StoreError::Unavailable(e.into())
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn find_by_phone(
        &self,
        role: Role,
        phone: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let sql = format!(
            r#"
            SELECT id, name, phone, location, password_hash, created_at
            FROM {}
            WHERE phone = $1
            "#,
            table(role)
        );
        sqlx::query_as::<_, UserRecord>(&sql)
            .bind(phone)
            .fetch_optional(&self.db)
            .await
            .map_err(unavailable)
    }

    async fn insert(&self, role: Role, user: NewUser) -> Result<UserRecord, StoreError> {
        let sql = format!(
            r#"
            INSERT INTO {} (name, phone, location, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, phone, location, password_hash, created_at
            "#,
            table(role)
        );
        sqlx::query_as::<_, UserRecord>(&sql)
            .bind(&user.name)
            .bind(&user.phone)
            .bind(&user.location)
            .bind(&user.password_hash)
            .fetch_one(&self.db)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::DuplicateKey,
                _ => unavailable(e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_maps_to_its_own_table() {
        assert_eq!(table(Role::Buyer), "buyers");
        assert_eq!(table(Role::Farmer), "farmers");
    }
}
