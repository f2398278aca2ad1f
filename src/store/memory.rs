use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{CredentialStore, NewUser, Role, StoreError, UserRecord};

/// In-process store for tests and local hacking. A single mutex makes each
/// insert atomic, so it upholds the same per-partition uniqueness guarantee
/// as the Postgres constraint.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<(Role, String), UserRecord>>,
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_phone(
        &self,
        role: Role,
        phone: &str,
    ) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.lock().expect("store mutex poisoned");
        Ok(users.get(&(role, phone.to_string())).cloned())
    }

    async fn insert(&self, role: Role, user: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.users.lock().expect("store mutex poisoned");
        let key = (role, user.phone.clone());
        if users.contains_key(&key) {
            return Err(StoreError::DuplicateKey);
        }
        let record = UserRecord {
            id: Uuid::new_v4(),
            name: user.name,
            phone: user.phone,
            location: user.location,
            password_hash: user.password_hash,
            created_at: OffsetDateTime::now_utc(),
        };
        users.insert(key, record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(phone: &str) -> NewUser {
        NewUser {
            name: "Anu".into(),
            phone: phone.into(),
            location: "Kochi".into(),
            password_hash: "hash".into(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_roundtrips() {
        let store = MemoryStore::default();
        let inserted = store
            .insert(Role::Buyer, new_user("9990001111"))
            .await
            .expect("insert");

        let found = store
            .find_by_phone(Role::Buyer, "9990001111")
            .await
            .expect("find")
            .expect("record present");
        assert_eq!(found.id, inserted.id);
        assert_eq!(found.name, "Anu");
    }

    #[tokio::test]
    async fn duplicate_phone_in_same_partition_is_rejected() {
        let store = MemoryStore::default();
        store
            .insert(Role::Farmer, new_user("9990001111"))
            .await
            .expect("first insert");
        let err = store
            .insert(Role::Farmer, new_user("9990001111"))
            .await
            .expect_err("second insert must fail");
        assert!(matches!(err, StoreError::DuplicateKey));
    }

    #[tokio::test]
    async fn same_phone_is_allowed_across_partitions() {
        let store = MemoryStore::default();
        store
            .insert(Role::Buyer, new_user("9990001111"))
            .await
            .expect("buyer insert");
        store
            .insert(Role::Farmer, new_user("9990001111"))
            .await
            .expect("farmer insert");

        assert!(store
            .find_by_phone(Role::Buyer, "9990001111")
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_by_phone(Role::Farmer, "9990001111")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn find_in_other_partition_misses() {
        let store = MemoryStore::default();
        store
            .insert(Role::Buyer, new_user("9990001111"))
            .await
            .expect("insert");
        assert!(store
            .find_by_phone(Role::Farmer, "9990001111")
            .await
            .unwrap()
            .is_none());
    }
}
