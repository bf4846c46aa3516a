use async_trait::async_trait;
use auth_sdk::{IdentityStore, IdentityStoreError, NewPrincipal, Principal};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

/// Principals keyed by login.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    by_login: DashMap<String, Principal>,
}

impl InMemoryIdentityStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_login.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_login.is_empty()
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<Principal>, IdentityStoreError> {
        Ok(self.by_login.get(login).map(|p| p.value().clone()))
    }

    async fn exists_by_login(&self, login: &str) -> Result<bool, IdentityStoreError> {
        Ok(self.by_login.contains_key(login))
    }

    async fn save(&self, principal: NewPrincipal) -> Result<Principal, IdentityStoreError> {
        // The shard lock held by `entry` makes check-and-insert a single step.
        match self.by_login.entry(principal.login.clone()) {
            Entry::Occupied(_) => Err(IdentityStoreError::DuplicateLogin {
                login: principal.login,
            }),
            Entry::Vacant(slot) => {
                let stored = Principal {
                    id: Uuid::now_v7().to_string(),
                    login: principal.login,
                    secret_hash: principal.secret_hash,
                    role: principal.role,
                };
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_principal(login: &str) -> NewPrincipal {
        NewPrincipal {
            login: login.to_owned(),
            secret_hash: "$argon2id$fake".to_owned(),
            role: "ROLE_USER".to_owned(),
        }
    }

    #[tokio::test]
    async fn save_assigns_unique_ids() {
        let store = InMemoryIdentityStore::new();
        let a = store.save(new_principal("a")).await.unwrap();
        let b = store.save(new_principal("b")).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
        assert!(store.exists_by_login("a").await.unwrap());
        assert_eq!(store.find_by_login("b").await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn save_rejects_existing_login() {
        let store = InMemoryIdentityStore::new();
        let first = store.save(new_principal("a")).await.unwrap();

        let mut again = new_principal("a");
        again.role = "ROLE_ADMIN".to_owned();
        let err = store.save(again).await.unwrap_err();

        assert!(matches!(err, IdentityStoreError::DuplicateLogin { ref login } if login == "a"));
        assert_eq!(store.find_by_login("a").await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn lookups_are_exact() {
        let store = InMemoryIdentityStore::new();
        store.save(new_principal("Ana")).await.unwrap();

        assert!(store.find_by_login("ana").await.unwrap().is_none());
        assert!(!store.exists_by_login("Ana ").await.unwrap());
        assert!(store.find_by_login("").await.unwrap().is_none());
    }
}
