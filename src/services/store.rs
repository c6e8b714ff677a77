use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;
use tokio::sync::RwLock;
use crate::models::{User, UserPayload};

/// Errors that can occur when reading or writing users
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Persistence contract for user records
///
/// Payloads are validated before they reach a store. Ids are assigned by the
/// store, strictly increasing, and never handed out twice.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user and return it with its assigned id
    async fn create(&self, payload: UserPayload) -> Result<User, StoreError>;

    /// All users in ascending id order
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn get(&self, id: i64) -> Result<User, StoreError>;

    /// Replace every field except the id
    async fn update(&self, id: i64, payload: UserPayload) -> Result<User, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    /// Backend name reported by the health endpoint
    fn backend(&self) -> &'static str;

    async fn health_check(&self) -> Result<bool, StoreError>;
}

#[derive(Debug)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// Process-local user store
///
/// A `BTreeMap` keyed by id keeps listing in insertion order since ids only
/// grow. The counter is never rewound, so deleted ids stay retired.
#[derive(Debug)]
pub struct InMemoryUserStore {
    state: RwLock<MemoryState>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, payload: UserPayload) -> Result<User, StoreError> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;

        let user = User::from_payload(id, payload);
        state.users.insert(id, user.clone());

        tracing::debug!("Created user {} in memory", id);
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let state = self.state.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<User, StoreError> {
        let state = self.state.read().await;
        state.users.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: i64, payload: UserPayload) -> Result<User, StoreError> {
        let mut state = self.state.write().await;
        let user = state.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        user.apply(payload);
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, interests: &[&str]) -> UserPayload {
        UserPayload {
            name: name.to_string(),
            age: 30,
            gender: "male".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            city: "New York".to_string(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryUserStore::new();

        let a = store.create(payload("Alice", &["reading"])).await.unwrap();
        let b = store.create(payload("Bob", &[])).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.name, "Alice");
        assert_eq!(a.interests, vec!["reading"]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let store = InMemoryUserStore::new();

        let a = store.create(payload("Alice", &[])).await.unwrap();
        store.delete(a.id).await.unwrap();
        let b = store.create(payload("Bob", &[])).await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(matches!(store.get(a.id).await, Err(StoreError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let store = InMemoryUserStore::new();
        let created = store.create(payload("Alice", &["reading"])).await.unwrap();

        let updated = store
            .update(created.id, payload("Alicia", &["yoga"]))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alicia");
        assert_eq!(store.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let store = InMemoryUserStore::new();

        assert!(matches!(store.get(42).await, Err(StoreError::NotFound(42))));
        assert!(matches!(
            store.update(42, payload("X", &[])).await,
            Err(StoreError::NotFound(42))
        ));
        assert!(matches!(store.delete(42).await, Err(StoreError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let store = InMemoryUserStore::new();
        for name in ["A", "B", "C", "D"] {
            store.create(payload(name, &[])).await.unwrap();
        }
        store.delete(2).await.unwrap();

        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|u| u.name).collect();

        assert_eq!(names, vec!["A", "C", "D"]);
    }
}
