// Service exports
pub mod postgres;
pub mod store;

pub use postgres::PostgresUserStore;
pub use store::{InMemoryUserStore, StoreError, UserStore};

use crate::config::{StorageBackend, StorageSettings};
use std::sync::Arc;

/// Build the configured user store
pub async fn build_store(settings: &StorageSettings) -> Result<Arc<dyn UserStore>, StoreError> {
    match settings.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory user store");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StorageBackend::Postgres => {
            let url = settings.url.as_deref().ok_or_else(|| {
                StoreError::Config("storage.backend is postgres but no storage.url or DATABASE_URL is set".to_string())
            })?;

            let store = PostgresUserStore::from_settings(
                url,
                settings.max_connections,
                settings.min_connections,
                settings.acquire_timeout_secs,
                settings.idle_timeout_secs,
            )
            .await?;

            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_memory_store() {
        let store = build_store(&StorageSettings::default()).await.unwrap();
        assert_eq!(store.backend(), "memory");
    }

    #[tokio::test]
    async fn test_postgres_without_url_fails() {
        let settings = StorageSettings {
            backend: StorageBackend::Postgres,
            ..StorageSettings::default()
        };

        assert!(matches!(build_store(&settings).await, Err(StoreError::Config(_))));
    }
}
