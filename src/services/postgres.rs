use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use crate::models::{User, UserPayload};
use crate::services::store::{StoreError, UserStore};

/// PostgreSQL-backed user store
///
/// Ids come from a `BIGSERIAL` sequence, so they are never reused, even
/// across restarts.
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    /// Create a new store from a connection string and run migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from optional settings, filling in defaults
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL at {}", redact_password(url));

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn create(&self, payload: UserPayload) -> Result<User, StoreError> {
        let query = r#"
            INSERT INTO users (name, age, gender, email, city, interests)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, age, gender, email, city, interests
        "#;

        let user = sqlx::query_as::<_, User>(query)
            .bind(&payload.name)
            .bind(payload.age)
            .bind(&payload.gender)
            .bind(&payload.email)
            .bind(&payload.city)
            .bind(&payload.interests)
            .fetch_one(&self.pool)
            .await?;

        tracing::debug!("Inserted user {}", user.id);
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let query = r#"
            SELECT id, name, age, gender, email, city, interests
            FROM users
            ORDER BY id
        "#;

        Ok(sqlx::query_as::<_, User>(query).fetch_all(&self.pool).await?)
    }

    async fn get(&self, id: i64) -> Result<User, StoreError> {
        let query = r#"
            SELECT id, name, age, gender, email, city, interests
            FROM users
            WHERE id = $1
        "#;

        sqlx::query_as::<_, User>(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn update(&self, id: i64, payload: UserPayload) -> Result<User, StoreError> {
        let query = r#"
            UPDATE users
            SET name = $2, age = $3, gender = $4, email = $5, city = $6, interests = $7
            WHERE id = $1
            RETURNING id, name, age, gender, email, city, interests
        "#;

        sqlx::query_as::<_, User>(query)
            .bind(id)
            .bind(&payload.name)
            .bind(payload.age)
            .bind(&payload.gender)
            .bind(&payload.email)
            .bind(&payload.city)
            .bind(&payload.interests)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!("Deleted user {}", id);
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Hide the password component of a connection URL for logging
fn redact_password(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
        None => url.to_string(),
    }
}
