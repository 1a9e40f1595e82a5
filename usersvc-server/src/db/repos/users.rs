//! PostgreSQL user store
//!
//! One statement per operation:
//! - insert: INSERT ... RETURNING (id assigned by BIGSERIAL)
//! - update: conditional UPDATE, existence read from rows_affected

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::{StoreError, UserStore};
use crate::models::{User, UserPayload};

/// Default pool size; kept low for a single-table service.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// User store backed by a sqlx pool
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool of at most `max_connections` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns an error if the first connection cannot be established.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        tracing::debug!(max_connections, "Connecting to database");
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Underlying pool, for statements outside the users operations.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, city, language
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find(&self, id: i64) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, firstname, lastname, email, city, language
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::user_not_found(id))
    }

    async fn insert(&self, payload: UserPayload) -> Result<User, StoreError> {
        // Absent fields bind as NULL and trip the NOT NULL constraints
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (firstname, lastname, email, city, language)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, firstname, lastname, email, city, language
            "#,
        )
        .bind(payload.firstname)
        .bind(payload.lastname)
        .bind(payload.email)
        .bind(payload.city)
        .bind(payload.language)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, id: i64, payload: UserPayload) -> Result<(), StoreError> {
        // rows_affected counts matched rows, so a repeated identical
        // update still reports 1
        let result = sqlx::query(
            r#"
            UPDATE users
            SET firstname = $1, lastname = $2, email = $3, city = $4, language = $5
            WHERE id = $6
            "#,
        )
        .bind(payload.firstname)
        .bind(payload.lastname)
        .bind(payload.email)
        .bind(payload.city)
        .bind(payload.language)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::user_not_found(id));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
