//! User store abstraction and its implementations
//!
//! Handlers only see [`UserStore`]; the PostgreSQL store is used in
//! production and the in-memory store backs router tests.

pub mod memory;
pub mod users;

use async_trait::async_trait;

use crate::models::{User, UserPayload};

pub use memory::MemoryUserStore;
pub use users::{PgUserStore, DEFAULT_MAX_CONNECTIONS};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// A required column was absent (NOT NULL violation).
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },
}

impl StoreError {
    pub(crate) fn user_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "user",
            id: id.to_string(),
        }
    }
}

/// Persistence capability for the users resource.
///
/// Each method is a single round-trip; none of them retry.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, ordered by id.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// A single user, or `StoreError::NotFound`.
    async fn find(&self, id: i64) -> Result<User, StoreError>;

    /// Insert a user and return it with its generated id.
    async fn insert(&self, payload: UserPayload) -> Result<User, StoreError>;

    /// Replace all five fields of an existing user.
    ///
    /// `StoreError::NotFound` when no row has `id`; the store is untouched.
    async fn update(&self, id: i64, payload: UserPayload) -> Result<(), StoreError>;

    /// Round-trip to the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}
