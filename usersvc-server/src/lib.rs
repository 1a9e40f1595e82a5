//! usersvc-server: users CRUD over HTTP
//!
//! Exposes list, get, create and update for a single `users` table
//! stored in PostgreSQL. Handlers depend only on the [`db::UserStore`]
//! capability, so the router can be driven against an in-memory store.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryUserStore, PgUserStore, StoreError, UserStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{User, UserPayload};
