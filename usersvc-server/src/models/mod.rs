//! Domain models for the users resource
//!
//! Request bodies are deliberately loose: every field is optional at the
//! deserialization layer and completeness is enforced by the store.

pub mod user;

pub use user::{User, UserPayload};
