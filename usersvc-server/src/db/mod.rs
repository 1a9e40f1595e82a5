//! Database layer - user stores
//!
//! # Design Principles
//!
//! - Bounded sqlx pool owned by the store - no Arc<Mutex<Connection>>
//! - Positional binds only, SQL text is never assembled from input
//! - Rely on DB constraints for completeness - no pre-validation
//! - One statement per operation, no transactions

pub mod repos;

pub use repos::*;
