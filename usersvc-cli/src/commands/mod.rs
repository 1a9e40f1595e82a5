//! Command implementations for the usersvc CLI

pub mod serve;

pub use serve::run_serve;
