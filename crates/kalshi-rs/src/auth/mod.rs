//! Authentication and credential management.

pub mod auth_loader;
pub mod models;

pub use models::Account;
