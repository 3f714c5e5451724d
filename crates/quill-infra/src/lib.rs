//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! Currently a single concern: the SeaORM-backed post store.

pub mod database;

pub use database::{DatabaseConfig, SeaOrmPostStore, connect};

// Connection errors cross the crate boundary at startup.
pub use sea_orm::DbErr;
