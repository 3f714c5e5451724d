//! Database connection management and the SeaORM post store.

mod connections;
pub mod entity;
mod sea_orm_store;

pub use connections::{DatabaseConfig, connect};
pub use sea_orm_store::SeaOrmPostStore;
