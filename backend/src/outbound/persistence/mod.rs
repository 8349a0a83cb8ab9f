//! Outbound persistence adapters backed by PostgreSQL via Diesel.

mod diesel_activity_repository;
mod diesel_business_repository;
mod diesel_contact_repository;
mod diesel_document_repository;
mod diesel_favorite_repository;
mod diesel_profile_repository;
mod error_mapping;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_activity_repository::DieselActivityRepository;
pub use diesel_business_repository::DieselBusinessRepository;
pub use diesel_contact_repository::DieselContactRepository;
pub use diesel_document_repository::DieselDocumentRepository;
pub use diesel_favorite_repository::DieselFavoriteRepository;
pub use diesel_profile_repository::DieselProfileRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
