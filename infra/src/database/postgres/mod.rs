//! PostgreSQL-specific database implementations
//!
//! This module contains PostgreSQL implementations of repository traits
//! using SQLx for database operations.

pub mod property_repository_impl;
pub mod reservation_repository_impl;
pub mod user_repository_impl;

// Re-export the PostgreSQL implementations
pub use property_repository_impl::PostgresPropertyRepository;
pub use reservation_repository_impl::PostgresReservationRepository;
pub use user_repository_impl::PostgresUserRepository;
