//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Repository implementations for users, reservations and properties
//! - Translation of SQLx failures into domain errors

pub mod connection;
pub mod postgres;

mod error;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::{
    PostgresPropertyRepository, PostgresReservationRepository, PostgresUserRepository,
};
