//! # LightBnB Core
//!
//! Domain layer for the LightBnB data access functions.
//! This crate contains domain entities, the property search value object,
//! repository interfaces with in-memory implementations, the booking service
//! and the error types shared by every layer.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    NewProperty, NewUser, Property, PropertyListing, Reservation, ReservationDetail, User,
};
pub use domain::value_objects::PropertySearch;
pub use errors::{DomainError, DomainResult};
pub use repositories::{PropertyRepository, ReservationRepository, UserRepository};
pub use services::BookingService;
