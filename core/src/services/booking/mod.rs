//! Booking service module
//!
//! The six data access operations of the booking application:
//! - User lookup by email or id, and user registration
//! - Reservation listing for a guest
//! - Property search with price, owner, city and rating filters
//! - Property creation into the fixture mapping

mod service;


pub use service::BookingService;
