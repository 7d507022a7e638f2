//! Business services built on the repository interfaces.

pub mod booking;

pub use booking::BookingService;
