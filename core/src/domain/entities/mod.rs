//! Domain entities representing the booking records.

pub mod property;
pub mod reservation;
pub mod user;

pub use property::{NewProperty, Property, PropertyId, PropertyListing};
pub use reservation::{Reservation, ReservationDetail, ReservationId};
pub use user::{NewUser, User, UserId};
