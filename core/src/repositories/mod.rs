pub mod property;
pub mod reservation;
pub mod user;

pub use property::{InMemoryPropertyRepository, PropertyRepository};
pub use reservation::{InMemoryReservationRepository, ReservationRepository};
pub use user::{InMemoryUserRepository, UserRepository};
