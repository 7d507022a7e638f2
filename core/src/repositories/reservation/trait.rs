//! Reservation repository trait.

use async_trait::async_trait;

use crate::domain::entities::reservation::ReservationDetail;
use crate::domain::entities::user::UserId;
use crate::errors::DomainError;

/// Read access to reservations joined with their property and guest
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// List reservations made by `guest_id`
    ///
    /// Returns at most `limit` rows, ordered by start date. An empty vector
    /// means the guest has no reservations; failures are `Err(_)`.
    async fn find_by_guest(
        &self,
        guest_id: UserId,
        limit: u32,
    ) -> Result<Vec<ReservationDetail>, DomainError>;
}
