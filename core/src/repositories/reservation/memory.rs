//! In-memory implementation of ReservationRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::reservation::ReservationDetail;
use crate::domain::entities::user::UserId;
use crate::errors::DomainError;

use super::trait_::ReservationRepository;

#[derive(Clone, Default)]
pub struct InMemoryReservationRepository {
    reservations: Arc<RwLock<Vec<ReservationDetail>>>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reservations(reservations: impl IntoIterator<Item = ReservationDetail>) -> Self {
        Self {
            reservations: Arc::new(RwLock::new(reservations.into_iter().collect())),
        }
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn find_by_guest(
        &self,
        guest_id: UserId,
        limit: u32,
    ) -> Result<Vec<ReservationDetail>, DomainError> {
        let reservations = self.reservations.read().await;

        let mut found: Vec<ReservationDetail> = reservations
            .iter()
            .filter(|r| r.guest_id() == guest_id)
            .cloned()
            .collect();
        found.sort_by_key(|r| (r.reservation.start_date, r.reservation.id));
        found.truncate(limit as usize);

        Ok(found)
    }
}
