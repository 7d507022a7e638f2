//! PostgreSQL implementation of the ReservationRepository trait.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use lb_core::domain::entities::reservation::{Reservation, ReservationDetail};
use lb_core::domain::entities::user::UserId;
use lb_core::errors::DomainError;
use lb_core::repositories::ReservationRepository;

use crate::database::error::{decode_error, map_query_error};

const GUEST_RESERVATIONS: &str = r#"
    SELECT reservations.id,
           reservations.start_date,
           reservations.end_date,
           reservations.property_id,
           reservations.guest_id,
           properties.title,
           properties.cost_per_night,
           properties.thumbnail_photo_url,
           properties.city,
           users.name AS guest_name,
           users.email AS guest_email
    FROM reservations
    JOIN properties ON reservations.property_id = properties.id
    JOIN users ON reservations.guest_id = users.id
    WHERE reservations.guest_id = $1
    ORDER BY reservations.start_date, reservations.id
    LIMIT $2
"#;

/// PostgreSQL implementation of ReservationRepository
pub struct PostgresReservationRepository {
    pool: PgPool,
}

impl PostgresReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_reservation(row: &PgRow) -> Result<ReservationDetail, DomainError> {
        let reservation = Reservation {
            id: row.try_get("id").map_err(|e| decode_error("id", e))?,
            start_date: row
                .try_get("start_date")
                .map_err(|e| decode_error("start_date", e))?,
            end_date: row
                .try_get("end_date")
                .map_err(|e| decode_error("end_date", e))?,
            property_id: row
                .try_get("property_id")
                .map_err(|e| decode_error("property_id", e))?,
            guest_id: row
                .try_get("guest_id")
                .map_err(|e| decode_error("guest_id", e))?,
        };

        Ok(ReservationDetail {
            reservation,
            title: row.try_get("title").map_err(|e| decode_error("title", e))?,
            cost_per_night: row
                .try_get("cost_per_night")
                .map_err(|e| decode_error("cost_per_night", e))?,
            thumbnail_photo_url: row
                .try_get::<Option<String>, _>("thumbnail_photo_url")
                .map_err(|e| decode_error("thumbnail_photo_url", e))?
                .unwrap_or_default(),
            city: row
                .try_get::<Option<String>, _>("city")
                .map_err(|e| decode_error("city", e))?
                .unwrap_or_default(),
            guest_name: row
                .try_get("guest_name")
                .map_err(|e| decode_error("guest_name", e))?,
            guest_email: row
                .try_get("guest_email")
                .map_err(|e| decode_error("guest_email", e))?,
        })
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepository {
    async fn find_by_guest(
        &self,
        guest_id: UserId,
        limit: u32,
    ) -> Result<Vec<ReservationDetail>, DomainError> {
        let rows = sqlx::query(GUEST_RESERVATIONS)
            .bind(guest_id)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error("Failed to find guest reservations", e))?;

        rows.iter().map(Self::row_to_reservation).collect()
    }
}
