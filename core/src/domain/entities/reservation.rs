//! Reservation records as listed for a guest.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::property::PropertyId;
use super::user::UserId;

pub type ReservationId = i32;

/// A row of the `reservations` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub property_id: PropertyId,
    pub guest_id: UserId,
}

/// A reservation joined with its property and guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetail {
    #[serde(flatten)]
    pub reservation: Reservation,

    pub title: String,
    pub cost_per_night: i32,
    pub thumbnail_photo_url: String,
    pub city: String,

    pub guest_name: String,
    pub guest_email: String,
}

impl ReservationDetail {
    pub fn guest_id(&self) -> UserId {
        self.reservation.guest_id
    }
}
