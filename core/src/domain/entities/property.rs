//! Property entity representing a rental listing.
//!
//! Prices are stored in cents (`cost_per_night`), both in PostgreSQL and in
//! the JSON fixture files.

use serde::{Deserialize, Serialize};

use super::user::UserId;

pub type PropertyId = i32;

/// A rental listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,

    #[serde(flatten)]
    pub details: NewProperty,
}

/// Listing fields without an identifier, used when creating a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewProperty {
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,

    /// Nightly price in cents
    pub cost_per_night: i32,

    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

impl Default for NewProperty {
    fn default() -> Self {
        Self {
            owner_id: 0,
            title: String::new(),
            description: String::new(),
            thumbnail_photo_url: String::new(),
            cover_photo_url: String::new(),
            cost_per_night: 0,
            parking_spaces: 0,
            number_of_bathrooms: 0,
            number_of_bedrooms: 0,
            country: String::new(),
            street: String::new(),
            city: String::new(),
            province: String::new(),
            post_code: String::new(),
            active: true,
        }
    }
}

impl NewProperty {
    pub fn new(owner_id: UserId, title: impl Into<String>, cost_per_night: i32) -> Self {
        Self {
            owner_id,
            title: title.into(),
            cost_per_night,
            ..Default::default()
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Attach an identifier
    pub fn into_property(self, id: PropertyId) -> Property {
        Property { id, details: self }
    }
}

impl Property {
    pub fn cost_per_night(&self) -> i32 {
        self.details.cost_per_night
    }
}

/// A property together with its aggregated review score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,

    /// Mean of the review ratings that passed the search filters
    ///
    /// With a minimum rating set this averages only the reviews at or above
    /// it, so a property rated 4 and 1 reports 4.0 rather than its overall
    /// 2.5. `None` when no review qualifies.
    pub average_rating: Option<f64>,
}
