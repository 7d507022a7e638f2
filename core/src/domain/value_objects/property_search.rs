//! Filters accepted by the property listing query.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::UserId;
use crate::errors::{DomainError, DomainResult};

/// Default row cap for list operations
pub const DEFAULT_LIMIT: u32 = 10;

/// Minor currency units per major unit; prices are stored in cents
pub const CENTS_PER_UNIT: i64 = 100;

/// Highest rating a review can carry
const MAX_RATING: f64 = 5.0;

/// Optional filters for listing properties
///
/// Prices are given in whole currency units and compared against
/// `cost_per_night` after conversion to cents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertySearch {
    pub owner_id: Option<UserId>,
    pub city: Option<String>,
    pub minimum_price_per_night: Option<u32>,
    pub maximum_price_per_night: Option<u32>,
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owned_by(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn in_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn price_between(mut self, minimum: u32, maximum: u32) -> Self {
        self.minimum_price_per_night = Some(minimum);
        self.maximum_price_per_night = Some(maximum);
        self
    }

    pub fn min_price(mut self, minimum: u32) -> Self {
        self.minimum_price_per_night = Some(minimum);
        self
    }

    pub fn max_price(mut self, maximum: u32) -> Self {
        self.maximum_price_per_night = Some(maximum);
        self
    }

    pub fn min_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// Lower price bound in cents
    pub fn minimum_price_cents(&self) -> Option<i64> {
        self.minimum_price_per_night
            .map(|price| i64::from(price) * CENTS_PER_UNIT)
    }

    /// Upper price bound in cents
    pub fn maximum_price_cents(&self) -> Option<i64> {
        self.maximum_price_per_night
            .map(|price| i64::from(price) * CENTS_PER_UNIT)
    }

    /// City filter with surrounding whitespace removed; blank means no filter
    pub fn city_filter(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }

    /// Rejects filter combinations that cannot describe any listing
    pub fn validate(&self) -> DomainResult<()> {
        if let (Some(minimum), Some(maximum)) =
            (self.minimum_price_per_night, self.maximum_price_per_night)
        {
            if minimum > maximum {
                return Err(DomainError::validation(format!(
                    "minimum_price_per_night ({}) exceeds maximum_price_per_night ({})",
                    minimum, maximum
                )));
            }
        }

        if let Some(rating) = self.minimum_rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(DomainError::validation(format!(
                    "minimum_rating must be between 0 and {}, got {}",
                    MAX_RATING, rating
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prices_are_cent_normalized() {
        let search = PropertySearch::new().price_between(50, 150);
        assert_eq!(search.minimum_price_cents(), Some(5_000));
        assert_eq!(search.maximum_price_cents(), Some(15_000));

        let large = PropertySearch::new().max_price(u32::MAX);
        assert_eq!(large.maximum_price_cents(), Some(i64::from(u32::MAX) * 100));
    }

    #[test]
    fn test_inverted_price_range_is_rejected() {
        let search = PropertySearch::new().price_between(200, 100);
        assert!(matches!(search.validate(), Err(DomainError::Validation { .. })));

        assert!(PropertySearch::new().price_between(100, 100).validate().is_ok());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(PropertySearch::new().min_rating(4.0).validate().is_ok());
        assert!(PropertySearch::new().min_rating(5.5).validate().is_err());
        assert!(PropertySearch::new().min_rating(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_blank_city_is_ignored() {
        assert_eq!(PropertySearch::new().in_city("   ").city_filter(), None);
        assert_eq!(
            PropertySearch::new().in_city(" Vancouver ").city_filter(),
            Some("Vancouver")
        );
    }

    #[test]
    fn test_deserializes_from_partial_options() {
        let search: PropertySearch =
            serde_json::from_str(r#"{"minimum_rating": 4}"#).unwrap();
        assert_eq!(search.minimum_rating, Some(4.0));
        assert!(search.owner_id.is_none());
    }
}
