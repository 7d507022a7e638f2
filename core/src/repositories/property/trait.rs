//! Property repository trait.

use async_trait::async_trait;

use crate::domain::entities::property::{NewProperty, Property, PropertyListing};
use crate::domain::value_objects::PropertySearch;
use crate::errors::DomainError;

/// Listing search and property creation
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// List properties matching `search`, cheapest first, at most `limit` rows
    ///
    /// Each listing carries the mean rating of its reviews that satisfy the
    /// filters, not the mean over all of its reviews. Callers are expected to
    /// have run [`PropertySearch::validate`].
    async fn search(
        &self,
        search: &PropertySearch,
        limit: u32,
    ) -> Result<Vec<PropertyListing>, DomainError>;

    /// Store a property under a freshly allocated identifier
    ///
    /// Identifiers are strictly increasing and never handed out twice, even
    /// when called concurrently. Fails with `DomainError::Internal` once the
    /// identifier space is used up.
    async fn create(&self, property: NewProperty) -> Result<Property, DomainError>;
}
