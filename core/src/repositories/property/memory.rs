//! In-memory property fixture mapping
//!
//! Holds listings keyed by id for the lifetime of the process. It is seeded
//! from the JSON fixture format (an object keyed by numeric id) and mutated
//! only through [`PropertyRepository::create`].

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::property::{NewProperty, Property, PropertyId, PropertyListing};
use crate::domain::value_objects::PropertySearch;
use crate::errors::DomainError;

use super::trait_::PropertyRepository;

fn ids_exhausted(reached: PropertyId) -> DomainError {
    DomainError::Internal {
        message: format!("Property ids exhausted at {}", reached),
    }
}

#[derive(Clone)]
pub struct InMemoryPropertyRepository {
    properties: Arc<RwLock<BTreeMap<PropertyId, Property>>>,
    ratings: Arc<RwLock<HashMap<PropertyId, Vec<i16>>>>,
    next_id: Arc<AtomicI32>,
}

impl Default for InMemoryPropertyRepository {
    fn default() -> Self {
        Self {
            properties: Arc::new(RwLock::new(BTreeMap::new())),
            ratings: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the mapping; new ids continue after the highest existing one
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Internal` when the highest id is `i32::MAX`,
    /// leaving no id for the next property.
    pub fn with_properties(
        properties: impl IntoIterator<Item = Property>,
    ) -> Result<Self, DomainError> {
        let properties: BTreeMap<PropertyId, Property> =
            properties.into_iter().map(|p| (p.id, p)).collect();
        let next_id = match properties.keys().next_back() {
            Some(last) => last.checked_add(1).ok_or_else(|| ids_exhausted(*last))?,
            None => 1,
        };

        Ok(Self {
            properties: Arc::new(RwLock::new(properties)),
            ratings: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(next_id)),
        })
    }

    /// Parse the fixture format: `{"1": {"title": ...}, "2": {...}}`
    ///
    /// The map key is the id of each entry. An inner `"id"` field may be
    /// present but is ignored.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let entries: BTreeMap<PropertyId, NewProperty> = serde_json::from_str(json)?;

        Self::with_properties(
            entries
                .into_iter()
                .map(|(id, details)| details.into_property(id)),
        )
        .map_err(<serde_json::Error as serde::de::Error>::custom)
    }

    /// Record a review rating for a property
    pub async fn add_rating(&self, property_id: PropertyId, rating: i16) {
        self.ratings
            .write()
            .await
            .entry(property_id)
            .or_default()
            .push(rating);
    }

    pub async fn get(&self, id: PropertyId) -> Option<Property> {
        self.properties.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.properties.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.properties.read().await.is_empty()
    }

    fn matches(search: &PropertySearch, property: &Property) -> bool {
        let details = &property.details;
        let cost = i64::from(details.cost_per_night);

        if search.owner_id.is_some_and(|owner| owner != details.owner_id) {
            return false;
        }
        if let Some(city) = search.city_filter() {
            if !details.city.to_lowercase().contains(&city.to_lowercase()) {
                return false;
            }
        }
        if search.minimum_price_cents().is_some_and(|min| cost < min) {
            return false;
        }
        if search.maximum_price_cents().is_some_and(|max| cost > max) {
            return false;
        }
        true
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn search(
        &self,
        search: &PropertySearch,
        limit: u32,
    ) -> Result<Vec<PropertyListing>, DomainError> {
        let properties = self.properties.read().await;
        let ratings = self.ratings.read().await;

        let mut listings = Vec::new();
        for property in properties.values().filter(|p| Self::matches(search, p)) {
            let qualifying: Vec<f64> = ratings
                .get(&property.id)
                .into_iter()
                .flatten()
                .map(|&r| f64::from(r))
                .filter(|&r| search.minimum_rating.map_or(true, |min| r >= min))
                .collect();

            // A rating filter drops properties without a qualifying review
            if search.minimum_rating.is_some() && qualifying.is_empty() {
                continue;
            }

            let average_rating = if qualifying.is_empty() {
                None
            } else {
                Some(qualifying.iter().sum::<f64>() / qualifying.len() as f64)
            };

            listings.push(PropertyListing {
                property: property.clone(),
                average_rating,
            });
        }

        listings.sort_by_key(|l| (l.property.cost_per_night(), l.property.id));
        listings.truncate(limit as usize);
        Ok(listings)
    }

    async fn create(&self, property: NewProperty) -> Result<Property, DomainError> {
        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(ids_exhausted)?;
        let property = property.into_property(id);

        self.properties.write().await.insert(id, property.clone());
        tracing::debug!(property_id = id, "Stored property in fixture mapping");

        Ok(property)
    }
}
