//! Booking service implementation

use std::sync::Arc;

use crate::domain::entities::property::{NewProperty, Property, PropertyListing};
use crate::domain::entities::reservation::ReservationDetail;
use crate::domain::entities::user::{NewUser, User, UserId};
use crate::domain::value_objects::{PropertySearch, DEFAULT_LIMIT};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{PropertyRepository, ReservationRepository, UserRepository};

/// Data access context for users, reservations and properties
///
/// Constructed once at startup from explicitly provided repositories and
/// shared by reference; tests build one per case from in-memory repositories.
pub struct BookingService<U, R, P>
where
    U: UserRepository,
    R: ReservationRepository,
    P: PropertyRepository,
{
    /// User repository for account lookups and registration
    user_repository: Arc<U>,
    /// Reservation repository for guest listings
    reservation_repository: Arc<R>,
    /// Property repository for search and creation
    property_repository: Arc<P>,
}

impl<U, R, P> Clone for BookingService<U, R, P>
where
    U: UserRepository,
    R: ReservationRepository,
    P: PropertyRepository,
{
    fn clone(&self) -> Self {
        Self {
            user_repository: Arc::clone(&self.user_repository),
            reservation_repository: Arc::clone(&self.reservation_repository),
            property_repository: Arc::clone(&self.property_repository),
        }
    }
}

impl<U, R, P> BookingService<U, R, P>
where
    U: UserRepository,
    R: ReservationRepository,
    P: PropertyRepository,
{
    /// Create a new booking service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user persistence
    /// * `reservation_repository` - Repository for reservation listings
    /// * `property_repository` - Repository for property search and creation
    pub fn new(
        user_repository: Arc<U>,
        reservation_repository: Arc<R>,
        property_repository: Arc<P>,
    ) -> Self {
        Self {
            user_repository,
            reservation_repository,
            property_repository,
        }
    }

    /// Get a single user given their email
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - A user with exactly this email exists
    /// * `Ok(None)` - No such user
    /// * `Err(DomainError)` - The lookup failed
    pub async fn get_user_with_email(&self, email: &str) -> DomainResult<Option<User>> {
        tracing::debug!(email, "Looking up user by email");

        self.user_repository
            .find_by_email(email)
            .await
            .inspect_err(|e| tracing::error!(email, error = %e, "User lookup by email failed"))
    }

    /// Get a single user given their id
    ///
    /// Same contract as [`BookingService::get_user_with_email`].
    pub async fn get_user_with_id(&self, id: UserId) -> DomainResult<Option<User>> {
        tracing::debug!(user_id = id, "Looking up user by id");

        self.user_repository
            .find_by_id(id)
            .await
            .inspect_err(|e| tracing::error!(user_id = id, error = %e, "User lookup by id failed"))
    }

    /// Get a user that must exist, e.g. the owner of the current session
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` when no user has this id.
    pub async fn require_user_with_id(&self, id: UserId) -> DomainResult<User> {
        self.get_user_with_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User {}", id)))
    }

    /// Add a new user
    ///
    /// The password is stored as given. A duplicate email is reported as
    /// `DomainError::ConstraintViolation`.
    pub async fn add_user(&self, user: NewUser) -> DomainResult<User> {
        user.validate()?;

        let created = self.user_repository.create(user).await.inspect_err(|e| {
            if e.is_constraint_violation() {
                tracing::warn!(error = %e, "Rejected user registration");
            } else {
                tracing::error!(error = %e, "Failed to add user");
            }
        })?;

        tracing::info!(user_id = created.id, "User added");
        Ok(created)
    }

    /// Get the reservations of a guest, at most `limit` (default 10)
    pub async fn get_all_reservations(
        &self,
        guest_id: UserId,
        limit: Option<u32>,
    ) -> DomainResult<Vec<ReservationDetail>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        tracing::debug!(guest_id, limit, "Listing reservations");

        self.reservation_repository
            .find_by_guest(guest_id, limit)
            .await
            .inspect_err(|e| tracing::error!(guest_id, error = %e, "Reservation listing failed"))
    }

    /// Search properties, cheapest first, at most `limit` (default 10)
    ///
    /// `minimum_rating` filters individual reviews: properties without a
    /// review at or above it are dropped, and `average_rating` is the mean of
    /// the qualifying reviews only.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a filter combination that cannot
    /// match anything, before any query is issued.
    pub async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: Option<u32>,
    ) -> DomainResult<Vec<PropertyListing>> {
        search.validate()?;

        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        tracing::debug!(?search, limit, "Searching properties");

        self.property_repository
            .search(search, limit)
            .await
            .inspect_err(|e| tracing::error!(?search, error = %e, "Property search failed"))
    }

    /// Add a property under a newly allocated sequential id
    pub async fn add_property(&self, property: NewProperty) -> DomainResult<Property> {
        let created = self
            .property_repository
            .create(property)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to add property"))?;

        tracing::info!(
            property_id = created.id,
            owner_id = created.details.owner_id,
            "Property added"
        );
        Ok(created)
    }
}
