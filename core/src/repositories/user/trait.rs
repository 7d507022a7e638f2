//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User, UserId};
use crate::errors::DomainError;

/// Repository trait for User persistence operations
///
/// Implementations perform exactly one round-trip per call and never swallow
/// failures: a missing row is `Ok(None)`, a failed query is `Err(_)`.
///
/// # Example
/// ```no_run
/// # use lb_core::repositories::UserRepository;
/// # use lb_core::domain::entities::user::NewUser;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// let created = repo
///     .create(NewUser::new("Devin Sanders", "tristanjacobs@gmail.com", "password"))
///     .await?;
///
/// match repo.find_by_email("tristanjacobs@gmail.com").await? {
///     Some(user) => assert_eq!(user.id, created.id),
///     None => println!("User not found"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email match
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by identifier
    ///
    /// Same contract as [`UserRepository::find_by_email`].
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Insert a user and return the stored row
    ///
    /// No existence check is made beforehand; a duplicate email is reported
    /// by the store as `DomainError::ConstraintViolation`.
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;
}
