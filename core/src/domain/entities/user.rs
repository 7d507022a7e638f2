//! User entity representing a registered guest or property owner.

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

pub type UserId = i32;

/// A user row as stored in the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Database-assigned identifier
    pub id: UserId,

    pub name: String,

    /// Unique, used as the login lookup key
    pub email: String,

    /// Stored exactly as supplied
    pub password: String,
}

/// Input for creating a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks that every required field is present
    pub fn validate(&self) -> DomainResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }

    /// Attach a database-assigned identifier
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}
