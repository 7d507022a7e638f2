//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use lb_core::domain::entities::user::{NewUser, User, UserId};
use lb_core::errors::DomainError;
use lb_core::repositories::UserRepository;

use crate::database::error::{decode_error, map_query_error};

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(|e| decode_error("id", e))?,
            name: row.try_get("name").map_err(|e| decode_error("name", e))?,
            email: row.try_get("email").map_err(|e| decode_error("email", e))?,
            password: row
                .try_get("password")
                .map_err(|e| decode_error("password", e))?,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_query_error("Failed to find user by email", e))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_query_error("Failed to find user by id", e))?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
        "#;

        let row = sqlx::query(query)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_query_error("Failed to create user", e))?;

        Self::row_to_user(&row)
    }
}
