//! PostgreSQL implementation of the PropertyRepository trait.
//!
//! Searches run against PostgreSQL with review ratings aggregated per
//! property. Created properties go to the in-memory fixture mapping and are
//! not written to the database.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Postgres, QueryBuilder, Row};

use lb_core::domain::entities::property::{NewProperty, Property, PropertyListing};
use lb_core::domain::value_objects::PropertySearch;
use lb_core::errors::DomainError;
use lb_core::repositories::{InMemoryPropertyRepository, PropertyRepository};

use crate::database::error::{decode_error, map_query_error};

const SEARCH_SELECT: &str = "SELECT properties.id, properties.owner_id, properties.title, \
     properties.description, properties.thumbnail_photo_url, properties.cover_photo_url, \
     properties.cost_per_night, properties.parking_spaces, properties.number_of_bathrooms, \
     properties.number_of_bedrooms, properties.country, properties.street, properties.city, \
     properties.province, properties.post_code, properties.active, \
     AVG(property_reviews.rating)::float8 AS average_rating \
     FROM properties \
     LEFT JOIN property_reviews ON properties.id = property_reviews.property_id";

/// Appends filter predicates, emitting `WHERE` before the first and `AND`
/// before every later one.
struct Predicates<'q> {
    builder: QueryBuilder<'q, Postgres>,
    has_where: bool,
}

impl<'q> Predicates<'q> {
    fn new(base: &str) -> Self {
        Self {
            builder: QueryBuilder::new(base),
            has_where: false,
        }
    }

    fn push(&mut self, clause: &str) -> &mut QueryBuilder<'q, Postgres> {
        self.builder.push(if self.has_where { " AND " } else { " WHERE " });
        self.has_where = true;
        self.builder.push(clause)
    }

    fn finish(self) -> QueryBuilder<'q, Postgres> {
        self.builder
    }
}

/// Build the property search statement for `search`
pub fn build_search_query(search: &PropertySearch, limit: u32) -> QueryBuilder<'static, Postgres> {
    let mut predicates = Predicates::new(SEARCH_SELECT);

    if let Some(owner_id) = search.owner_id {
        predicates
            .push("properties.owner_id = ")
            .push_bind(owner_id);
    }

    if let Some(city) = search.city_filter() {
        predicates
            .push("properties.city ILIKE ")
            .push_bind(format!("%{}%", city));
    }

    match (search.minimum_price_cents(), search.maximum_price_cents()) {
        (Some(minimum), Some(maximum)) => {
            predicates
                .push("properties.cost_per_night BETWEEN ")
                .push_bind(minimum)
                .push(" AND ")
                .push_bind(maximum);
        }
        (Some(minimum), None) => {
            predicates
                .push("properties.cost_per_night >= ")
                .push_bind(minimum);
        }
        (None, Some(maximum)) => {
            predicates
                .push("properties.cost_per_night <= ")
                .push_bind(maximum);
        }
        (None, None) => {}
    }

    if let Some(rating) = search.minimum_rating {
        predicates
            .push("property_reviews.rating >= ")
            .push_bind(rating);
    }

    let mut builder = predicates.finish();
    builder
        .push(" GROUP BY properties.id ORDER BY properties.cost_per_night, properties.id LIMIT ")
        .push_bind(i64::from(limit));
    builder
}

/// PostgreSQL search plus fixture-backed creation
pub struct PostgresPropertyRepository {
    pool: PgPool,
    fixtures: InMemoryPropertyRepository,
}

impl PostgresPropertyRepository {
    pub fn new(pool: PgPool, fixtures: InMemoryPropertyRepository) -> Self {
        Self { pool, fixtures }
    }

    fn text(row: &PgRow, column: &str) -> Result<String, DomainError> {
        row.try_get::<Option<String>, _>(column)
            .map(Option::unwrap_or_default)
            .map_err(|e| decode_error(column, e))
    }

    fn int(row: &PgRow, column: &str) -> Result<i32, DomainError> {
        row.try_get::<Option<i32>, _>(column)
            .map(Option::unwrap_or_default)
            .map_err(|e| decode_error(column, e))
    }

    fn row_to_listing(row: &PgRow) -> Result<PropertyListing, DomainError> {
        let details = NewProperty {
            owner_id: row
                .try_get("owner_id")
                .map_err(|e| decode_error("owner_id", e))?,
            title: Self::text(row, "title")?,
            description: Self::text(row, "description")?,
            thumbnail_photo_url: Self::text(row, "thumbnail_photo_url")?,
            cover_photo_url: Self::text(row, "cover_photo_url")?,
            cost_per_night: row
                .try_get("cost_per_night")
                .map_err(|e| decode_error("cost_per_night", e))?,
            parking_spaces: Self::int(row, "parking_spaces")?,
            number_of_bathrooms: Self::int(row, "number_of_bathrooms")?,
            number_of_bedrooms: Self::int(row, "number_of_bedrooms")?,
            country: Self::text(row, "country")?,
            street: Self::text(row, "street")?,
            city: Self::text(row, "city")?,
            province: Self::text(row, "province")?,
            post_code: Self::text(row, "post_code")?,
            active: row
                .try_get::<Option<bool>, _>("active")
                .map_err(|e| decode_error("active", e))?
                .unwrap_or(true),
        };

        let id = row.try_get("id").map_err(|e| decode_error("id", e))?;

        Ok(PropertyListing {
            property: details.into_property(id),
            average_rating: row
                .try_get("average_rating")
                .map_err(|e| decode_error("average_rating", e))?,
        })
    }
}

#[async_trait]
impl PropertyRepository for PostgresPropertyRepository {
    async fn search(
        &self,
        search: &PropertySearch,
        limit: u32,
    ) -> Result<Vec<PropertyListing>, DomainError> {
        let mut query = build_search_query(search, limit);
        tracing::debug!(sql = query.sql(), "Running property search");

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_query_error("Failed to search properties", e))?;

        rows.iter().map(Self::row_to_listing).collect()
    }

    async fn create(&self, property: NewProperty) -> Result<Property, DomainError> {
        self.fixtures.create(property).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAIL: &str = " GROUP BY properties.id ORDER BY properties.cost_per_night, properties.id LIMIT ";

    #[test]
    fn test_unfiltered_query_has_no_where_clause() {
        let query = build_search_query(&PropertySearch::new(), 10);

        assert!(!query.sql().contains("WHERE"));
        assert_eq!(query.sql(), format!("{}{}$1", SEARCH_SELECT, TAIL));
    }

    #[test]
    fn test_price_range_alone_starts_with_where() {
        let query = build_search_query(&PropertySearch::new().price_between(50, 150), 5);

        assert_eq!(
            query.sql(),
            format!(
                "{} WHERE properties.cost_per_night BETWEEN $1 AND $2{}$3",
                SEARCH_SELECT, TAIL
            )
        );
    }

    #[test]
    fn test_later_predicates_are_joined_with_and() {
        let search = PropertySearch::new()
            .owned_by(3)
            .in_city("Vancouver")
            .price_between(50, 150)
            .min_rating(4.0);
        let query = build_search_query(&search, 10);
        let sql = query.sql();

        assert_eq!(sql.matches(" WHERE ").count(), 1);
        assert!(sql.contains(
            " WHERE properties.owner_id = $1 \
             AND properties.city ILIKE $2 \
             AND properties.cost_per_night BETWEEN $3 AND $4 \
             AND property_reviews.rating >= $5"
        ));
        assert!(sql.ends_with(&format!("{}$6", TAIL)));
    }

    #[test]
    fn test_rating_without_price_still_gets_where() {
        let query = build_search_query(&PropertySearch::new().min_rating(4.0), 10);

        assert!(query.sql().contains(" WHERE property_reviews.rating >= $1 GROUP BY"));
    }

    #[test]
    fn test_open_ended_price_bounds() {
        let minimum = build_search_query(&PropertySearch::new().min_price(80), 10);
        assert!(minimum.sql().contains(" WHERE properties.cost_per_night >= $1"));

        let maximum = build_search_query(&PropertySearch::new().owned_by(1).max_price(80), 10);
        assert!(maximum
            .sql()
            .contains(" WHERE properties.owner_id = $1 AND properties.cost_per_night <= $2"));
    }
}
