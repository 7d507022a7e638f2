//! Value objects carried into repository queries.

pub mod property_search;

pub use property_search::{PropertySearch, CENTS_PER_UNIT, DEFAULT_LIMIT};
