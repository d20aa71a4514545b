//! PG-Connect Geo Core - geospatial service for PG accommodation listings
//!
//! This library provides the geospatial core of the PG-Connect marketplace:
//! nearest-college annotation on every property write and radius-filtered
//! property search over a grid-bucketed spatial index.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{
    distance::{calculate_bounding_box, haversine_distance, round_to_places},
    geo_index::PropertyGeoIndex,
    ranker::{rank_nearby_colleges, MAX_NEARBY_COLLEGES},
    search::filter_and_rank,
};
pub use models::{
    College, CollegeType, NearbyCollege, Property, PropertySearchResult, Review, SearchCriteria,
};
