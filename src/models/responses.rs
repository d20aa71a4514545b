use serde::{Deserialize, Serialize};

use crate::models::domain::Property;

/// A property returned by the search endpoints
///
/// `distanceFromCollege` is present only when the search was anchored on a
/// college; results are then sorted ascending by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySearchResult {
    #[serde(flatten)]
    pub property: Property,
    #[serde(
        rename = "distanceFromCollege",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub distance_from_college: Option<f64>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
