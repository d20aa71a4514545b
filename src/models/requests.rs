use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::CollegeType;

/// Administrative request to add a college to the directory
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCollegeRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "type", default)]
    pub college_type: Option<CollegeType>,
}

/// Request to create a property listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[serde(rename = "tenantType", default)]
    pub tenant_type: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "ownerId", default)]
    pub owner_id: Option<Uuid>,
}

/// Partial update of a property listing
///
/// Coordinates are re-validated and the nearby-colleges cache recomputed only
/// when latitude/longitude actually change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePropertyRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[serde(rename = "tenantType", default)]
    pub tenant_type: Option<String>,
    #[serde(default)]
    pub services: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// Request to add a review to a property
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddReviewRequest {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: i16,
    #[serde(default)]
    pub comment: String,
}

/// Query parameters accepted by the property search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "collegeId", default)]
    pub college_id: Option<Uuid>,
    #[serde(rename = "maxDistance", default)]
    pub max_distance: Option<f64>,
    #[serde(rename = "minPrice", default)]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice", default)]
    pub max_price: Option<f64>,
    #[serde(rename = "tenantType", default)]
    pub tenant_type: Option<String>,
    /// Comma-separated service names, match-any semantics
    #[serde(default)]
    pub services: Option<String>,
}

/// Query parameters for the by-college proximity endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ProximityQuery {
    #[serde(default)]
    pub distance: Option<f64>,
}
