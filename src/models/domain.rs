use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollegeType {
    University,
    College,
    Institute,
}

impl Default for CollegeType {
    fn default() -> Self {
        CollegeType::College
    }
}

impl CollegeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollegeType::University => "University",
            CollegeType::College => "College",
            CollegeType::Institute => "Institute",
        }
    }

    /// Parse a stored type name, falling back to the default for unknown values
    pub fn parse(value: &str) -> Self {
        match value {
            "University" => CollegeType::University,
            "Institute" => CollegeType::Institute,
            _ => CollegeType::College,
        }
    }
}

/// A college entry in the directory
///
/// Colleges are created by administrative writes and read by the nearby-college
/// ranker and the search pipeline. They are never cascaded into the
/// `nearbyColleges` entries that reference them; those are a point-in-time cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "type", default)]
    pub college_type: CollegeType,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// GeoJSON-ordered point, always derived from a property's latitude/longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Denormalized nearby-college entry stored on a property
///
/// Distances are rounded to two decimals when the entry is built; the ranker
/// sorts on full precision first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyCollege {
    #[serde(rename = "collegeId")]
    pub college_id: Uuid,
    #[serde(rename = "collegeName")]
    pub college_name: String,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}

/// A review left by a user on a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    #[serde(rename = "userName", default)]
    pub user_name: Option<String>,
    pub rating: i16,
    #[serde(default)]
    pub comment: String,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A property listing with its geospatial annotations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "geoPoint")]
    pub geo_point: GeoPoint,
    #[serde(rename = "nearbyColleges", default)]
    pub nearby_colleges: Vec<NearbyCollege>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(rename = "tenantType", default)]
    pub tenant_type: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(rename = "ownerId", default)]
    pub owner_id: Option<Uuid>,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    #[serde(rename = "totalReviews")]
    pub total_reviews: i32,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Property {
    /// Derive the GeoJSON point for a coordinate pair
    pub fn derive_geo_point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            lon: longitude,
            lat: latitude,
        }
    }
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Parsed search criteria applied as a conjunction of predicates
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub college_id: Option<Uuid>,
    pub max_distance_km: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub tenant_type: Option<String>,
    pub services: Vec<String>,
}

impl SearchCriteria {
    /// Parse a comma-separated services query parameter
    pub fn parse_services(raw: Option<&str>) -> Vec<String> {
        raw.map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
    }
}
