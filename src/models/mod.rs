// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BoundingBox, College, CollegeType, GeoPoint, NearbyCollege, Property, Review, SearchCriteria,
};
pub use requests::{
    AddReviewRequest, CreateCollegeRequest, CreatePropertyRequest, ProximityQuery, SearchQuery,
    UpdatePropertyRequest,
};
pub use responses::{ErrorResponse, HealthResponse, PropertySearchResult};
