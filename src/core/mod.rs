// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod geo_index;
pub mod ranker;
pub mod search;

pub use distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box, round_to_places};
pub use filters::{matches_criteria, matches_price_bounds, matches_services, matches_tenant_type};
pub use geo_index::PropertyGeoIndex;
pub use ranker::{rank_nearby_colleges, MAX_NEARBY_COLLEGES};
pub use search::{filter_and_rank, SearchResult, DEFAULT_RADIUS_KM};
