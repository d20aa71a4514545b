use crate::core::distance::{haversine_distance, round_to_places};
use crate::models::{College, NearbyCollege};

/// Maximum number of nearby colleges cached on a property
pub const MAX_NEARBY_COLLEGES: usize = 5;

/// Rank colleges by great-circle distance from a property's coordinates
///
/// Computes the distance to every college in the supplied directory snapshot,
/// sorts ascending and truncates to the closest [`MAX_NEARBY_COLLEGES`].
/// Sorting happens at full precision; the 2dp rounding is applied only when
/// building the output entries so ties are not manufactured by rounding.
/// The stable sort keeps directory order for exact ties.
///
/// The full scan is O(C) per call, which is fine while the directory holds
/// tens of colleges. An index would be needed before that assumption breaks.
pub fn rank_nearby_colleges(latitude: f64, longitude: f64, colleges: &[College]) -> Vec<NearbyCollege> {
    let mut ranked: Vec<(f64, &College)> = colleges
        .iter()
        .map(|college| {
            let distance_km =
                haversine_distance(latitude, longitude, college.latitude, college.longitude);
            (distance_km, college)
        })
        .collect();

    ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(MAX_NEARBY_COLLEGES);

    ranked
        .into_iter()
        .map(|(distance_km, college)| NearbyCollege {
            college_id: college.id,
            college_name: college.name.clone(),
            distance_km: round_to_places(distance_km, 2),
        })
        .collect()
}
