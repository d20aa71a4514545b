use crate::core::distance::{haversine_distance, round_to_places};
use crate::core::filters::matches_criteria;
use crate::models::{College, Property, PropertySearchResult, SearchCriteria};

/// Default search radius in kilometers when a college anchor is given
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Result of the search pipeline
#[derive(Debug)]
pub struct SearchResult {
    pub results: Vec<PropertySearchResult>,
    pub total_candidates: usize,
}

/// Apply attribute filters and distance annotation to a candidate set
///
/// Candidates arrive in persistence order (the radius pre-filter, when a
/// college anchor is present, happens upstream against the geo index).
/// Attribute predicates are applied as a conjunction. Anchored searches
/// annotate each hit with `distance_from_college` (2dp at serialization) and
/// sort ascending by the full-precision distance; unanchored searches keep
/// persistence order.
pub fn filter_and_rank(
    candidates: Vec<Property>,
    criteria: &SearchCriteria,
    anchor: Option<&College>,
) -> SearchResult {
    let total_candidates = candidates.len();

    let mut annotated: Vec<(Option<f64>, PropertySearchResult)> = candidates
        .into_iter()
        .filter(|property| matches_criteria(property, criteria))
        .map(|property| {
            let distance_km = anchor.map(|college| {
                haversine_distance(
                    college.latitude,
                    college.longitude,
                    property.latitude,
                    property.longitude,
                )
            });
            let result = PropertySearchResult {
                distance_from_college: distance_km.map(|d| round_to_places(d, 2)),
                property,
            };
            (distance_km, result)
        })
        .collect();

    if anchor.is_some() {
        annotated.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    }

    SearchResult {
        results: annotated.into_iter().map(|(_, result)| result).collect(),
        total_candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CollegeType;
    use chrono::Utc;
    use uuid::Uuid;

    fn create_college(name: &str, lat: f64, lon: f64) -> College {
        College {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: format!("{}, Pune", name),
            location: format!("{}, Pune", name),
            latitude: lat,
            longitude: lon,
            image: None,
            college_type: CollegeType::College,
            created_at: Utc::now(),
        }
    }

    fn create_property(title: &str, lat: f64, lon: f64, price: f64) -> Property {
        Property {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            price,
            location: "Pune".to_string(),
            latitude: lat,
            longitude: lon,
            geo_point: Property::derive_geo_point(lat, lon),
            nearby_colleges: vec![],
            images: vec![],
            tenant_type: "Boys".to_string(),
            services: vec!["WiFi".to_string()],
            owner_id: None,
            average_rating: 0.0,
            total_reviews: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_anchored_search_sorts_by_distance() {
        let college = create_college("Akurdi", 18.6465, 73.7599);
        let candidates = vec![
            create_property("Far", 18.7000, 73.8000, 8000.0),
            create_property("Near", 18.6490, 73.7620, 8000.0),
        ];

        let result = filter_and_rank(candidates, &SearchCriteria::default(), Some(&college));

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.results[0].property.title, "Near");
        assert_eq!(result.results[1].property.title, "Far");

        // Every hit carries a 2dp distance annotation
        for hit in &result.results {
            let distance = hit.distance_from_college.unwrap();
            let rescaled = distance * 100.0;
            assert!((rescaled - rescaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unanchored_search_keeps_order() {
        let candidates = vec![
            create_property("First", 18.7000, 73.8000, 8000.0),
            create_property("Second", 18.6490, 73.7620, 9000.0),
        ];

        let result = filter_and_rank(candidates, &SearchCriteria::default(), None);

        assert_eq!(result.results[0].property.title, "First");
        assert_eq!(result.results[1].property.title, "Second");
        assert!(result.results[0].distance_from_college.is_none());
    }

    #[test]
    fn test_attribute_filters_apply() {
        let candidates = vec![
            create_property("Cheap", 18.6490, 73.7620, 4000.0),
            create_property("Pricey", 18.6490, 73.7620, 12000.0),
        ];

        let criteria = SearchCriteria {
            max_price: Some(5000.0),
            ..Default::default()
        };
        let result = filter_and_rank(candidates, &criteria, None);

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].property.title, "Cheap");
    }

    #[test]
    fn test_sort_uses_full_precision() {
        // Two properties whose rounded distances tie at 2dp but whose true
        // distances differ; the closer one must still come first.
        let college = create_college("Anchor", 18.0000, 73.0000);
        let near = create_property("Near", 18.0090, 73.0000, 1.0);
        let far = create_property("SlightlyFarther", 18.00905, 73.0000, 1.0);

        let result = filter_and_rank(
            vec![far.clone(), near.clone()],
            &SearchCriteria::default(),
            Some(&college),
        );

        assert_eq!(result.results[0].property.title, "Near");
    }
}
