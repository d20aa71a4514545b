// Integration tests for the PG-Connect geo core pipeline

use chrono::Utc;
use pgconnect::core::{
    distance::haversine_distance, geo_index::PropertyGeoIndex, ranker::rank_nearby_colleges,
    search::filter_and_rank,
};
use pgconnect::models::{College, CollegeType, Property, SearchCriteria};
use rand::{Rng, SeedableRng};
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

fn pune_directory() -> Vec<College> {
    vec![
        create_college("Akurdi", 18.6465, 73.7599),
        create_college("Bibwewadi", 18.4642, 73.8677),
        create_college("Shivajinagar", 18.5293, 73.8565),
        create_college("Lavale", 18.5290, 73.7290),
        create_college("Nigdi", 18.6517, 73.7615),
    ]
}

#[test]
fn test_write_pipeline_annotates_and_indexes() {
    // Simulates a property write: rank nearby colleges, index the position
    let colleges = pune_directory();
    let index = PropertyGeoIndex::new();

    let property = create_property("Akurdi PG", 18.6490, 73.7620, 8000.0);
    let nearby = rank_nearby_colleges(property.latitude, property.longitude, &colleges);
    index.upsert(property.id, property.latitude, property.longitude);

    assert_eq!(nearby.len(), 5);
    assert!(nearby.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
    assert_eq!(nearby[0].college_name, "Nigdi");
    assert_eq!(nearby[1].college_name, "Akurdi");

    // The indexed property is visible around its own coordinates
    assert_eq!(index.query_radius(18.6490, 73.7620, 1.0), vec![property.id]);
}

#[test]
fn test_radius_search_is_exact_at_five_km() {
    let college = create_college("Akurdi", 18.6465, 73.7599);
    let index = PropertyGeoIndex::new();

    let properties: Vec<Property> = (0..200)
        .map(|i| {
            // Ring of properties from ~0 to ~20km around the college
            let angle = (i as f64) * 0.314;
            let radius_deg = (i as f64) * 0.001;
            create_property(
                &format!("PG {}", i),
                18.6465 + radius_deg * angle.cos(),
                73.7599 + radius_deg * angle.sin(),
                5000.0 + i as f64,
            )
        })
        .collect();

    for p in &properties {
        index.upsert(p.id, p.latitude, p.longitude);
    }

    let hits = index.query_radius(college.latitude, college.longitude, 5.0);

    for p in &properties {
        let distance = haversine_distance(college.latitude, college.longitude, p.latitude, p.longitude);
        if distance <= 5.0 {
            assert!(hits.contains(&p.id), "false negative at {:.3}km", distance);
        } else {
            assert!(!hits.contains(&p.id), "false positive at {:.3}km", distance);
        }
    }
}

#[test]
fn test_index_matches_brute_force_on_random_sets() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let index = PropertyGeoIndex::new();

    let entries: Vec<(Uuid, f64, f64)> = (0..300)
        .map(|_| {
            let lat = rng.gen_range(-60.0..60.0);
            let lon = rng.gen_range(-179.0..179.0);
            let id = Uuid::new_v4();
            index.upsert(id, lat, lon);
            (id, lat, lon)
        })
        .collect();

    for _ in 0..30 {
        let center_lat = rng.gen_range(-60.0..60.0);
        let center_lon = rng.gen_range(-170.0..170.0);
        let radius_km = rng.gen_range(1.0..500.0);

        let mut indexed = index.query_radius(center_lat, center_lon, radius_km);
        let mut expected: Vec<Uuid> = entries
            .iter()
            .filter(|&&(_, lat, lon)| {
                haversine_distance(center_lat, center_lon, lat, lon) <= radius_km
            })
            .map(|&(id, _, _)| id)
            .collect();

        indexed.sort();
        expected.sort();
        assert_eq!(indexed, expected);
    }
}

#[test]
fn test_deleted_property_never_returned() {
    let index = PropertyGeoIndex::new();
    let keep = Uuid::new_v4();
    let drop = Uuid::new_v4();

    index.upsert(keep, 18.6490, 73.7620);
    index.upsert(drop, 18.6491, 73.7621);
    index.remove(drop);

    // Sweep a range of radii over the region
    for radius_km in [0.1, 1.0, 10.0, 100.0, 10000.0] {
        let hits = index.query_radius(18.6490, 73.7620, radius_km);
        assert!(!hits.contains(&drop));
    }
    assert!(index.query_radius(18.6490, 73.7620, 1.0).contains(&keep));
}

#[test]
fn test_end_to_end_anchored_search() {
    let colleges = pune_directory();
    let college = colleges[0].clone(); // Akurdi
    let index = PropertyGeoIndex::new();

    let near_cheap = create_property("Near cheap", 18.6490, 73.7620, 4000.0);
    let near_pricey = create_property("Near pricey", 18.6500, 73.7650, 12000.0);
    let far = create_property("Far", 18.4642, 73.8677, 4000.0); // ~23km away

    let properties = vec![near_cheap.clone(), near_pricey.clone(), far.clone()];
    for p in &properties {
        index.upsert(p.id, p.latitude, p.longitude);
    }

    // Radius clause against the index, then attribute filters
    let ids = index.query_radius(college.latitude, college.longitude, 5.0);
    let candidates: Vec<Property> = properties
        .iter()
        .filter(|p| ids.contains(&p.id))
        .cloned()
        .collect();

    let criteria = SearchCriteria {
        college_id: Some(college.id),
        max_distance_km: Some(5.0),
        max_price: Some(5000.0),
        ..Default::default()
    };
    let result = filter_and_rank(candidates, &criteria, Some(&college));

    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].property.title, "Near cheap");

    let annotated = result.results[0].distance_from_college.unwrap();
    let true_distance = haversine_distance(
        college.latitude,
        college.longitude,
        near_cheap.latitude,
        near_cheap.longitude,
    );
    assert!((annotated - true_distance).abs() < 0.01);
}

#[test]
fn test_anchored_results_sorted_ascending() {
    let college = create_college("Shivajinagar", 18.5293, 73.8565);

    let candidates = vec![
        create_property("C", 18.5600, 73.8600, 1.0),
        create_property("A", 18.5295, 73.8566, 1.0),
        create_property("B", 18.5400, 73.8570, 1.0),
    ];

    let result = filter_and_rank(candidates, &SearchCriteria::default(), Some(&college));

    let titles: Vec<&str> = result
        .results
        .iter()
        .map(|r| r.property.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "B", "C"]);

    let distances: Vec<f64> = result
        .results
        .iter()
        .map(|r| r.distance_from_college.unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_ranker_against_known_distances() {
    let colleges = pune_directory();
    let ranked = rank_nearby_colleges(18.6490, 73.7620, &colleges);

    let expected: Vec<(&str, f64)> = vec![
        ("Nigdi", 0.30),
        ("Akurdi", 0.36),
        ("Lavale", 13.79),
        ("Shivajinagar", 16.62),
        ("Bibwewadi", 23.38),
    ];

    for (entry, (name, distance_km)) in ranked.iter().zip(expected) {
        assert_eq!(entry.college_name, name);
        assert_eq!(entry.distance_km, distance_km);
    }
}
