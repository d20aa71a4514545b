use crate::models::{Property, SearchCriteria};

/// Check a property against the optional price bounds, both inclusive
#[inline]
pub fn matches_price_bounds(property: &Property, min_price: Option<f64>, max_price: Option<f64>) -> bool {
    if let Some(min) = min_price {
        if property.price < min {
            return false;
        }
    }
    if let Some(max) = max_price {
        if property.price > max {
            return false;
        }
    }
    true
}

/// Exact tenant-type match when a type was requested
#[inline]
pub fn matches_tenant_type(property: &Property, tenant_type: Option<&str>) -> bool {
    match tenant_type {
        Some(wanted) => property.tenant_type == wanted,
        None => true,
    }
}

/// Match-any service intersection
///
/// A property qualifies when its service set intersects the requested set.
/// An empty request matches everything.
#[inline]
pub fn matches_services(property: &Property, requested: &[String]) -> bool {
    if requested.is_empty() {
        return true;
    }
    property
        .services
        .iter()
        .any(|service| requested.iter().any(|wanted| wanted == service))
}

/// Conjunction of all attribute predicates for a search
pub fn matches_criteria(property: &Property, criteria: &SearchCriteria) -> bool {
    matches_price_bounds(property, criteria.min_price, criteria.max_price)
        && matches_tenant_type(property, criteria.tenant_type.as_deref())
        && matches_services(property, &criteria.services)
}
