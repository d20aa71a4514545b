use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::geo_index::PropertyGeoIndex;
use crate::core::search::filter_and_rank;
use crate::models::{
    AddReviewRequest, College, CreatePropertyRequest, ErrorResponse, HealthResponse,
    ProximityQuery, SearchCriteria, SearchQuery, UpdatePropertyRequest,
};
use crate::services::directory::{CollegeDirectory, DirectoryError};
use crate::services::store::{PropertyStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<CollegeDirectory>,
    pub store: Arc<PropertyStore>,
    pub geo_index: Arc<PropertyGeoIndex>,
    pub default_radius_km: f64,
}

/// Configure all property-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // by-college must be registered before the {id} routes
        .route(
            "/properties/by-college/{college_id}",
            web::get().to(properties_by_college),
        )
        .route("/properties", web::post().to(create_property))
        .route("/properties", web::get().to(search_properties))
        .route("/properties/{id}", web::get().to(get_property))
        .route("/properties/{id}", web::put().to(update_property))
        .route("/properties/{id}", web::delete().to(delete_property))
        .route("/properties/{id}/reviews", web::post().to(add_review))
        .route("/properties/{id}/reviews", web::get().to(list_reviews));
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Create property endpoint
///
/// POST /api/properties
async fn create_property(
    state: web::Data<AppState>,
    req: web::Json<CreatePropertyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("validation failed for create_property: {}", errors);
        return validation_error_response(errors.to_string());
    }

    match state.store.create(req.into_inner()).await {
        Ok(property) => HttpResponse::Created().json(property),
        Err(e) => store_error_response(e),
    }
}

/// Property search endpoint
///
/// GET /api/properties?collegeId=&maxDistance=&minPrice=&maxPrice=&tenantType=&services=
async fn search_properties(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let criteria = SearchCriteria {
        college_id: query.college_id,
        max_distance_km: query.max_distance,
        min_price: query.min_price,
        max_price: query.max_price,
        tenant_type: query.tenant_type,
        services: SearchCriteria::parse_services(query.services.as_deref()),
    };

    run_search(&state, criteria).await
}

/// College-proximity endpoint
///
/// GET /api/properties/by-college/{college_id}?distance=
///
/// Radius-only search: all properties within `distance` km (default 10) of
/// the college, annotated and sorted by distance.
async fn properties_by_college(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<ProximityQuery>,
) -> impl Responder {
    let criteria = SearchCriteria {
        college_id: Some(path.into_inner()),
        max_distance_km: query.distance,
        ..Default::default()
    };

    run_search(&state, criteria).await
}

/// Shared search pipeline: resolve anchor, radius pre-filter, attribute
/// filters, distance annotation
async fn run_search(state: &web::Data<AppState>, criteria: SearchCriteria) -> HttpResponse {
    let anchor: Option<College> = match criteria.college_id {
        Some(college_id) => match state.directory.get(college_id).await {
            Ok(college) => Some(college),
            Err(e) => return directory_error_response(e),
        },
        None => None,
    };

    let candidates = match &anchor {
        Some(college) => {
            let radius_km = criteria
                .max_distance_km
                .unwrap_or(state.default_radius_km);
            let ids = state
                .geo_index
                .query_radius(college.latitude, college.longitude, radius_km);
            tracing::debug!(
                "radius query around {} ({}km) matched {} properties",
                college.name,
                radius_km,
                ids.len()
            );
            match state.store.fetch_indexed(&ids).await {
                Ok(properties) => properties,
                Err(e) => return store_error_response(e),
            }
        }
        None => match state.store.list_all().await {
            Ok(properties) => properties,
            Err(e) => return store_error_response(e),
        },
    };

    let result = filter_and_rank(candidates, &criteria, anchor.as_ref());

    tracing::info!(
        "search returned {} of {} candidates",
        result.results.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(result.results)
}

/// Get single property endpoint
///
/// GET /api/properties/{id}
async fn get_property(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.store.get(path.into_inner()).await {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(e) => store_error_response(e),
    }
}

/// Update property endpoint
///
/// PUT /api/properties/{id}
async fn update_property(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePropertyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors.to_string());
    }

    match state.store.update(path.into_inner(), req.into_inner()).await {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(e) => store_error_response(e),
    }
}

/// Delete property endpoint
///
/// DELETE /api/properties/{id}
async fn delete_property(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    let id = path.into_inner();
    match state.store.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Property deleted",
            "id": id,
        })),
        Err(e) => store_error_response(e),
    }
}

/// Add review endpoint
///
/// POST /api/properties/{id}/reviews
async fn add_review(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: web::Json<AddReviewRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors.to_string());
    }

    match state
        .store
        .add_review(path.into_inner(), req.into_inner())
        .await
    {
        Ok(property) => HttpResponse::Created().json(property),
        Err(e) => store_error_response(e),
    }
}

/// List reviews endpoint
///
/// GET /api/properties/{id}/reviews
async fn list_reviews(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.store.reviews(path.into_inner()).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => store_error_response(e),
    }
}

fn validation_error_response(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

/// Map store errors onto HTTP responses
pub(crate) fn store_error_response(err: StoreError) -> HttpResponse {
    match &err {
        StoreError::Validation(message) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: message.clone(),
            status_code: 400,
        }),
        StoreError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Property not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        StoreError::DuplicateReview { .. } => HttpResponse::Conflict().json(ErrorResponse {
            error: "Duplicate review".to_string(),
            message: "You have already reviewed this property".to_string(),
            status_code: 409,
        }),
        StoreError::Directory(inner) => directory_error_ref_response(inner),
        StoreError::IndexInconsistency(_) => {
            tracing::error!("internal invariant violation: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal error".to_string(),
                message: "Internal index inconsistency".to_string(),
                status_code: 500,
            })
        }
        StoreError::Sqlx(_) => {
            tracing::error!("database error: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal error".to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Map directory errors onto HTTP responses
pub(crate) fn directory_error_response(err: DirectoryError) -> HttpResponse {
    directory_error_ref_response(&err)
}

fn directory_error_ref_response(err: &DirectoryError) -> HttpResponse {
    match err {
        DirectoryError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "College not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        DirectoryError::DuplicateName(name) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Duplicate college name".to_string(),
            message: format!("A college named '{}' already exists", name),
            status_code: 409,
        }),
        DirectoryError::Sqlx(_) => {
            tracing::error!("database error: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal error".to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}
