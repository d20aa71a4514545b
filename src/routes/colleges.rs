use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

use crate::models::{CreateCollegeRequest, ErrorResponse};
use crate::routes::properties::{directory_error_response, AppState};

/// Configure all college-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/colleges", web::post().to(create_college))
        .route("/colleges", web::get().to(list_colleges))
        .route("/colleges/{id}", web::get().to(get_college));
}

/// Create college endpoint (administrative)
///
/// POST /api/colleges
async fn create_college(
    state: web::Data<AppState>,
    req: web::Json<CreateCollegeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("validation failed for create_college: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.directory.insert(req.into_inner()).await {
        Ok(college) => HttpResponse::Created().json(college),
        Err(e) => directory_error_response(e),
    }
}

/// List colleges endpoint
///
/// GET /api/colleges
async fn list_colleges(state: web::Data<AppState>) -> impl Responder {
    match state.directory.list_all().await {
        Ok(colleges) => HttpResponse::Ok().json(colleges.as_slice()),
        Err(e) => directory_error_response(e),
    }
}

/// Get single college endpoint
///
/// GET /api/colleges/{id}
async fn get_college(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match state.directory.get(path.into_inner()).await {
        Ok(college) => HttpResponse::Ok().json(college),
        Err(e) => directory_error_response(e),
    }
}
