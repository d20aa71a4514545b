// Route exports
pub mod colleges;
pub mod properties;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(colleges::configure)
            .configure(properties::configure),
    )
    .route("/health", web::get().to(properties::health_check));
}
