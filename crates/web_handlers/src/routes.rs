use actix_web::{error, web};

use crate::*;
use camp_services::CampError;

/// Registers every route of the API along with the extractor error policy.
///
/// Malformed or ill-typed JSON bodies become validation errors, and path IDs
/// that are not integers become not-found errors.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .route("/", web::get().to(home))
        .route("/health", web::get().to(health))
        .service(
            web::resource("/campers")
                .route(web::get().to(list_campers))
                .route(web::post().to(create_camper)),
        )
        .service(
            web::resource("/campers/{id}")
                .route(web::get().to(get_camper))
                .route(web::patch().to(update_camper)),
        )
        .service(web::resource("/activities").route(web::get().to(list_activities)))
        .service(
            web::resource("/activities/{id}")
                .route(web::get().to(delete_activity))
                .route(web::delete().to(delete_activity)),
        )
        .service(
            web::resource("/signups")
                .route(web::get().to(list_signups))
                .route(web::post().to(create_signup)),
        );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        error::Error::from(CampError::Validation(format!("Invalid JSON body: {}", err)))
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        log::debug!("Unmatched path {}: {}", req.path(), err);
        error::Error::from(CampError::NotFound("Resource"))
    })
}
