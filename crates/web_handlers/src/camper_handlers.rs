use actix_web::{HttpResponse, Result, web};
use sqlx::PgPool;
use validator::Validate;

use camp_services::*;

/// Lists all campers as `{id, name, age}`.
/// An empty collection is reported as a 404 rather than an empty list.
pub async fn list_campers(pool: web::Data<PgPool>) -> Result<HttpResponse, CampError> {
    let camper_service = CamperService::new(pool.get_ref().clone());
    let campers = camper_service.list_campers().await?;

    if campers.is_empty() {
        return Err(CampError::NotFound("Campers"));
    }

    Ok(HttpResponse::Ok().json(campers))
}

/// Creates a camper and returns its full representation with 201 Created
pub async fn create_camper(
    pool: web::Data<PgPool>,
    request: web::Json<CreateCamperRequest>,
) -> Result<HttpResponse, CampError> {
    request.validate()?;

    let camper_service = CamperService::new(pool.get_ref().clone());
    let camper = camper_service.create_camper(&request).await?;

    Ok(HttpResponse::Created().json(camper))
}

/// Gets a camper by ID, including its signups
pub async fn get_camper(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, CampError> {
    let camper_id = path.into_inner();
    let camper_service = CamperService::new(pool.get_ref().clone());
    let camper = camper_service.get_camper(camper_id).await?;

    Ok(HttpResponse::Ok().json(camper))
}

/// Updates the provided fields of a camper and returns `{id, name, age}` with 202 Accepted
pub async fn update_camper(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
    request: web::Json<UpdateCamperRequest>,
) -> Result<HttpResponse, CampError> {
    let camper_id = path.into_inner();
    let camper_service = CamperService::new(pool.get_ref().clone());

    // A missing camper wins over an invalid body
    camper_service.get_camper_summary(camper_id).await?;

    request.validate()?;

    let camper = camper_service.update_camper(camper_id, &request).await?;

    Ok(HttpResponse::Accepted().json(camper))
}
