use actix_web::{HttpResponse, Result, web};
use sqlx::PgPool;
use validator::Validate;

use camp_services::*;

/// Lists all signups with their camper and activity
pub async fn list_signups(pool: web::Data<PgPool>) -> Result<HttpResponse, CampError> {
    let signup_service = SignupService::new(pool.get_ref().clone());
    let signups = signup_service.list_signups().await?;

    Ok(HttpResponse::Ok().json(signups))
}

/// Signs a camper up to an activity and returns the full signup with 201 Created
pub async fn create_signup(
    pool: web::Data<PgPool>,
    request: web::Json<CreateSignupRequest>,
) -> Result<HttpResponse, CampError> {
    request.validate()?;

    let signup_service = SignupService::new(pool.get_ref().clone());
    let signup = signup_service.create_signup(&request).await?;

    Ok(HttpResponse::Created().json(signup))
}
