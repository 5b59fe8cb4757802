use actix_web::{HttpResponse, Result, web};
use sqlx::PgPool;

use camp_services::*;

/// Lists all activities with their signups
pub async fn list_activities(pool: web::Data<PgPool>) -> Result<HttpResponse, CampError> {
    let activity_service = ActivityService::new(pool.get_ref().clone());
    let activities = activity_service.list_activities().await?;

    Ok(HttpResponse::Ok().json(activities))
}

/// Deletes an activity and its signups, returning 204 No Content.
///
/// Mounted for both GET and DELETE on `/activities/{id}`: existing clients read
/// that path expecting the removal.
pub async fn delete_activity(
    pool: web::Data<PgPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, CampError> {
    let activity_id = path.into_inner();
    let activity_service = ActivityService::new(pool.get_ref().clone());
    activity_service.delete_activity(activity_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
