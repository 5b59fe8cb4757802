use actix_web::{HttpResponse, Result};

/// Landing page of the API
pub async fn home() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().content_type("text/plain").body("Camping Fun"))
}

/// Liveness probe
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().body("OK"))
}
