use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// Custom error type for camp operations
#[derive(thiserror::Error, Debug)]
pub enum CampError {
    /// The named entity (or collection) does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The request could not be applied; the reason is logged but never returned to the caller
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database error outside of a write
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CampError {
    /// Collapses any failure during a write into a validation error.
    pub fn rejected_write(err: impl std::fmt::Display) -> Self {
        CampError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CampError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CampError::Validation(errors.to_string())
    }
}

impl ResponseError for CampError {
    fn status_code(&self) -> StatusCode {
        match self {
            CampError::NotFound(_) => StatusCode::NOT_FOUND,
            CampError::Validation(_) => StatusCode::BAD_REQUEST,
            CampError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            CampError::NotFound(entity) => HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("{} not found", entity)
            })),
            CampError::Validation(reason) => {
                log::warn!("⚠️ Rejected request: {}", reason);
                HttpResponse::BadRequest().json(serde_json::json!({
                    "errors": ["validation errors"]
                }))
            }
            CampError::Database(e) => {
                log::error!("❌ Database error: {}", e);
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "An internal error occurred"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(error: CampError) -> (StatusCode, serde_json::Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_not_found_names_the_entity() {
        let (status, body) = body_json(CampError::NotFound("Camper")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Camper not found"}));
    }

    #[actix_web::test]
    async fn test_validation_hides_the_reason() {
        let (status, body) =
            body_json(CampError::Validation("age out of range".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"errors": ["validation errors"]}));
    }

    #[actix_web::test]
    async fn test_database_error_is_internal() {
        let (status, body) = body_json(CampError::Database(sqlx::Error::RowNotFound)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[test]
    fn test_validation_errors_are_not_prefixed_twice() {
        let mut errors = validator::ValidationErrors::new();
        errors.add(
            "age",
            validator::ValidationError::new("range")
                .with_message("Age must be between 8 and 18".into()),
        );
        let expected = format!("Validation error: {}", errors);

        assert_eq!(CampError::from(errors).to_string(), expected);
    }

    #[test]
    fn test_rejected_write_is_validation() {
        let error = CampError::rejected_write(sqlx::Error::RowNotFound);
        assert!(matches!(error, CampError::Validation(_)));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }
}
