use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::error::CampError;
use crate::types::*;

const SELECT_SIGNUPS: &str = r#"
    SELECT
        s.id, s.camper_id, s.activity_id, s.time,
        c.name AS camper_name, c.age AS camper_age,
        a.name AS activity_name, a.difficulty AS activity_difficulty
    FROM signups s
    JOIN campers c ON c.id = s.camper_id
    JOIN activities a ON a.id = s.activity_id
"#;

/// Service for handling signup operations
pub struct SignupService {
    pool: PgPool,
}

impl SignupService {
    /// Creates a new instance of `SignupService` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every signup with its camper and activity
    pub async fn list_signups(&self) -> Result<Vec<Signup>, CampError> {
        let rows = sqlx::query(&format!("{SELECT_SIGNUPS} ORDER BY s.id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(signup_from_row).collect())
    }

    /// Signs a camper up to an activity.
    ///
    /// The insert and the read-back share one transaction, so a signup is only
    /// committed once its full representation could be built. Unknown camper or
    /// activity IDs trip the foreign keys and come back as a validation error.
    pub async fn create_signup(&self, request: &CreateSignupRequest) -> Result<Signup, CampError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(CampError::rejected_write)?;

        let signup_id: i32 = sqlx::query_scalar(
            "INSERT INTO signups (camper_id, activity_id, time) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(request.camper_id)
        .bind(request.activity_id)
        .bind(request.time)
        .fetch_one(&mut *tx)
        .await
        .map_err(CampError::rejected_write)?;

        let row = sqlx::query(&format!("{SELECT_SIGNUPS} WHERE s.id = $1"))
            .bind(signup_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(CampError::rejected_write)?;

        tx.commit().await.map_err(CampError::rejected_write)?;

        log::info!(
            "📝 Signed camper {} up for activity {} at {}:00",
            request.camper_id,
            request.activity_id,
            request.time
        );

        Ok(signup_from_row(&row))
    }
}

fn signup_from_row(row: &PgRow) -> Signup {
    Signup {
        id: row.get("id"),
        camper_id: row.get("camper_id"),
        activity_id: row.get("activity_id"),
        time: row.get("time"),
        camper: CamperSummary {
            id: row.get("camper_id"),
            name: row.get("camper_name"),
            age: row.get("camper_age"),
        },
        activity: ActivitySummary {
            id: row.get("activity_id"),
            name: row.get("activity_name"),
            difficulty: row.get("activity_difficulty"),
        },
    }
}
