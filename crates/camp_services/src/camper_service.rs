use sqlx::{PgPool, Row};

use crate::error::CampError;
use crate::types::*;

/// Service for handling camper operations
pub struct CamperService {
    pool: PgPool,
}

impl CamperService {
    /// Creates a new instance of `CamperService` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every camper, ordered by ID
    pub async fn list_campers(&self) -> Result<Vec<CamperSummary>, CampError> {
        let campers =
            sqlx::query_as::<_, CamperSummary>("SELECT id, name, age FROM campers ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(campers)
    }

    /// Creates a new camper. Any failure while inserting is reported as a validation error.
    pub async fn create_camper(&self, request: &CreateCamperRequest) -> Result<Camper, CampError> {
        let camper = sqlx::query_as::<_, CamperSummary>(
            "INSERT INTO campers (name, age) VALUES ($1, $2) RETURNING id, name, age",
        )
        .bind(&request.name)
        .bind(request.age)
        .fetch_one(&self.pool)
        .await
        .map_err(CampError::rejected_write)?;

        log::info!("🏕️ Created camper {} ({})", camper.id, camper.name);

        // A new camper has no signups yet
        Ok(Camper {
            id: camper.id,
            name: camper.name,
            age: camper.age,
            signups: Vec::new(),
        })
    }

    /// Fetches a camper's own columns, failing with `NotFound` if the camper is absent
    pub async fn get_camper_summary(&self, camper_id: i32) -> Result<CamperSummary, CampError> {
        sqlx::query_as::<_, CamperSummary>("SELECT id, name, age FROM campers WHERE id = $1")
            .bind(camper_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(CampError::NotFound("Camper"))
    }

    /// Gets a camper with all of its signups and the activities they point to
    pub async fn get_camper(&self, camper_id: i32) -> Result<Camper, CampError> {
        let camper = self.get_camper_summary(camper_id).await?;

        let rows = sqlx::query(
            r#"
            SELECT
                s.id, s.camper_id, s.activity_id, s.time,
                a.name AS activity_name, a.difficulty AS activity_difficulty
            FROM signups s
            JOIN activities a ON a.id = s.activity_id
            WHERE s.camper_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(camper_id)
        .fetch_all(&self.pool)
        .await?;

        let signups = rows
            .into_iter()
            .map(|row| CamperSignup {
                id: row.get("id"),
                camper_id: row.get("camper_id"),
                activity_id: row.get("activity_id"),
                time: row.get("time"),
                activity: ActivitySummary {
                    id: row.get("activity_id"),
                    name: row.get("activity_name"),
                    difficulty: row.get("activity_difficulty"),
                },
            })
            .collect();

        Ok(Camper {
            id: camper.id,
            name: camper.name,
            age: camper.age,
            signups,
        })
    }

    /// Applies the provided fields of `request` to a camper, leaving the others unchanged
    pub async fn update_camper(
        &self,
        camper_id: i32,
        request: &UpdateCamperRequest,
    ) -> Result<CamperSummary, CampError> {
        let row = sqlx::query_as::<_, CamperSummary>(
            r#"
            UPDATE campers
            SET name = COALESCE($1, name), age = COALESCE($2, age)
            WHERE id = $3
            RETURNING id, name, age
            "#,
        )
        .bind(request.name.as_deref())
        .bind(request.age)
        .bind(camper_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(CampError::rejected_write)?;

        let camper = row.ok_or(CampError::NotFound("Camper"))?;
        log::info!("✏️ Updated camper {}", camper.id);

        Ok(camper)
    }
}
