use std::collections::HashMap;

use sqlx::{PgPool, Row};

use crate::error::CampError;
use crate::types::*;

/// Service for handling activity operations
pub struct ActivityService {
    pool: PgPool,
}

impl ActivityService {
    /// Creates a new instance of `ActivityService` with the provided database connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists every activity with its signups and the campers behind them
    pub async fn list_activities(&self) -> Result<Vec<Activity>, CampError> {
        let activities = sqlx::query_as::<_, ActivitySummary>(
            "SELECT id, name, difficulty FROM activities ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let rows = sqlx::query(
            r#"
            SELECT
                s.id, s.camper_id, s.activity_id, s.time,
                c.name AS camper_name, c.age AS camper_age
            FROM signups s
            JOIN campers c ON c.id = s.camper_id
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut signups_by_activity: HashMap<i32, Vec<ActivitySignup>> = HashMap::new();
        for row in rows {
            let signup = ActivitySignup {
                id: row.get("id"),
                camper_id: row.get("camper_id"),
                activity_id: row.get("activity_id"),
                time: row.get("time"),
                camper: CamperSummary {
                    id: row.get("camper_id"),
                    name: row.get("camper_name"),
                    age: row.get("camper_age"),
                },
            };
            signups_by_activity
                .entry(signup.activity_id)
                .or_default()
                .push(signup);
        }

        let activities = activities
            .into_iter()
            .map(|activity| {
                let signups = signups_by_activity
                    .remove(&activity.id)
                    .unwrap_or_default();

                Activity {
                    id: activity.id,
                    name: activity.name,
                    difficulty: activity.difficulty,
                    signups,
                }
            })
            .collect();

        Ok(activities)
    }

    /// Deletes an activity. Its signups go with it through the cascading foreign key.
    pub async fn delete_activity(&self, activity_id: i32) -> Result<(), CampError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(activity_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CampError::NotFound("Activity"));
        }

        log::info!("🗑️ Deleted activity {}", activity_id);

        Ok(())
    }
}
