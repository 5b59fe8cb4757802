use serde::{Deserialize, Serialize};
use validator::Validate;

/// A camper projected to its own columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CamperSummary {
    /// Unique identifier for the camper
    pub id: i32,
    /// Name of the camper
    pub name: String,
    /// Age of the camper, between 8 and 18
    pub age: i32,
}

/// An activity projected to its own columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ActivitySummary {
    /// Unique identifier for the activity
    pub id: i32,
    /// Name of the activity
    pub name: String,
    /// Difficulty rating of the activity
    pub difficulty: i32,
}

/// Full camper representation including its signups
#[derive(Debug, Serialize)]
pub struct Camper {
    /// Unique identifier for the camper
    pub id: i32,
    /// Name of the camper
    pub name: String,
    /// Age of the camper
    pub age: i32,
    /// Signups of this camper, each with the activity it points to
    pub signups: Vec<CamperSignup>,
}

/// A signup as listed under its camper
#[derive(Debug, Serialize)]
pub struct CamperSignup {
    /// Unique identifier for the signup
    pub id: i32,
    /// ID of the camper
    pub camper_id: i32,
    /// ID of the activity
    pub activity_id: i32,
    /// Hour of day, 0 to 23
    pub time: i32,
    /// The activity signed up for
    pub activity: ActivitySummary,
}

/// Full activity representation including its signups
#[derive(Debug, Serialize)]
pub struct Activity {
    /// Unique identifier for the activity
    pub id: i32,
    /// Name of the activity
    pub name: String,
    /// Difficulty rating of the activity
    pub difficulty: i32,
    /// Signups for this activity, each with the camper who signed up
    pub signups: Vec<ActivitySignup>,
}

/// A signup as listed under its activity
#[derive(Debug, Serialize)]
pub struct ActivitySignup {
    /// Unique identifier for the signup
    pub id: i32,
    /// ID of the camper
    pub camper_id: i32,
    /// ID of the activity
    pub activity_id: i32,
    /// Hour of day, 0 to 23
    pub time: i32,
    /// The camper who signed up
    pub camper: CamperSummary,
}

/// Full signup representation with both ends of the association
#[derive(Debug, Serialize)]
pub struct Signup {
    /// Unique identifier for the signup
    pub id: i32,
    /// ID of the camper
    pub camper_id: i32,
    /// ID of the activity
    pub activity_id: i32,
    /// Hour of day, 0 to 23
    pub time: i32,
    /// The camper who signed up
    pub camper: CamperSummary,
    /// The activity signed up for
    pub activity: ActivitySummary,
}

/// Request structure for creating a camper
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCamperRequest {
    /// Name of the camper
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    /// Age of the camper
    #[validate(range(min = 8, max = 18, message = "Age must be between 8 and 18"))]
    pub age: i32,
}

/// Request structure for updating a camper.
///
/// Only the listed fields may be changed; any other key in the body is rejected.
/// An absent field is left unchanged, an explicit `null` is rejected.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateCamperRequest {
    /// New name for the camper
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,

    /// New age for the camper
    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(min = 8, max = 18, message = "Age must be between 8 and 18"))]
    pub age: Option<i32>,
}

/// Deserializes a field that may be omitted but never set to `null`.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Request structure for signing a camper up to an activity
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSignupRequest {
    /// ID of an existing camper
    pub camper_id: i32,

    /// ID of an existing activity
    pub activity_id: i32,

    /// Hour of day for the activity
    #[validate(range(min = 0, max = 23, message = "Time must be between 0 and 23"))]
    pub time: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camper_age_range() {
        for age in [8, 12, 18] {
            let request = CreateCamperRequest {
                name: "Ana".to_string(),
                age,
            };
            assert!(request.validate().is_ok(), "age {} should be accepted", age);
        }

        for age in [0, 7, 19, -3] {
            let request = CreateCamperRequest {
                name: "Ana".to_string(),
                age,
            };
            assert!(request.validate().is_err(), "age {} should be rejected", age);
        }
    }

    #[test]
    fn test_camper_name_required() {
        let request = CreateCamperRequest {
            name: String::new(),
            age: 10,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_only_checks_provided_fields() {
        assert!(UpdateCamperRequest::default().validate().is_ok());

        let age_only = UpdateCamperRequest {
            age: Some(12),
            ..Default::default()
        };
        assert!(age_only.validate().is_ok());

        let bad_age = UpdateCamperRequest {
            age: Some(30),
            ..Default::default()
        };
        assert!(bad_age.validate().is_err());

        let empty_name = UpdateCamperRequest {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_update_rejects_unknown_fields() {
        let parsed: Result<UpdateCamperRequest, _> =
            serde_json::from_value(serde_json::json!({"age": 12, "id": 99}));
        assert!(parsed.is_err());

        let parsed: UpdateCamperRequest =
            serde_json::from_value(serde_json::json!({"age": 12})).unwrap();
        assert_eq!(parsed.age, Some(12));
        assert!(parsed.name.is_none());
    }

    #[test]
    fn test_update_rejects_explicit_null() {
        for body in [
            serde_json::json!({"name": null}),
            serde_json::json!({"age": null}),
        ] {
            let parsed: Result<UpdateCamperRequest, _> = serde_json::from_value(body.clone());
            assert!(parsed.is_err(), "{} should be rejected", body);
        }

        let parsed: UpdateCamperRequest =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.name.is_none());
        assert!(parsed.age.is_none());
    }

    #[test]
    fn test_signup_time_range() {
        let signup = |time| CreateSignupRequest {
            camper_id: 1,
            activity_id: 1,
            time,
        };

        assert!(signup(0).validate().is_ok());
        assert!(signup(23).validate().is_ok());
        assert!(signup(24).validate().is_err());
        assert!(signup(-1).validate().is_err());
    }

    #[test]
    fn test_signup_serializes_nested_summaries() {
        let signup = Signup {
            id: 1,
            camper_id: 2,
            activity_id: 3,
            time: 9,
            camper: CamperSummary {
                id: 2,
                name: "Ana".to_string(),
                age: 11,
            },
            activity: ActivitySummary {
                id: 3,
                name: "Archery".to_string(),
                difficulty: 2,
            },
        };

        assert_eq!(
            serde_json::to_value(&signup).unwrap(),
            serde_json::json!({
                "id": 1,
                "camper_id": 2,
                "activity_id": 3,
                "time": 9,
                "camper": {"id": 2, "name": "Ana", "age": 11},
                "activity": {"id": 3, "name": "Archery", "difficulty": 2}
            })
        );
    }
}
