use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Accepts RFC 3339 timestamps and the offset-less ISO form the booking API
/// emits for UTC values.
fn api_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(serde::de::Error::custom)
}

/// Booking request body for `POST /api/bookings/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingData {
    pub email: String,
    pub name: String,
    /// ISO date, e.g. `2026-10-21`.
    pub booking_date: String,
    /// Slot start, e.g. `14:00`.
    pub booking_time: String,
    pub description: String,
}

/// Outcome of the booking upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpsertAction {
    Created,
    Updated,
}

/// A booking as persisted by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub booking_date: String,
    pub booking_time: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "api_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "api_timestamp")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub action: UpsertAction,
    pub booking: Booking,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub date: String,
    pub available_slots: Vec<String>,
    pub booked_slots: Vec<String>,
}

/// Qualification survey attached to a booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyData {
    pub booking_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_usage: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development_approach: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_goals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_goal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub role: Option<Vec<String>>,
    pub cloud_usage: Option<Vec<String>>,
    pub development_approach: Option<Vec<String>>,
    pub team_size: Option<Vec<String>>,
    pub primary_goals: Option<Vec<String>>,
    pub other_goal: Option<String>,
    #[serde(deserialize_with = "api_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Error body returned by the API on non-success statuses.
///
/// `detail` is usually a string, but validation failures carry a list of
/// error objects instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// The detail as display text: strings verbatim, anything else as JSON.
    /// Missing, null and empty-string details yield `None`.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) if text.is_empty() => None,
            serde_json::Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_survey_omits_unanswered_questions() {
        let survey = SurveyData {
            booking_id: Uuid::nil(),
            role: Some(vec!["CTO".to_string()]),
            ..Default::default()
        };

        let body = serde_json::to_value(&survey).unwrap();
        assert_eq!(
            body,
            json!({
                "booking_id": "00000000-0000-0000-0000-000000000000",
                "role": ["CTO"]
            })
        );
    }

    #[test]
    fn test_booking_response_parses_action() {
        let response: BookingResponse = serde_json::from_value(json!({
            "action": "updated",
            "booking": {
                "id": "6f1c2d1e-6a55-4b5f-9a43-0f2f1c1b7a10",
                "email": "ana@example.com",
                "name": "Ana",
                "booking_date": "2026-10-21",
                "booking_time": "14:00",
                "description": null,
                "created_at": "2026-10-19T09:00:00Z",
                "updated_at": "2026-10-19T10:00:00Z"
            },
            "message": "Booking updated"
        }))
        .unwrap();

        assert_eq!(response.action, UpsertAction::Updated);
        assert!(response.booking.description.is_none());
    }

    #[test]
    fn test_survey_response_accepts_naive_timestamps() {
        let response: SurveyResponse = serde_json::from_value(json!({
            "id": "0b0e5f5c-3f57-4a53-a6ad-1f8c0b6f9a21",
            "booking_id": "6f1c2d1e-6a55-4b5f-9a43-0f2f1c1b7a10",
            "role": null,
            "cloud_usage": ["GCP"],
            "development_approach": null,
            "team_size": null,
            "primary_goals": null,
            "other_goal": "Cut cloud costs",
            "created_at": "2026-10-19T09:30:15.123456"
        }))
        .unwrap();

        assert_eq!(response.created_at.to_rfc3339(), "2026-10-19T09:30:15.123456+00:00");
        assert_eq!(response.cloud_usage, Some(vec!["GCP".to_string()]));
    }

    #[test]
    fn test_error_detail_text() {
        let text = |body: serde_json::Value| {
            serde_json::from_value::<ApiErrorBody>(body)
                .unwrap()
                .detail_text()
        };

        assert_eq!(text(json!({"detail": "slot taken"})).as_deref(), Some("slot taken"));
        assert_eq!(text(json!({"detail": ""})), None);
        assert_eq!(text(json!({"detail": null})), None);
        assert_eq!(text(json!({})), None);
        assert_eq!(
            text(json!({"detail": [{"msg": "field required"}]})).as_deref(),
            Some(r#"[{"msg":"field required"}]"#)
        );
    }
}
