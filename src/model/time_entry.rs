use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

use super::numeric::LooseDecimal;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryStatus {
    Pending,
    Approved,
    Rejected,
}

/// One clock-in/clock-out record. Read-only here; the upstream system owns
/// its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    #[schema(example = "clx1")]
    pub id: String,
    #[schema(example = "dep-1")]
    pub department_id: String,
    #[schema(example = "2024-01-01T09:00:00Z", format = "date-time", value_type = String)]
    pub clock_in: DateTime<Utc>,
    /// Absent while the shift is still running
    #[schema(example = "2024-01-01T17:00:00Z", format = "date-time", value_type = Option<String>)]
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    #[schema(example = "8.00", value_type = String)]
    pub hours: LooseDecimal,
    pub status: EntryStatus,
    #[schema(example = "2024-01-01T09:00:00Z", format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl TimeEntry {
    pub fn is_approved(&self) -> bool {
        self.status == EntryStatus::Approved
    }

    pub fn is_in_progress(&self) -> bool {
        self.clock_out.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_as_upper_case() {
        assert_eq!(EntryStatus::Approved.to_string(), "APPROVED");
        assert_eq!(EntryStatus::from_str("REJECTED").unwrap(), EntryStatus::Rejected);
        assert_eq!(
            serde_json::to_string(&EntryStatus::Pending).unwrap(),
            "\"PENDING\""
        );
    }

    #[test]
    fn entry_deserializes_from_camel_case_json() {
        let entry: TimeEntry = serde_json::from_value(serde_json::json!({
            "id": "e1",
            "departmentId": "d1",
            "clockIn": "2024-01-01T09:00:00Z",
            "hours": "7.5",
            "status": "APPROVED",
            "createdAt": "2024-01-01T09:00:00Z"
        }))
        .unwrap();

        assert!(entry.is_in_progress());
        assert!(entry.is_approved());
        assert_eq!(entry.hours.raw(), "7.5");
    }
}
