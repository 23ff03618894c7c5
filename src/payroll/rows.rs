use serde::Serialize;
use strum_macros::{AsRefStr, Display};
use utoipa::ToSchema;

use super::pricing::{self, RateCell, fixed2};
use super::settings::ReportSettings;
use super::shortcuts::date_label;
use crate::model::{DepartmentMap, EntryStatus, PermittedDepartments, TimeEntry};

pub const TABLE_COLUMNS: [&str; 8] = [
    "Date",
    "Department",
    "Clock In",
    "Clock Out",
    "Hours",
    "Hourly Rate",
    "Total",
    "Status",
];

pub const IN_PROGRESS: &str = "In Progress";
const NO_CLOCK_OUT: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
}

impl From<EntryStatus> for BadgeVariant {
    fn from(status: EntryStatus) -> Self {
        match status {
            EntryStatus::Pending => BadgeVariant::Default,
            EntryStatus::Approved => BadgeVariant::Secondary,
            EntryStatus::Rejected => BadgeVariant::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCell {
    Badge {
        status: EntryStatus,
        variant: BadgeVariant,
    },
    InProgress,
}

impl StatusCell {
    pub fn of(entry: &TimeEntry) -> Self {
        if entry.is_in_progress() {
            StatusCell::InProgress
        } else {
            StatusCell::Badge {
                status: entry.status,
                variant: entry.status.into(),
            }
        }
    }

    pub fn text(&self) -> String {
        match self {
            StatusCell::Badge { status, .. } => status.to_string(),
            StatusCell::InProgress => IN_PROGRESS.to_string(),
        }
    }

    pub fn variant(&self) -> Option<BadgeVariant> {
        match self {
            StatusCell::Badge { variant, .. } => Some(*variant),
            StatusCell::InProgress => None,
        }
    }
}

/// A history table row with every column already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub id: String,
    pub date: String,
    pub department: String,
    pub clock_in: String,
    pub clock_out: String,
    pub hours: String,
    pub hourly_rate: RateCell,
    pub total: RateCell,
    pub status: StatusCell,
}

impl ReportRow {
    /// Cell text in [`TABLE_COLUMNS`] order.
    pub fn cells(&self) -> [String; 8] {
        [
            self.date.clone(),
            self.department.clone(),
            self.clock_in.clone(),
            self.clock_out.clone(),
            self.hours.clone(),
            self.hourly_rate.to_string(),
            self.total.to_string(),
            self.status.text(),
        ]
    }
}

fn clock_time(settings: &ReportSettings, ts: &chrono::DateTime<chrono::Utc>) -> String {
    settings.local(ts).format("%I:%M %p").to_string()
}

/// Formats one entry. Pass `rates = None` to leave the money columns pending.
pub fn build_row(
    entry: &TimeEntry,
    departments: &DepartmentMap,
    rates: Option<&PermittedDepartments>,
    settings: &ReportSettings,
) -> ReportRow {
    let hours = match entry.hours.value() {
        Some(h) => format!("{}h", fixed2(h)),
        None => pricing::INVALID.to_string(),
    };

    ReportRow {
        id: entry.id.clone(),
        date: date_label(settings.local_date(&entry.clock_in)),
        department: departments
            .get(&entry.department_id)
            .map(|d| d.name.clone())
            .unwrap_or_default(),
        clock_in: clock_time(settings, &entry.clock_in),
        clock_out: entry
            .clock_out
            .as_ref()
            .map_or_else(|| NO_CLOCK_OUT.to_string(), |ts| clock_time(settings, ts)),
        hours,
        hourly_rate: pricing::hourly_rate_cell(rates, &entry.department_id),
        total: pricing::total_cell(rates, &entry.department_id, &entry.hours),
        status: StatusCell::of(entry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, DepartmentRate, LooseDecimal};
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn entry(dept: &str, hours: &str, finished: bool, status: EntryStatus) -> TimeEntry {
        let clock_in = Utc.with_ymd_and_hms(2024, 1, 1, 9, 5, 0).unwrap();
        TimeEntry {
            id: "e1".to_string(),
            department_id: dept.to_string(),
            clock_in,
            clock_out: finished.then(|| clock_in + Duration::minutes(8 * 60 + 30)),
            hours: LooseDecimal::parse(hours),
            status,
            created_at: clock_in,
        }
    }

    fn departments() -> DepartmentMap {
        DepartmentMap::from([("kit".to_string(), Department { name: "Kitchen".to_string() })])
    }

    fn rates(rate: &str) -> PermittedDepartments {
        PermittedDepartments::from([(
            "kit".to_string(),
            DepartmentRate {
                hourly_rate: Some(LooseDecimal::parse(rate)),
            },
        )])
    }

    #[test]
    fn formats_a_finished_approved_entry() {
        let rates = rates("20");
        let row = build_row(
            &entry("kit", "8.5", true, EntryStatus::Approved),
            &departments(),
            Some(&rates),
            &ReportSettings::default(),
        );

        assert_eq!(
            row.cells(),
            [
                "Jan 01, 2024".to_string(),
                "Kitchen".to_string(),
                "09:05 AM".to_string(),
                "05:35 PM".to_string(),
                "8.50h".to_string(),
                "$20.00".to_string(),
                "$170.00".to_string(),
                "APPROVED".to_string(),
            ]
        );
        assert_eq!(row.total.amount(), Some(dec!(170)));
        assert_eq!(row.status.variant(), Some(BadgeVariant::Secondary));
    }

    #[test]
    fn running_shift_shows_in_progress() {
        let row = build_row(
            &entry("kit", "0", false, EntryStatus::Approved),
            &departments(),
            Some(&rates("20")),
            &ReportSettings::default(),
        );

        assert_eq!(row.clock_out, "-");
        assert_eq!(row.status, StatusCell::InProgress);
        assert_eq!(row.status.text(), IN_PROGRESS);
    }

    #[test]
    fn garbage_rate_marks_total_invalid_but_keeps_hours() {
        let row = build_row(
            &entry("kit", "8", true, EntryStatus::Approved),
            &departments(),
            Some(&rates("abc")),
            &ReportSettings::default(),
        );

        assert_eq!(row.hours, "8.00h");
        assert_eq!(row.total, RateCell::Invalid);
    }

    #[test]
    fn unknown_department_renders_blank_name_and_not_applicable() {
        let row = build_row(
            &entry("nope", "8", true, EntryStatus::Approved),
            &departments(),
            Some(&rates("20")),
            &ReportSettings::default(),
        );

        assert_eq!(row.department, "");
        assert_eq!(row.hourly_rate.to_string(), "N/A");
        assert_eq!(row.total.to_string(), "N/A");
    }

    #[test]
    fn badge_variants_follow_status() {
        assert_eq!(BadgeVariant::from(EntryStatus::Pending), BadgeVariant::Default);
        assert_eq!(BadgeVariant::from(EntryStatus::Rejected), BadgeVariant::Destructive);
        assert_eq!(BadgeVariant::Destructive.to_string(), "destructive");
    }
}
