use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::settings::ReportSettings;
use crate::model::{DepartmentMap, TimeEntry};

/// Inclusive day range for the history table. A missing bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    #[schema(example = "2024-01-01", format = "date", value_type = Option<String>)]
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[schema(example = "2024-01-31", format = "date", value_type = Option<String>)]
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self::new(today - Duration::days(days), today)
    }

    /// What the history view opens with and resets to.
    pub fn default_for(today: NaiveDate) -> Self {
        Self::last_days(today, Self::DEFAULT_LOOKBACK_DAYS)
    }

    /// `from` is compared against the start of its day, `to` against the end
    /// of its day, so both bounds are inclusive.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.from.is_none_or(|from| day >= from) && self.to.is_none_or(|to| day <= to)
    }
}

/// Same shape as a JavaScript `Date#toISOString`, which is what users see
/// and type into the search box.
pub fn iso_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn matches_search(entry: &TimeEntry, departments: &DepartmentMap, needle: &str) -> bool {
    if iso_timestamp(&entry.created_at).to_lowercase().contains(needle) {
        return true;
    }
    if entry.status.as_ref().to_lowercase().contains(needle) {
        return true;
    }
    departments
        .get(&entry.department_id)
        .is_some_and(|d| d.name.to_lowercase().contains(needle))
}

/// Approved entries whose clock-in day falls in `range` and that match
/// `search`, in input order.
pub fn filter_entries<'a>(
    entries: &'a [TimeEntry],
    departments: &DepartmentMap,
    search: &str,
    range: &DateRange,
    settings: &ReportSettings,
) -> Vec<&'a TimeEntry> {
    let needle = search.to_lowercase();

    let visible: Vec<&TimeEntry> = entries
        .iter()
        .filter(|entry| entry.is_approved())
        .filter(|entry| range.contains(settings.local_date(&entry.clock_in)))
        .filter(|entry| matches_search(entry, departments, &needle))
        .collect();

    debug!(
        total = entries.len(),
        visible = visible.len(),
        search = %search,
        "Filtered time entries"
    );

    visible
}
