use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// First day of a chart week.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WeekStart {
    /// en-US locale default
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn start_of(self, date: NaiveDate) -> NaiveDate {
        let back = match self {
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
            WeekStart::Monday => date.weekday().num_days_from_monday(),
        };
        date - Duration::days(back as i64)
    }
}

/// Where day and week boundaries fall for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    pub utc_offset: FixedOffset,
    pub week_start: WeekStart,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
            week_start: WeekStart::default(),
        }
    }
}

impl ReportSettings {
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn local(&self, ts: &DateTime<Utc>) -> DateTime<FixedOffset> {
        ts.with_timezone(&self.utc_offset)
    }

    pub fn local_date(&self, ts: &DateTime<Utc>) -> NaiveDate {
        self.local(ts).date_naive()
    }

    pub fn today(&self) -> NaiveDate {
        self.local_date(&Utc::now())
    }
}
