use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

use super::filter::DateRange;
use super::notify::Toast;
use super::settings::WeekStart;

pub const RANGE_APPLIED: &str = "Date Range Applied";

/// Quick picks offered next to the date-range calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum DateShortcut {
    #[strum(serialize = "today")]
    Today,
    #[strum(serialize = "last-week")]
    LastWeek,
    #[serde(rename = "last-30-days")]
    #[strum(serialize = "last-30-days")]
    Last30Days,
    #[serde(rename = "last-90-days")]
    #[strum(serialize = "last-90-days")]
    Last90Days,
}

impl DateShortcut {
    /// "Last week" is always the Monday to Sunday before the current week,
    /// independent of how the chart starts its weeks.
    pub fn resolve(self, today: NaiveDate) -> DateRange {
        match self {
            DateShortcut::Today => DateRange::single_day(today),
            DateShortcut::LastWeek => {
                let this_monday = WeekStart::Monday.start_of(today);
                DateRange::new(
                    this_monday - Duration::days(7),
                    this_monday - Duration::days(1),
                )
            }
            DateShortcut::Last30Days => DateRange::last_days(today, 30),
            DateShortcut::Last90Days => DateRange::last_days(today, 90),
        }
    }

    pub fn toast(self, today: NaiveDate) -> Toast {
        let description = match (self, self.resolve(today)) {
            (DateShortcut::Today, _) => {
                format!("Showing entries for today, {}", date_label(today))
            }
            (_, DateRange { from: Some(from), to: Some(to) }) => format!(
                "Showing entries from {} to {}",
                date_label(from),
                date_label(to)
            ),
            _ => "Showing all entries".to_string(),
        };
        Toast::new(RANGE_APPLIED, description)
    }
}

/// "MMM dd, yyyy"
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn last_week_from_a_wednesday_is_previous_monday_to_sunday() {
        let wednesday = day(2024, 1, 10);

        let range = DateShortcut::LastWeek.resolve(wednesday);

        assert_eq!(range, DateRange::new(day(2024, 1, 1), day(2024, 1, 7)));
    }

    #[test]
    fn last_week_on_a_sunday_still_skips_the_current_week() {
        // Sunday belongs to the Monday-started week that began on the 8th
        let range = DateShortcut::LastWeek.resolve(day(2024, 1, 14));
        assert_eq!(range, DateRange::new(day(2024, 1, 1), day(2024, 1, 7)));
    }

    #[test]
    fn rolling_windows_end_today() {
        let today = day(2024, 4, 30);

        assert_eq!(DateShortcut::Today.resolve(today), DateRange::single_day(today));
        assert_eq!(
            DateShortcut::Last30Days.resolve(today),
            DateRange::new(day(2024, 3, 31), today)
        );
        assert_eq!(
            DateShortcut::Last90Days.resolve(today),
            DateRange::new(day(2024, 1, 31), today)
        );
    }

    #[test]
    fn toasts_describe_the_applied_range() {
        let today = day(2024, 1, 10);

        assert_eq!(
            DateShortcut::Today.toast(today),
            Toast::new(RANGE_APPLIED, "Showing entries for today, Jan 10, 2024")
        );
        assert_eq!(
            DateShortcut::LastWeek.toast(today).description,
            "Showing entries from Jan 01, 2024 to Jan 07, 2024"
        );
    }

    #[test]
    fn path_names_parse_back() {
        for shortcut in DateShortcut::iter() {
            assert_eq!(DateShortcut::from_str(&shortcut.to_string()).unwrap(), shortcut);
        }
        assert_eq!(
            serde_json::to_string(&DateShortcut::Last90Days).unwrap(),
            "\"last-90-days\""
        );
        assert!(DateShortcut::from_str("yesterday").is_err());
    }
}
