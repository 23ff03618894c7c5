use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};
use utoipa::ToSchema;

use super::pricing::{fixed2, round2};
use super::settings::ReportSettings;
use crate::model::TimeEntry;

/// Weekly hours above this are overtime.
pub const OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// One bar of the regular/overtime chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyAggregate {
    #[schema(example = "2023-12-31", format = "date", value_type = String)]
    pub week_start: NaiveDate,
    /// "MMM d" label used on the chart axis
    #[schema(example = "Dec 31")]
    pub week: String,
    #[schema(example = 40.0, value_type = f64)]
    #[serde(rename = "regular", with = "rust_decimal::serde::float")]
    pub regular_hours: Decimal,
    #[schema(example = 5.0, value_type = f64)]
    #[serde(rename = "overtime", with = "rust_decimal::serde::float")]
    pub overtime_hours: Decimal,
    #[schema(example = 45.0, value_type = f64)]
    #[serde(rename = "total", with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
}

impl WeeklyAggregate {
    /// Splits a week's worked hours at the overtime threshold. The total is
    /// rounded first so `regular + overtime == total` holds exactly.
    pub fn from_total(week_start: NaiveDate, worked: Decimal) -> Self {
        let total = round2(worked);
        let regular = total.min(OVERTIME_THRESHOLD_HOURS);
        let overtime = if total > OVERTIME_THRESHOLD_HOURS {
            total - OVERTIME_THRESHOLD_HOURS
        } else {
            Decimal::ZERO
        };

        Self {
            week_start,
            week: week_label(week_start),
            regular_hours: regular,
            overtime_hours: overtime,
            total_hours: total,
        }
    }
}

pub fn week_label(week_start: NaiveDate) -> String {
    week_start.format("%b %-d").to_string()
}

/// Groups approved entries by the week their clock-in falls in, oldest week
/// first.
///
/// Unfinished shifts and entries with unreadable hours still open their
/// week but add nothing to it. A week whose sum overflows is capped at the
/// largest representable value. The table's search and date filters do not
/// apply here.
pub fn aggregate_weekly(entries: &[TimeEntry], settings: &ReportSettings) -> Vec<WeeklyAggregate> {
    let mut weeks: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for entry in entries.iter().filter(|e| e.is_approved()) {
        let week_start = settings
            .week_start
            .start_of(settings.local_date(&entry.clock_in));
        let worked = weeks.entry(week_start).or_insert(Decimal::ZERO);

        if entry.clock_out.is_none() {
            continue;
        }
        if let Some(hours) = entry.hours.value() {
            let sum = *worked;
            *worked = sum.checked_add(hours).unwrap_or_else(|| {
                warn!(entry = %entry.id, %week_start, "Weekly hours overflowed, capping the week");
                sum.saturating_add(hours)
            });
        }
    }

    debug!(entries = entries.len(), weeks = weeks.len(), "Aggregated weekly hours");

    weeks
        .into_iter()
        .map(|(week_start, worked)| WeeklyAggregate::from_total(week_start, worked))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    #[schema(example = "regular")]
    pub data_key: String,
    #[schema(example = "Regular Hours (≤40h)")]
    pub name: String,
    #[schema(example = "#10B981")]
    pub fill: String,
    #[schema(example = "hours")]
    pub stack_id: String,
}

/// The two stacked bars drawn per week.
pub fn chart_series() -> Vec<ChartSeries> {
    let bar = |key: &str, name: &str, fill: &str| ChartSeries {
        data_key: key.to_string(),
        name: name.to_string(),
        fill: fill.to_string(),
        stack_id: "hours".to_string(),
    };
    vec![
        bar("regular", "Regular Hours (≤40h)", "#10B981"),
        bar("overtime", "Overtime Hours (>40h)", "#F97316"),
    ]
}

pub fn tooltip_value(hours: Decimal) -> String {
    format!("{}h", fixed2(hours))
}

pub fn tooltip_label(week: &str) -> String {
    format!("Week of {week}")
}
