use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use super::error::PayrollError;
use super::filter::{DateRange, filter_entries};
use super::notify::{Toast, ToastSink};
use super::rows::{ReportRow, build_row};
use super::settings::ReportSettings;
use super::shortcuts::{DateShortcut, RANGE_APPLIED, date_label};
use super::weekly::{WeeklyAggregate, aggregate_weekly};
use crate::model::TimeEntrySnapshot;

pub const EMPTY_MESSAGE: &str = "No payroll history found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Ready,
}

impl LoadState {
    pub fn of(snapshot: &TimeEntrySnapshot) -> Self {
        if snapshot.loading {
            LoadState::Loading
        } else {
            LoadState::Ready
        }
    }
}

/// What the host should draw for the current filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayrollView {
    /// Entries that already arrived, with every money column pending.
    Loading { rows: Vec<ReportRow> },
    Empty,
    Table {
        rows: Vec<ReportRow>,
        chart: Vec<WeeklyAggregate>,
    },
}

impl PayrollView {
    pub fn state(&self) -> LoadState {
        match self {
            PayrollView::Loading { .. } => LoadState::Loading,
            _ => LoadState::Ready,
        }
    }

    pub fn rows(&self) -> &[ReportRow] {
        match self {
            PayrollView::Loading { rows } | PayrollView::Table { rows, .. } => rows,
            PayrollView::Empty => &[],
        }
    }

    pub fn chart(&self) -> &[WeeklyAggregate] {
        match self {
            PayrollView::Table { chart, .. } => chart,
            _ => &[],
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            PayrollView::Empty => Some(EMPTY_MESSAGE),
            _ => None,
        }
    }
}

/// Local filter state of the payroll history screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollHistory {
    search: String,
    range: DateRange,
    picker_open: bool,
}

impl PayrollHistory {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            search: String::new(),
            range: DateRange::default_for(today),
            picker_open: false,
        }
    }

    pub fn with_filters(search: impl Into<String>, range: DateRange) -> Self {
        Self {
            search: search.into(),
            range,
            picker_open: false,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn cancel_picker(&mut self) {
        self.picker_open = false;
    }

    /// Calendar selection. Days after `today` cannot be picked.
    pub fn select_range(&mut self, range: DateRange, today: NaiveDate) -> Result<(), PayrollError> {
        validate_range(&range, today)?;
        self.range = range;
        Ok(())
    }

    pub fn apply_shortcut(&mut self, shortcut: DateShortcut, today: NaiveDate, sink: &mut impl ToastSink) {
        self.range = shortcut.resolve(today);
        self.picker_open = false;
        info!(%shortcut, from = ?self.range.from, to = ?self.range.to, "Date shortcut applied");
        sink.notify(shortcut.toast(today));
    }

    pub fn apply_range(&mut self, today: NaiveDate, sink: &mut impl ToastSink) {
        self.picker_open = false;
        let from = date_label(self.range.from.unwrap_or(today));
        let to = self.range.to.map_or_else(|| "today".to_string(), date_label);
        sink.notify(Toast::new(
            RANGE_APPLIED,
            format!("Filtering entries from {from} to {to}"),
        ));
    }

    pub fn clear_filters(&mut self, today: NaiveDate, sink: &mut impl ToastSink) {
        self.search.clear();
        self.range = DateRange::default_for(today);
        self.picker_open = false;
        sink.notify(Toast::new(
            "Filters Cleared",
            "All filters have been reset to default (last 30 days).",
        ));
    }

    /// Re-derives the whole view from `snapshot`. Nothing is cached between
    /// calls.
    pub fn render(&self, snapshot: &TimeEntrySnapshot, settings: &ReportSettings) -> PayrollView {
        let visible = filter_entries(
            &snapshot.recent_entries,
            &snapshot.department_map,
            &self.search,
            &self.range,
            settings,
        );

        match LoadState::of(snapshot) {
            LoadState::Loading => {
                debug!(rows = visible.len(), "Rendering while loading");
                let rows = visible
                    .into_iter()
                    .map(|entry| build_row(entry, &snapshot.department_map, None, settings))
                    .collect();
                PayrollView::Loading { rows }
            }
            LoadState::Ready if visible.is_empty() => PayrollView::Empty,
            LoadState::Ready => {
                let rates = snapshot.user_permitted_departments.as_ref();
                let rows = visible
                    .into_iter()
                    .map(|entry| build_row(entry, &snapshot.department_map, rates, settings))
                    .collect();
                let chart = aggregate_weekly(&snapshot.recent_entries, settings);
                PayrollView::Table { rows, chart }
            }
        }
    }
}

pub fn validate_range(range: &DateRange, today: NaiveDate) -> Result<(), PayrollError> {
    for day in [range.from, range.to].into_iter().flatten() {
        if day > today {
            warn!(%day, %today, "Rejected future date");
            return Err(PayrollError::FutureDate(day));
        }
    }
    if let (Some(from), Some(to)) = (range.from, range.to) {
        if from > to {
            return Err(PayrollError::ReversedRange(from, to));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, DepartmentRate, EntryStatus, LooseDecimal, TimeEntry};
    use crate::payroll::pricing::RateCell;
    use crate::payroll::rows::StatusCell;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: &str, clock_in: DateTime<Utc>, hours: &str, status: EntryStatus, finished: bool) -> TimeEntry {
        TimeEntry {
            id: id.to_string(),
            department_id: "kit".to_string(),
            clock_in,
            clock_out: finished.then(|| clock_in + Duration::hours(8)),
            hours: LooseDecimal::parse(hours),
            status,
            created_at: clock_in,
        }
    }

    fn snapshot(loading: bool, with_rates: bool) -> TimeEntrySnapshot {
        TimeEntrySnapshot {
            recent_entries: vec![
                entry("a", Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(), "45", EntryStatus::Approved, true),
                entry("b", Utc.with_ymd_and_hms(2024, 1, 9, 9, 0, 0).unwrap(), "0", EntryStatus::Approved, false),
                entry("c", Utc.with_ymd_and_hms(2024, 1, 9, 9, 0, 0).unwrap(), "8", EntryStatus::Rejected, true),
            ],
            department_map: [("kit".to_string(), Department { name: "Kitchen".to_string() })].into(),
            user_permitted_departments: with_rates.then(|| {
                [(
                    "kit".to_string(),
                    DepartmentRate {
                        hourly_rate: Some(LooseDecimal::parse("10")),
                    },
                )]
                .into()
            }),
            loading,
        }
    }

    fn history() -> PayrollHistory {
        PayrollHistory::with_filters("", DateRange::new(day(2024, 1, 1), day(2024, 1, 31)))
    }

    #[test]
    fn ready_view_has_priced_rows_and_chart() {
        let view = history().render(&snapshot(false, true), &ReportSettings::default());

        assert_eq!(view.state(), LoadState::Ready);
        let ids: Vec<_> = view.rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(view.rows()[0].total.to_string(), "$450.00");
        assert_eq!(view.rows()[1].status, StatusCell::InProgress);
        assert_eq!(view.chart().len(), 2);
        assert_eq!(view.chart()[1].total_hours, rust_decimal::Decimal::ZERO);
    }

    #[test]
    fn loading_never_prices_rows() {
        let view = history().render(&snapshot(true, true), &ReportSettings::default());

        assert_eq!(view.state(), LoadState::Loading);
        assert_eq!(view.rows().len(), 2);
        assert!(view.rows().iter().all(|r| r.total == RateCell::Pending && r.hourly_rate == RateCell::Pending));
        assert!(view.chart().is_empty());
    }

    #[test]
    fn rates_not_yet_fetched_render_pending() {
        let view = history().render(&snapshot(false, false), &ReportSettings::default());

        assert!(view.rows().iter().all(|r| r.total == RateCell::Pending));
    }

    #[test]
    fn chart_ignores_table_filters() {
        let mut history = history();
        history.set_search("no such thing");

        let view = history.render(&snapshot(false, true), &ReportSettings::default());
        assert_eq!(view, PayrollView::Empty);
        assert_eq!(view.message(), Some(EMPTY_MESSAGE));

        history.set_search("kitchen");
        history.select_range(DateRange::single_day(day(2024, 1, 9)), day(2024, 2, 1)).unwrap();
        let view = history.render(&snapshot(false, true), &ReportSettings::default());
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.chart().len(), 2);
    }

    #[test]
    fn shortcuts_replace_range_close_picker_and_toast() {
        let today = day(2024, 1, 10);
        let mut history = PayrollHistory::new(today);
        let mut toasts: Vec<Toast> = Vec::new();
        history.open_picker();

        history.apply_shortcut(DateShortcut::LastWeek, today, &mut toasts);

        assert!(!history.is_picker_open());
        assert_eq!(history.range(), DateRange::new(day(2024, 1, 1), day(2024, 1, 7)));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, RANGE_APPLIED);
    }

    #[test]
    fn clear_resets_search_and_range() {
        let today = day(2024, 1, 31);
        let mut history = PayrollHistory::with_filters("kitchen", DateRange::unbounded());
        let mut toasts: Vec<Toast> = Vec::new();

        history.clear_filters(today, &mut toasts);

        assert_eq!(history.search(), "");
        assert_eq!(history.range(), DateRange::new(day(2024, 1, 1), today));
        assert_eq!(toasts[0].title, "Filters Cleared");
    }

    #[test]
    fn apply_describes_open_ended_ranges() {
        let today = day(2024, 1, 31);
        let mut history = PayrollHistory::with_filters("", DateRange { from: Some(day(2024, 1, 2)), to: None });
        let mut toasts: Vec<Toast> = Vec::new();
        history.open_picker();

        history.apply_range(today, &mut toasts);

        assert!(!history.is_picker_open());
        assert_eq!(toasts[0].description, "Filtering entries from Jan 02, 2024 to today");
    }

    #[test]
    fn picker_rejects_future_and_reversed_ranges() {
        let today = day(2024, 1, 10);
        let mut history = PayrollHistory::new(today);
        let before = history.range();

        assert_eq!(
            history.select_range(DateRange::single_day(day(2024, 1, 11)), today),
            Err(PayrollError::FutureDate(day(2024, 1, 11)))
        );
        assert_eq!(
            history.select_range(DateRange::new(day(2024, 1, 5), day(2024, 1, 1)), today),
            Err(PayrollError::ReversedRange(day(2024, 1, 5), day(2024, 1, 1)))
        );
        assert_eq!(history.range(), before);
    }
}
