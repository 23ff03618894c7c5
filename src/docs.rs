use crate::api::payroll::{
    CellResponse, HistoryRequest, HistoryResponse, HistoryRowResponse, ShortcutResponse,
    StatusResponse, WeeklyRequest, WeeklyResponse,
};
use crate::model::{Department, DepartmentRate, EntryStatus, TimeEntry, TimeEntrySnapshot};
use crate::payroll::notify::Toast;
use crate::payroll::rows::BadgeVariant;
use crate::payroll::weekly::ChartSeries;
use crate::payroll::{DateRange, DateShortcut, LoadState, WeekStart, WeeklyAggregate};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payroll History API",
        version = "1.0.0",
        description = r#"
## Payroll & History

Turns a snapshot of an employee's recent time entries into what the payroll
history screen shows.

### 🔹 Key Features
- **History table**
  - Approved entries only, filtered by date range and free-text search
  - Hourly rate and pay total per row, `N/A` when no rate is on file
- **Weekly chart**
  - Regular hours (up to 40h) and overtime hours per week
- **Date shortcuts**
  - Today, last week, last 30 and 90 days
- **Print**
  - Print-ready HTML document of the current table

### 📦 Data
The service stores nothing. Every request carries the entries, departments
and permitted-department rates it should work on.

---
Built with **Rust**, **Actix Web** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::payroll::payroll_history,
        crate::api::payroll::weekly_hours,
        crate::api::payroll::date_shortcut,
        crate::api::payroll::print_history
    ),
    components(
        schemas(
            HistoryRequest,
            HistoryResponse,
            HistoryRowResponse,
            CellResponse,
            StatusResponse,
            WeeklyRequest,
            WeeklyResponse,
            ShortcutResponse,
            TimeEntrySnapshot,
            TimeEntry,
            EntryStatus,
            Department,
            DepartmentRate,
            DateRange,
            DateShortcut,
            WeekStart,
            LoadState,
            BadgeVariant,
            WeeklyAggregate,
            ChartSeries,
            Toast
        )
    ),
    tags(
        (name = "Payroll", description = "Payroll history APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_payroll_path() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/v1/payroll/history",
            "/api/v1/payroll/weekly",
            "/api/v1/payroll/shortcuts/{shortcut}",
            "/api/v1/payroll/print",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
