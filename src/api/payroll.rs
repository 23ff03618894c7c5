use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::config::Config;
use crate::model::{TimeEntry, TimeEntrySnapshot};
use crate::payroll::print::CapturedPrints;
use crate::payroll::rows::BadgeVariant;
use crate::payroll::weekly::{ChartSeries, chart_series};
use crate::payroll::{
    DateRange, DateShortcut, LoadState, PayrollError, PayrollHistory, PayrollView, RateCell,
    ReportRow, ReportSettings, Toast, WeekStart, WeeklyAggregate, aggregate_weekly, print_view,
};

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRequest {
    pub snapshot: TimeEntrySnapshot,

    #[schema(example = "kitchen")]
    #[serde(default)]
    pub search: String,

    /// Defaults to the last 30 days when omitted
    pub range: Option<DateRange>,

    #[schema(example = "sunday")]
    pub week_start: Option<WeekStart>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRequest {
    pub entries: Vec<TimeEntry>,
    #[schema(example = "monday")]
    pub week_start: Option<WeekStart>,
}

#[derive(Serialize, ToSchema)]
pub struct CellResponse {
    #[schema(example = "amount")]
    pub kind: String,
    #[schema(example = "$148.00")]
    pub text: String,
}

impl From<RateCell> for CellResponse {
    fn from(cell: RateCell) -> Self {
        Self {
            kind: cell.kind().to_string(),
            text: cell.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "APPROVED")]
    pub text: String,
    /// Absent for shifts still in progress
    pub variant: Option<BadgeVariant>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRowResponse {
    #[schema(example = "clx1")]
    pub id: String,
    #[schema(example = "Jan 01, 2024")]
    pub date: String,
    #[schema(example = "Kitchen")]
    pub department: String,
    #[schema(example = "09:00 AM")]
    pub clock_in: String,
    #[schema(example = "05:00 PM")]
    pub clock_out: String,
    #[schema(example = "8.00h")]
    pub hours: String,
    pub hourly_rate: CellResponse,
    pub total: CellResponse,
    pub status: StatusResponse,
}

impl From<&ReportRow> for HistoryRowResponse {
    fn from(row: &ReportRow) -> Self {
        Self {
            id: row.id.clone(),
            date: row.date.clone(),
            department: row.department.clone(),
            clock_in: row.clock_in.clone(),
            clock_out: row.clock_out.clone(),
            hours: row.hours.clone(),
            hourly_rate: row.hourly_rate.into(),
            total: row.total.into(),
            status: StatusResponse {
                text: row.status.text(),
                variant: row.status.variant(),
            },
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct HistoryResponse {
    pub state: LoadState,
    pub range: DateRange,
    pub rows: Vec<HistoryRowResponse>,
    pub chart: Vec<WeeklyAggregate>,
    pub series: Vec<ChartSeries>,
    #[schema(example = json!(null))]
    pub message: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct WeeklyResponse {
    pub chart: Vec<WeeklyAggregate>,
    pub series: Vec<ChartSeries>,
}

#[derive(Serialize, ToSchema)]
pub struct ShortcutResponse {
    pub shortcut: DateShortcut,
    #[schema(example = "2024-01-01", format = "date", value_type = Option<String>)]
    pub from: Option<NaiveDate>,
    #[schema(example = "2024-01-07", format = "date", value_type = Option<String>)]
    pub to: Option<NaiveDate>,
    pub toast: Toast,
}

fn settings_for(config: &Config, week_start: Option<WeekStart>) -> ReportSettings {
    let settings = config.report_settings();
    match week_start {
        Some(week_start) => settings.with_week_start(week_start),
        None => settings,
    }
}

fn render_history(
    request: &HistoryRequest,
    settings: &ReportSettings,
) -> Result<(PayrollView, DateRange), PayrollError> {
    let today = settings.today();
    let mut history = PayrollHistory::new(today);
    if let Some(range) = request.range {
        history.select_range(range, today)?;
    }
    history.set_search(request.search.as_str());

    debug!(
        entries = request.snapshot.recent_entries.len(),
        loading = request.snapshot.loading,
        "Rendering payroll history"
    );
    Ok((history.render(&request.snapshot, settings), history.range()))
}

/* =========================
Payroll history table + chart
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/payroll/history",
    request_body = HistoryRequest,
    responses(
        (status = 200, description = "Filtered rows and weekly chart", body = HistoryResponse),
        (status = 400, description = "Malformed body or invalid date range", body = Object, example = json!({
            "message": "2031-01-01 is in the future"
        }))
    ),
    tag = "Payroll"
)]
pub async fn payroll_history(
    config: web::Data<Config>,
    payload: web::Json<HistoryRequest>,
) -> actix_web::Result<impl Responder> {
    let settings = settings_for(&config, payload.week_start);
    let (view, range) = render_history(&payload, &settings)?;

    Ok(HttpResponse::Ok().json(HistoryResponse {
        state: view.state(),
        range,
        rows: view.rows().iter().map(HistoryRowResponse::from).collect(),
        chart: view.chart().to_vec(),
        series: chart_series(),
        message: view.message().map(str::to_string),
    }))
}

/* =========================
Weekly regular/overtime series
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/payroll/weekly",
    request_body = WeeklyRequest,
    responses(
        (status = 200, description = "Weekly regular and overtime hours", body = WeeklyResponse),
        (status = 400, description = "Malformed body")
    ),
    tag = "Payroll"
)]
pub async fn weekly_hours(
    config: web::Data<Config>,
    payload: web::Json<WeeklyRequest>,
) -> actix_web::Result<impl Responder> {
    let settings = settings_for(&config, payload.week_start);

    Ok(HttpResponse::Ok().json(WeeklyResponse {
        chart: aggregate_weekly(&payload.entries, &settings),
        series: chart_series(),
    }))
}

/* =========================
Date range shortcuts
========================= */
#[utoipa::path(
    get,
    path = "/api/v1/payroll/shortcuts/{shortcut}",
    params(
        ("shortcut", description = "today | last-week | last-30-days | last-90-days")
    ),
    responses(
        (status = 200, body = ShortcutResponse),
        (status = 404, description = "Unknown shortcut", body = Object, example = json!({
            "message": "unknown date shortcut 'yesterday'"
        }))
    ),
    tag = "Payroll"
)]
pub async fn date_shortcut(
    config: web::Data<Config>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let name = path.into_inner();
    let shortcut = DateShortcut::from_str(&name).map_err(|_| PayrollError::UnknownShortcut(name))?;

    let today = config.report_settings().today();
    let range = shortcut.resolve(today);
    info!(%shortcut, "Resolved date shortcut");

    Ok(HttpResponse::Ok().json(ShortcutResponse {
        shortcut,
        from: range.from,
        to: range.to,
        toast: shortcut.toast(today),
    }))
}

/* =========================
Printable history
========================= */
#[utoipa::path(
    post,
    path = "/api/v1/payroll/print",
    request_body = HistoryRequest,
    responses(
        (status = 200, description = "Print-ready HTML document", content_type = "text/html", body = String),
        (status = 204, description = "Nothing to print"),
        (status = 400, description = "Malformed body or invalid date range")
    ),
    tag = "Payroll"
)]
pub async fn print_history(
    config: web::Data<Config>,
    payload: web::Json<HistoryRequest>,
) -> actix_web::Result<impl Responder> {
    let settings = settings_for(&config, payload.week_start);
    let (view, _) = render_history(&payload, &settings)?;

    let mut target = CapturedPrints::default();
    if !print_view(&view, &mut target, &config.print_base_url) {
        return Ok(HttpResponse::NoContent().finish());
    }

    match target.printed.pop() {
        Some(document) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(document)),
        None => Ok(HttpResponse::NoContent().finish()),
    }
}
