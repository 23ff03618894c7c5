//! Payroll history: filtering, pricing and weekly overtime aggregation over
//! a snapshot of time entries.

pub mod error;
pub mod filter;
pub mod notify;
pub mod pricing;
pub mod print;
pub mod rows;
pub mod settings;
pub mod shortcuts;
pub mod view;
pub mod weekly;

pub use error::PayrollError;
pub use filter::{DateRange, filter_entries};
pub use notify::{Toast, ToastSink};
pub use pricing::RateCell;
pub use print::{PrintDocument, PrintTarget, print_view};
pub use rows::{ReportRow, StatusCell, build_row};
pub use settings::{ReportSettings, WeekStart};
pub use shortcuts::DateShortcut;
pub use view::{LoadState, PayrollHistory, PayrollView};
pub use weekly::{WeeklyAggregate, aggregate_weekly};
