use chrono::NaiveDate;
use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum PayrollError {
    #[display(fmt = "date range starts after it ends ({} > {})", _0, _1)]
    ReversedRange(NaiveDate, NaiveDate),

    #[display(fmt = "{} is in the future", _0)]
    FutureDate(NaiveDate),

    #[display(fmt = "unknown date shortcut '{}'", _0)]
    UnknownShortcut(String),
}

impl std::error::Error for PayrollError {}
