use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::{LooseDecimal, PermittedDepartments};

pub const PENDING_PLACEHOLDER: &str = "…";
pub const NOT_APPLICABLE: &str = "N/A";
pub const INVALID: &str = "Invalid";

/// A rate-derived table cell.
///
/// `NotApplicable` means there is nothing to compute from (no rate on file),
/// which is different from a computed `Amount` of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateCell {
    Pending,
    NotApplicable,
    Invalid,
    Amount(Decimal),
}

impl RateCell {
    pub fn kind(&self) -> &'static str {
        match self {
            RateCell::Pending => "pending",
            RateCell::NotApplicable => "not_applicable",
            RateCell::Invalid => "invalid",
            RateCell::Amount(_) => "amount",
        }
    }

    pub fn amount(&self) -> Option<Decimal> {
        match self {
            RateCell::Amount(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for RateCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateCell::Pending => f.write_str(PENDING_PLACEHOLDER),
            RateCell::NotApplicable => f.write_str(NOT_APPLICABLE),
            RateCell::Invalid => f.write_str(INVALID),
            RateCell::Amount(v) => write!(f, "${}", fixed2(*v)),
        }
    }
}

pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Two decimal places, always printed (`8` -> `"8.00"`).
pub fn fixed2(value: Decimal) -> String {
    format!("{:.2}", round2(value))
}

// An empty rate counts as "no rate on file". Zero is a real rate.
fn configured_rate<'a>(rates: &'a PermittedDepartments, department_id: &str) -> Option<&'a LooseDecimal> {
    let rate = rates.get(department_id)?.hourly_rate.as_ref()?;
    if rate.raw().trim().is_empty() {
        return None;
    }
    Some(rate)
}

/// `rates` is `None` while the permitted-department lookup is outstanding.
pub fn hourly_rate_cell(rates: Option<&PermittedDepartments>, department_id: &str) -> RateCell {
    let Some(rates) = rates else {
        return RateCell::Pending;
    };
    match configured_rate(rates, department_id) {
        None => RateCell::NotApplicable,
        Some(rate) => rate.value().map_or(RateCell::Invalid, RateCell::Amount),
    }
}

pub fn total_cell(
    rates: Option<&PermittedDepartments>,
    department_id: &str,
    hours: &LooseDecimal,
) -> RateCell {
    let Some(rates) = rates else {
        return RateCell::Pending;
    };
    let Some(rate) = configured_rate(rates, department_id) else {
        return RateCell::NotApplicable;
    };
    match (rate.value(), hours.value()) {
        (Some(rate), Some(hours)) => rate
            .checked_mul(hours)
            .map_or(RateCell::Invalid, |total| RateCell::Amount(round2(total))),
        _ => RateCell::Invalid,
    }
}
