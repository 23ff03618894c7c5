use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A decimal column as the upstream ORM hands it over.
///
/// Values may come in as JSON numbers or as strings (`"12.50"`), and a
/// misconfigured department can carry garbage such as `"abc"`. The raw text
/// is kept so it can be echoed back, and [`LooseDecimal::value`] tells the
/// caller whether it is usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LooseDecimal {
    raw: String,
    value: Option<Decimal>,
}

impl LooseDecimal {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = parse_decimal(&raw);
        Self { raw, value }
    }

    pub fn value(&self) -> Option<Decimal> {
        self.value
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_numeric(&self) -> bool {
        self.value.is_some()
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

impl From<Decimal> for LooseDecimal {
    fn from(value: Decimal) -> Self {
        Self {
            raw: value.to_string(),
            value: Some(value),
        }
    }
}

impl fmt::Display for LooseDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumeric {
    Number(serde_json::Number),
    Text(String),
}

impl<'de> Deserialize<'de> for LooseDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match RawNumeric::deserialize(deserializer)? {
            RawNumeric::Number(n) => n.to_string(),
            RawNumeric::Text(s) => s,
        };
        Ok(LooseDecimal::parse(raw))
    }
}

impl Serialize for LooseDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}
