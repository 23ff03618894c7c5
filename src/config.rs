use std::env;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use chrono::FixedOffset;
use dotenvy::dotenv;

use crate::payroll::{ReportSettings, WeekStart};

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Rate limiting
    pub rate_api_per_min: u32,

    pub log_dir: String,

    // Report boundaries
    pub utc_offset: FixedOffset,
    pub week_start: WeekStart,

    /// Origin serving `styles.css` for printed pages
    pub print_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let settings = ReportSettings::default();
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            api_prefix: "/api".to_string(),
            rate_api_per_min: 600,
            log_dir: "logs".to_string(),
            utc_offset: settings.utc_offset,
            week_start: settings.week_start,
            print_base_url: "http://localhost:3000".to_string(),
        }
    }
}

fn var_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, env::var(key).ok(), default)
}

fn parse_value<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        let defaults = Self::default();

        let offset_minutes: i32 = parse_var("REPORT_UTC_OFFSET_MINUTES", 0)?;
        let utc_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .with_context(|| format!("REPORT_UTC_OFFSET_MINUTES out of range: {offset_minutes}"))?;

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", defaults.server_addr),
            api_prefix: var_or("API_PREFIX", defaults.api_prefix),
            rate_api_per_min: parse_var("RATE_API_PER_MIN", defaults.rate_api_per_min)?,
            log_dir: var_or("LOG_DIR", defaults.log_dir),
            utc_offset,
            week_start: parse_var("WEEK_STARTS_ON", defaults.week_start)?,
            print_base_url: var_or("PRINT_BASE_URL", defaults.print_base_url),
        })
    }

    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            utc_offset: self.utc_offset,
            week_start: self.week_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_utc_and_sunday_weeks() {
        let config = Config::default();

        assert_eq!(config.report_settings(), ReportSettings::default());
        assert_eq!(config.api_prefix, "/api");
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = parse_value("WEEK_STARTS_ON", Some("tuesday".to_string()), WeekStart::Sunday).unwrap_err();

        assert!(err.to_string().contains("WEEK_STARTS_ON"));
        assert!(err.to_string().contains("tuesday"));
    }

    #[test]
    fn values_are_trimmed_and_parsed() {
        assert_eq!(
            parse_value("WEEK_STARTS_ON", Some(" Monday ".to_string()), WeekStart::Sunday).unwrap(),
            WeekStart::Monday
        );
        assert_eq!(parse_value("RATE_API_PER_MIN", Some("120".to_string()), 600u32).unwrap(), 120);
    }

    #[test]
    fn unset_values_fall_back_to_the_default() {
        assert_eq!(parse_value("RATE_API_PER_MIN", None, 7u32).unwrap(), 7);
    }
}
