use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};
use tracing::debug;

use crate::cache::holidaytype::HolidayType;
use crate::loader::configerror::{ConfigError, parse_json_value};

/// Authoritative classification of one date, as supplied by a holiday source.
///
/// ```json
/// { "date": "2024-12-25", "is_workday": false,
///   "holiday_type": "PUBLIC_HOLIDAY", "description": "Christmas" }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct HolidayOverride {
    pub date: NaiveDate,
    pub is_workday: bool,
    #[serde(default)]
    pub holiday_type: Option<HolidayType>,
    #[serde(default)]
    pub substituted_day: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>
}

impl HolidayOverride {
    pub fn holiday(date: NaiveDate, holiday_type: HolidayType, description: impl Into<String>) -> HolidayOverride {
        HolidayOverride {
            date,
            is_workday: false,
            holiday_type: Some(holiday_type),
            substituted_day: None,
            description: Some(description.into())
        }
    }

    pub fn workday(date: NaiveDate) -> HolidayOverride {
        HolidayOverride {
            date,
            is_workday: true,
            holiday_type: None,
            substituted_day: None,
            description: None
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32, is_workday: bool) -> Result<HolidayOverride, ConfigError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ConfigError::InvalidDate { year, month, day })?;
        let mut holiday_override = HolidayOverride::workday(date);
        holiday_override.is_workday = is_workday;
        Ok(holiday_override)
    }

    pub fn with_substituted_day(mut self, substituted_day: NaiveDate) -> HolidayOverride {
        self.substituted_day = Some(substituted_day);
        self
    }

    /// Accepts either one override object or an array of them.
    pub fn from_json_value(json_value: serde_json::Value) -> Result<Vec<HolidayOverride>, ConfigError> {
        if json_value.is_array() {
            parse_json_value(json_value)
        } else {
            Ok(vec![parse_json_value(json_value)?])
        }
    }
}

pub fn load_overrides(file_path: impl AsRef<Path>) -> Result<Vec<HolidayOverride>, ConfigError> {
    let file = File::open(file_path.as_ref())?;
    let reader = BufReader::new(file);
    let json_value: serde_json::Value = serde_json::from_reader(reader)?;
    let overrides = HolidayOverride::from_json_value(json_value)?;
    debug!(path = %file_path.as_ref().display(), count = overrides.len(), "holiday overrides loaded");
    Ok(overrides)
}
