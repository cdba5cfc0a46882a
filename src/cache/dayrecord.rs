use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

use crate::cache::holidaytype::HolidayType;
use crate::time::utility::is_weekday;

/// Classification of one calendar date.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    date: NaiveDate,
    is_workday: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    holiday_type: Option<HolidayType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    substituted_day: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>
}

impl DayRecord {
    pub fn new(date: NaiveDate,
               is_workday: bool,
               holiday_type: Option<HolidayType>,
               substituted_day: Option<NaiveDate>,
               description: Option<String>) -> DayRecord {
        DayRecord {
            date,
            is_workday,
            holiday_type,
            substituted_day,
            description
        }
    }

    /// Default record used when a year is initialized: weekdays are workdays,
    /// Saturdays and Sundays are `Weekend` non-workdays.
    pub fn default_for(date: NaiveDate) -> DayRecord {
        let is_workday = is_weekday(Some(date));
        let holiday_type = if is_workday { None } else { Some(HolidayType::Weekend) };
        DayRecord::new(date, is_workday, holiday_type, None, None)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_workday(&self) -> bool {
        self.is_workday
    }

    pub fn holiday_type(&self) -> Option<HolidayType> {
        self.holiday_type
    }

    pub fn substituted_day(&self) -> Option<NaiveDate> {
        self.substituted_day
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
