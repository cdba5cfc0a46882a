use std::fmt;

use serde::{
    Serialize,
    Deserialize
};

/// Why a date is not a workday.
///
/// The cache assigns `Weekend` itself when it initializes a year; every other
/// member is supplied by the caller and stored as-is.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayType {
    Weekend,
    PublicHoliday,
    NationalHoliday,
    ReligiousHoliday,
    BankHoliday,
    SubstitutedDay
}

impl HolidayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayType::Weekend          => "WEEKEND",
            HolidayType::PublicHoliday    => "PUBLIC_HOLIDAY",
            HolidayType::NationalHoliday  => "NATIONAL_HOLIDAY",
            HolidayType::ReligiousHoliday => "RELIGIOUS_HOLIDAY",
            HolidayType::BankHoliday      => "BANK_HOLIDAY",
            HolidayType::SubstitutedDay   => "SUBSTITUTED_DAY"
        }
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
