use std::fmt;

use crate::cache::dayrecord::DayRecord;
use crate::cache::holidaytype::HolidayType;

/// Day counts of one initialized year.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct YearSummary {
    pub year: i32,
    pub days: usize,
    pub workdays: usize,
    pub weekends: usize,
    /// Non-workdays tagged with anything but `Weekend`, or untagged.
    pub holidays: usize,
    pub substituted_days: usize
}

impl YearSummary {
    pub fn from_days<'a, I>(year: i32, days: I) -> YearSummary
        where I: IntoIterator<Item = &'a DayRecord> {
        let mut summary = YearSummary {
            year,
            days: 0,
            workdays: 0,
            weekends: 0,
            holidays: 0,
            substituted_days: 0
        };

        for record in days {
            summary.days += 1;
            if record.substituted_day().is_some() {
                summary.substituted_days += 1;
            }
            if record.is_workday() {
                summary.workdays += 1;
            } else if record.holiday_type() == Some(HolidayType::Weekend) {
                summary.weekends += 1;
            } else {
                summary.holidays += 1;
            }
        }
        summary
    }
}

impl fmt::Display for YearSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} days\n\
             - Workdays: {}\n\
             - Weekends: {}\n\
             - Holidays: {}\n\
             - Substituted days: {}",
            self.year,
            self.days,
            self.workdays,
            self.weekends,
            self.holidays,
            self.substituted_days
        )
    }
}
