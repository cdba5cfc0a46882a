use chrono::{Days, NaiveDate};

use crate::time::rangeofdates::RangeOfDates;

const ONE_DAY: Days = Days::new(1);

/// Workday arithmetic over any source that can classify a single date.
///
/// Shifting stops at the edge of the representable calendar; the date reached
/// there is returned even if it is not a workday.
pub trait WorkdayCalendar: Send + Sync {
    fn is_workday(&self, d: NaiveDate) -> bool;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        !self.is_workday(d)
    }

    fn shift_n_workday(&self, horizon: NaiveDate, n: i32) -> NaiveDate {
        let shift_one_day: fn(NaiveDate) -> Option<NaiveDate> = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            match shift_one_day(d) {
                Some(next) => d = next,
                None => break
            }
            m -= self.is_workday(d) as u32;
        }
        d
    }

    fn next_workday(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_workday(d, 1)
    }

    fn previous_workday(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_workday(d, -1)
    }

    /// Workdays in the half-open interval `(earlier, later]`, whichever order
    /// the two dates are given in.
    fn workdays_between(&self, d1: NaiveDate, d2: NaiveDate) -> usize {
        let (start, end) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        match start.checked_add_days(ONE_DAY) {
            Some(first) if first <= end => RangeOfDates::new(first, end)
                .iter()
                .filter(|&d| self.is_workday(d))
                .count(),
            _ => 0
        }
    }
}
