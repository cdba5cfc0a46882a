use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}

#[inline]
pub const fn days_of_year (year: i32) -> u32 {
    if is_leap(year) { 366 } else { 365 }
}

/// First and last calendar day of `year`, or `None` when the year lies
/// outside the range `NaiveDate` can represent.
pub fn year_bounds (year: i32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let last = NaiveDate::from_ymd_opt(year, 12, 31)?;
    Some((first, last))
}

#[inline]
pub fn is_weekend_day (weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Saturday and Sunday are the only non-weekdays. An absent date is never a weekday.
#[inline]
pub fn is_weekday (date: Option<NaiveDate>) -> bool {
    date.is_some_and(|d| !is_weekend_day(d.weekday()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_follow_gregorian_rule() {
        assert!(is_leap(2024));
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
        assert_eq!(days_of_year(2024), 366);
        assert_eq!(days_of_year(2100), 365);
    }

    #[test]
    fn weekday_test_rejects_weekends_and_absent_dates() {
        let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert!(!is_weekday(Some(saturday)));
        assert!(!is_weekday(Some(sunday)));
        assert!(is_weekday(Some(monday)));
        assert!(!is_weekday(None));
    }

    #[test]
    fn year_bounds_outside_chrono_range_is_none() {
        assert!(year_bounds(2024).is_some());
        assert!(year_bounds(i32::MAX).is_none());
    }
}
