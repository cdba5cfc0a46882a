//! Workday arithmetic on top of the cache, with and without overrides.

use chrono::NaiveDate;

use workdaycache::cache::holidaytype::HolidayType;
use workdaycache::cache::sharedworkdaycache::SharedWorkdayCache;
use workdaycache::cache::workdaycache::WorkdayCache;
use workdaycache::time::workdaycalendar::WorkdayCalendar;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn christmas_2024() -> WorkdayCache {
    let mut cache = WorkdayCache::new();
    cache.put(date(2024, 12, 25), false, Some(HolidayType::PublicHoliday), None, Some("Christmas".to_owned()));
    cache.put(date(2024, 12, 26), false, Some(HolidayType::PublicHoliday), None, Some("Boxing Day".to_owned()));
    cache
}

#[test]
fn empty_cache_skips_weekends() {
    let cache = WorkdayCache::new();
    assert_eq!(cache.next_workday(date(2024, 1, 5)), date(2024, 1, 8));
    assert_eq!(cache.previous_workday(date(2024, 1, 8)), date(2024, 1, 5));
    assert!(cache.is_holiday(date(2024, 1, 6)));
    assert!(cache.cache().is_empty());
}

#[test]
fn overrides_are_skipped_when_shifting() {
    let cache = christmas_2024();
    assert_eq!(cache.next_workday(date(2024, 12, 24)), date(2024, 12, 27));
    assert_eq!(cache.shift_n_workday(date(2024, 12, 24), 3), date(2024, 12, 31));
    assert_eq!(cache.shift_n_workday(date(2024, 12, 27), -1), date(2024, 12, 24));
    assert_eq!(cache.shift_n_workday(date(2024, 12, 25), 0), date(2024, 12, 25));
}

#[test]
fn shifting_crosses_into_uninitialized_year() {
    let mut cache = christmas_2024();
    assert_eq!(cache.next_workday(date(2024, 12, 31)), date(2025, 1, 1));

    cache.put(date(2025, 1, 1), false, Some(HolidayType::NationalHoliday), None, None);
    assert_eq!(cache.next_workday(date(2024, 12, 31)), date(2025, 1, 2));
}

#[test]
fn substituted_saturday_counts_as_workday() {
    let mut cache = WorkdayCache::new();
    cache.put(date(2024, 12, 7), true, Some(HolidayType::SubstitutedDay), Some(date(2024, 12, 24)), None);
    assert_eq!(cache.next_workday(date(2024, 12, 6)), date(2024, 12, 7));
    assert!(cache.is_workday(date(2024, 12, 7)));
}

#[test]
fn workdays_between_is_half_open_and_order_agnostic() {
    let cache = christmas_2024();
    assert_eq!(cache.workdays_between(date(2024, 1, 1), date(2024, 1, 8)), 5);
    assert_eq!(cache.workdays_between(date(2024, 1, 8), date(2024, 1, 1)), 5);
    assert_eq!(cache.workdays_between(date(2024, 1, 8), date(2024, 1, 8)), 0);
    assert_eq!(cache.workdays_between(date(2024, 12, 24), date(2024, 12, 31)), 3);
}

#[test]
fn shared_cache_answers_like_the_plain_one() {
    let shared = SharedWorkdayCache::from_cache(christmas_2024());
    let plain = christmas_2024();
    for d in [date(2024, 12, 20), date(2024, 12, 24), date(2024, 12, 28)] {
        assert_eq!(shared.next_workday(d), plain.next_workday(d));
        assert_eq!(shared.previous_workday(d), plain.previous_workday(d));
        assert_eq!(shared.workdays_between(d, date(2025, 1, 10)), plain.workdays_between(d, date(2025, 1, 10)));
    }
}
