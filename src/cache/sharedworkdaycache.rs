use std::sync::{
    Arc,
    PoisonError,
    RwLock,
    RwLockReadGuard,
    RwLockWriteGuard
};

use chrono::NaiveDate;

use crate::cache::dayrecord::DayRecord;
use crate::cache::holidaytype::HolidayType;
use crate::cache::workdaycache::{WorkdayCache, YearMap};
use crate::cache::yearsummary::YearSummary;
use crate::loader::holidayoverride::HolidayOverride;
use crate::time::workdaycalendar::WorkdayCalendar;

/// Cloneable, thread-safe handle to one [`WorkdayCache`].
///
/// Single writer, many readers: `init_year` and `put` hold the write lock for
/// the whole update, so readers see a year either before or after it is
/// rebuilt, never in between. Readers that enumerate keep a read guard via
/// [`SharedWorkdayCache::read`] or take an owned copy with
/// [`SharedWorkdayCache::year_snapshot`].
///
/// A poisoned lock is recovered: no operation leaves the cache half-updated
/// before it can panic.
#[derive(Debug, Default, Clone)]
pub struct SharedWorkdayCache {
    inner: Arc<RwLock<WorkdayCache>>
}

impl SharedWorkdayCache {
    pub fn new() -> SharedWorkdayCache {
        SharedWorkdayCache::from_cache(WorkdayCache::new())
    }

    pub fn from_cache(cache: WorkdayCache) -> SharedWorkdayCache {
        SharedWorkdayCache { inner: Arc::new(RwLock::new(cache)) }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, WorkdayCache> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, WorkdayCache> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn init_year(&self, year: impl Into<Option<i32>>) {
        self.write().init_year(year);
    }

    pub fn put(&self,
               date: impl Into<Option<NaiveDate>>,
               is_workday: bool,
               holiday_type: Option<HolidayType>,
               substituted_day: Option<NaiveDate>,
               description: Option<String>) {
        self.write().put(date, is_workday, holiday_type, substituted_day, description);
    }

    #[deprecated(note = "use `put` with an explicit holiday type")]
    #[allow(deprecated)]
    pub fn put_legacy(&self, date: impl Into<Option<NaiveDate>>, is_workday: bool) {
        self.write().put_legacy(date, is_workday);
    }

    /// Applies all overrides under a single write lock.
    pub fn apply_all<I>(&self, overrides: I)
        where I: IntoIterator<Item = HolidayOverride> {
        self.write().apply_all(overrides);
    }

    pub fn get(&self, date: NaiveDate) -> Option<DayRecord> {
        self.read().get(date).cloned()
    }

    pub fn year_snapshot(&self, year: i32) -> Option<YearMap> {
        self.read().year(year).cloned()
    }

    pub fn year_summary(&self, year: i32) -> Option<YearSummary> {
        self.read().year_summary(year)
    }

    pub fn years(&self) -> Vec<i32> {
        self.read().years().collect()
    }
}

impl WorkdayCalendar for SharedWorkdayCache {
    fn is_workday(&self, d: NaiveDate) -> bool {
        self.read().is_workday(d)
    }

    fn workdays_between(&self, d1: NaiveDate, d2: NaiveDate) -> usize {
        self.read().workdays_between(d1, d2)
    }

    fn shift_n_workday(&self, horizon: NaiveDate, n: i32) -> NaiveDate {
        self.read().shift_n_workday(horizon, n)
    }
}


#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn writers_on_other_threads_are_visible_to_clones() {
        let shared = SharedWorkdayCache::new();
        let handles: Vec<_> = (2020..2024i32)
            .map(|year| {
                let cache = shared.clone();
                thread::spawn(move || cache.init_year(year))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.years(), vec![2020, 2021, 2022, 2023]);
    }

    #[test]
    fn readers_never_see_a_partial_year() {
        let shared = SharedWorkdayCache::new();
        shared.init_year(2024);
        let writer = {
            let cache = shared.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    cache.init_year(2024);
                }
            })
        };
        for _ in 0..50 {
            assert_eq!(shared.year_snapshot(2024).map(|days| days.len()), Some(366));
        }
        writer.join().unwrap();
    }
}
