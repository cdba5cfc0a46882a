use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace, warn};

use crate::cache::dayrecord::DayRecord;
use crate::cache::holidaytype::HolidayType;
use crate::cache::yearsummary::YearSummary;
use crate::loader::holidayoverride::HolidayOverride;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::is_weekday;
use crate::time::workdaycalendar::WorkdayCalendar;

/// Days of one year keyed by date, ascending.
pub type YearMap = BTreeMap<NaiveDate, DayRecord>;

/// In-memory workday calendar: year → (date → [`DayRecord`]).
///
/// A year is either absent or holds a record for every one of its days.
/// Years are materialized by [`WorkdayCache::init_year`], either directly or
/// lazily by the first [`WorkdayCache::put`] that touches them.
///
/// Mutation needs `&mut self`; share a cache between threads through
/// [`SharedWorkdayCache`](crate::cache::sharedworkdaycache::SharedWorkdayCache).
#[derive(Debug, Default, Clone)]
pub struct WorkdayCache {
    cache: HashMap<i32, YearMap>
}

impl WorkdayCache {
    pub fn new() -> WorkdayCache {
        WorkdayCache { cache: HashMap::new() }
    }

    pub fn cache(&self) -> &HashMap<i32, YearMap> {
        &self.cache
    }

    /// Fills `year` with default weekday/weekend records.
    ///
    /// An already initialized year is rebuilt from scratch, so every override
    /// previously stored for it is lost. `None` and years `NaiveDate` cannot
    /// represent leave the cache untouched.
    pub fn init_year(&mut self, year: impl Into<Option<i32>>) {
        let Some(year) = year.into() else {
            return;
        };
        let Some(range) = RangeOfDates::of_year(year) else {
            warn!(year, "year outside the supported calendar range, ignored");
            return;
        };

        let days: YearMap = range
            .iter()
            .map(|d| (d, DayRecord::default_for(d)))
            .collect();
        if self.cache.insert(year, days).is_some() {
            debug!(year, "year re-initialized, previous overrides discarded");
        } else {
            debug!(year, "year initialized");
        }
    }

    /// Stores exactly the given classification for `date`, replacing whatever
    /// record it had. The date's year is initialized first if it is absent.
    /// A `None` date is ignored.
    pub fn put(&mut self,
               date: impl Into<Option<NaiveDate>>,
               is_workday: bool,
               holiday_type: Option<HolidayType>,
               substituted_day: Option<NaiveDate>,
               description: Option<String>) {
        let Some(date) = date.into() else {
            return;
        };
        let year = date.year();
        if !self.cache.contains_key(&year) {
            self.init_year(year);
        }

        let record = DayRecord::new(date, is_workday, holiday_type, substituted_day, description);
        trace!(%date, is_workday, holiday_type = ?record.holiday_type(), "day overridden");
        self.cache.entry(year).or_default().insert(date, record);
    }

    /// Two-field form of [`WorkdayCache::put`]: non-workdays are tagged `Weekend`.
    #[deprecated(note = "use `put` with an explicit holiday type")]
    pub fn put_legacy(&mut self, date: impl Into<Option<NaiveDate>>, is_workday: bool) {
        let holiday_type = if is_workday { None } else { Some(HolidayType::Weekend) };
        self.put(date, is_workday, holiday_type, None, None);
    }

    pub fn apply(&mut self, holiday_override: HolidayOverride) {
        let HolidayOverride { date, is_workday, holiday_type, substituted_day, description } = holiday_override;
        self.put(date, is_workday, holiday_type, substituted_day, description);
    }

    pub fn apply_all<I>(&mut self, overrides: I)
        where I: IntoIterator<Item = HolidayOverride> {
        for holiday_override in overrides {
            self.apply(holiday_override);
        }
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.cache.contains_key(&year)
    }

    /// Initialized years, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        let mut years: Vec<i32> = self.cache.keys().copied().collect();
        years.sort_unstable();
        years.into_iter()
    }

    pub fn year(&self, year: i32) -> Option<&YearMap> {
        self.cache.get(&year)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.cache.get(&date.year()).and_then(|days| days.get(&date))
    }

    pub fn year_summary(&self, year: i32) -> Option<YearSummary> {
        self.year(year).map(|days| YearSummary::from_days(year, days.values()))
    }
}

impl WorkdayCalendar for WorkdayCache {
    /// Cached classification, or the default weekday rule for years not yet
    /// initialized. Reading never materializes a year.
    fn is_workday(&self, d: NaiveDate) -> bool {
        self.get(d).map_or_else(|| is_weekday(Some(d)), |record| record.is_workday())
    }
}
