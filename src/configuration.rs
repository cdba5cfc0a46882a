use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::cache::sharedworkdaycache::SharedWorkdayCache;
use crate::cache::workdaycache::WorkdayCache;
use crate::loader::configerror::ConfigError;
use crate::loader::holidayoverride::HolidayOverride;

/// Startup contents of a cache: years to materialize, then overrides to apply.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CacheConfiguration {
    #[serde(default)]
    initial_years: Vec<i32>,
    #[serde(default)]
    overrides: Vec<HolidayOverride>
}

impl CacheConfiguration {
    pub fn new(initial_years: Vec<i32>, overrides: Vec<HolidayOverride>) -> CacheConfiguration {
        CacheConfiguration { initial_years, overrides }
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<CacheConfiguration, ConfigError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let configuration: CacheConfiguration = serde_json::from_reader(reader)?;
        info!(
            path = %file_path.as_ref().display(),
            years = configuration.initial_years.len(),
            overrides = configuration.overrides.len(),
            "cache configuration loaded"
        );
        Ok(configuration)
    }

    pub fn initial_years(&self) -> &[i32] {
        &self.initial_years
    }

    pub fn overrides(&self) -> &[HolidayOverride] {
        &self.overrides
    }

    /// Years first, in listed order, then overrides in listed order.
    pub fn build(&self) -> WorkdayCache {
        let mut cache = WorkdayCache::new();
        for &year in self.initial_years.iter() {
            cache.init_year(year);
        }
        cache.apply_all(self.overrides.iter().cloned());
        cache
    }

    pub fn build_shared(&self) -> SharedWorkdayCache {
        SharedWorkdayCache::from_cache(self.build())
    }
}
