use std::env;
use std::io;
use std::process::ExitCode;

use chrono::{Datelike, Local};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use workdaycache::cache::holidaytype::HolidayType;
use workdaycache::configuration::CacheConfiguration;

/// RUST_LOG controls the level, `warn` when unset.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let configuration = match env::args().nth(1) {
        Some(config_path) => match CacheConfiguration::from_reader(&config_path) {
            Ok(configuration) => configuration,
            Err(err) => {
                error!(path = %config_path, "{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => CacheConfiguration::new(vec![Local::now().year()], Vec::new())
    };

    let cache = configuration.build();
    info!(years = cache.cache().len(), "workday cache ready");

    for year in cache.years() {
        let Some(summary) = cache.year_summary(year) else {
            continue;
        };
        println!("{}", summary);
        let Some(days) = cache.year(year) else {
            continue;
        };
        for record in days.values().filter(|r| !r.is_workday() && r.holiday_type() != Some(HolidayType::Weekend)) {
            println!("  {}  {:<18} {}",
                     record.date(),
                     record.holiday_type().map_or("-", |t| t.as_str()),
                     record.description().unwrap_or(""));
        }
    }
    ExitCode::SUCCESS
}
