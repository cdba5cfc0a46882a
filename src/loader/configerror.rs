use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ConfigError>
    where T: for<'de> Deserialize<'de> {
    Ok(serde_json::from_value(json_value)?)
}
