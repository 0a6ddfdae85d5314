use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use time::{macros::format_description, PrimitiveDateTime};
use utoipa::ToSchema;

use crate::models::datastore::Location;

/// Element whose time series defines iteration order and period boundaries.
pub const DRIVER_ELEMENT: &str = "Wx";
/// Rendered when a temperature is absent for a period.
pub const MISSING_TEMP: &str = "--";
/// Days kept in the weekly window after the current one.
pub const FUTURE_DAYS: usize = 7;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("weather element '{0}' is missing from the upstream payload")]
    ElementNotFound(String),
    #[error("upstream payload contains no forecast periods")]
    EmptyPayload,
    #[error("could not derive a date from period start time '{0}'")]
    TimeParse(String),
}

/// 36-hour forecast for one city, one record per upstream period.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityWeather {
    pub city: String,
    pub city_code: String,
    pub update_time: Option<String>,
    pub forecasts: Vec<ForecastPeriod>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub start_time: String,
    pub end_time: String,
    pub weather: String,
    pub rain: String,
    pub min_temp: String,
    pub max_temp: String,
    pub comfort: String,
    pub wind_speed: String,
}

/// Weekly forecast for one city, collapsed to one record per calendar day.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyWeather {
    pub city: String,
    pub city_code: String,
    pub current: Option<DailyForecast>,
    pub week: Vec<DailyForecast>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyForecast {
    pub date: String,
    pub weather: String,
    pub rain: String,
    pub min_temp: String,
    pub max_temp: String,
    pub avg_temp: String,
}

impl WeeklyWeather {
    /// Slices the normalized days into the current day plus the fixed
    /// seven-day window that follows; anything further out is dropped.
    pub fn assemble(city: String, city_code: String, days: Vec<DailyForecast>) -> Self {
        let mut days = days.into_iter();
        let current = days.next();
        WeeklyWeather {
            city,
            city_code,
            current,
            week: days.take(FUTURE_DAYS).collect(),
        }
    }
}

/// Flattens the 36-hour dataset into one record per driver period. Sibling
/// series are read positionally; entries past a series' end count as absent.
pub fn flatten_periods(location: &Location) -> Result<Vec<ForecastPeriod>, Error> {
    let driver = location
        .element(DRIVER_ELEMENT)
        .ok_or_else(|| Error::ElementNotFound(DRIVER_ELEMENT.to_string()))?;
    if driver.time.is_empty() {
        return Err(Error::EmptyPayload);
    }

    let mut periods = Vec::with_capacity(driver.time.len());
    for (index, slot) in driver.time.iter().enumerate() {
        periods.push(ForecastPeriod {
            start_time: slot.start_time.clone(),
            end_time: slot.end_time.clone(),
            weather: slot.value().unwrap_or_default().to_string(),
            rain: format!("{}%", value_at(location, "PoP", index).unwrap_or("0")),
            min_temp: temp_or_placeholder(value_at(location, "MinT", index)),
            max_temp: temp_or_placeholder(value_at(location, "MaxT", index)),
            comfort: value_at(location, "CI", index).unwrap_or_default().to_string(),
            wind_speed: value_at(location, "WS", index).unwrap_or_default().to_string(),
        });
    }
    Ok(periods)
}

/// Collapses the weekly dataset to one record per calendar day, in driver
/// order: the first period of each day wins, later periods of the same day
/// are skipped. The average temperature is the upstream `T` value when one
/// is present, otherwise the rounded mean of the two bounds.
pub fn daily_forecast(location: &Location) -> Result<Vec<DailyForecast>, Error> {
    let driver = location
        .element(DRIVER_ELEMENT)
        .ok_or_else(|| Error::ElementNotFound(DRIVER_ELEMENT.to_string()))?;
    if driver.time.is_empty() {
        return Err(Error::EmptyPayload);
    }

    let mut seen = HashSet::new();
    let mut days = Vec::new();
    for (index, slot) in driver.time.iter().enumerate() {
        let date = day_key(&slot.start_time)?;
        if !seen.insert(date.clone()) {
            continue;
        }

        let min_temp = temp_or_placeholder(value_at(location, "MinT", index));
        let max_temp = temp_or_placeholder(value_at(location, "MaxT", index));
        let avg_temp = match value_at(location, "T", index) {
            Some(direct) => direct.to_string(),
            None => average_temp(&min_temp, &max_temp),
        };

        days.push(DailyForecast {
            date,
            weather: slot.value().unwrap_or_default().to_string(),
            rain: value_at(location, "PoP12h", index).unwrap_or("0").to_string(),
            min_temp,
            max_temp,
            avg_temp,
        });
    }
    Ok(days)
}

/// Index-aligned read of a sibling series; out-of-range, missing series and
/// blank scalars are all absent.
fn value_at<'a>(location: &'a Location, element: &str, index: usize) -> Option<&'a str> {
    location.element(element)?.time.get(index)?.value()
}

fn temp_or_placeholder(value: Option<&str>) -> String {
    value.map_or_else(|| MISSING_TEMP.to_string(), str::to_string)
}

fn average_temp(min_temp: &str, max_temp: &str) -> String {
    match (min_temp.parse::<f64>(), max_temp.parse::<f64>()) {
        (Ok(low), Ok(high)) => format!("{}", ((low + high) / 2.0).round() as i64),
        _ => MISSING_TEMP.to_string(),
    }
}

/// Truncates an upstream period start time to its calendar day.
fn day_key(start_time: &str) -> Result<String, Error> {
    let cwa_time = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let date_only = format_description!("[year]-[month]-[day]");
    let parsed = PrimitiveDateTime::parse(start_time, &cwa_time)
        .map_err(|_| Error::TimeParse(start_time.to_string()))?;
    parsed
        .date()
        .format(&date_only)
        .map_err(|_| Error::TimeParse(start_time.to_string()))
}
