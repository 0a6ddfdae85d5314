pub mod datastore;
pub mod forecast;

pub use datastore::*;
pub use forecast::{
    CityWeather, DailyForecast, ForecastPeriod, WeeklyWeather, DRIVER_ELEMENT, FUTURE_DAYS,
    MISSING_TEMP,
};
