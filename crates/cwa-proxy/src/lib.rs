mod app_error;
pub mod cities;
pub mod models;
mod routes;
mod startup;
mod utils;
pub mod weather_data;

pub use app_error::AppError;
pub use cities::{lookup, City, CITIES};
pub use models::*;
pub use routes::*;
pub use startup::*;
pub use utils::*;
pub use weather_data::{CwaClient, WeatherData, THIRTY_SIX_HOUR_DATASET, WEEKLY_DATASET};
