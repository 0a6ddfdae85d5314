use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    cities::{self, City},
    models::{
        datastore::{Location, Records},
        forecast::{self, CityWeather, WeeklyWeather},
    },
    AppError, AppState,
};

/// Success envelope every forecast endpoint responds with.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Envelope {
            success: true,
            data,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/weather/{city}",
    params(
        ("city" = String, Path, description = "City code, e.g. taipei or kaohsiung")
    ),
    responses(
        (status = OK, description = "Successfully retrieved the 36-hour forecast", body = Envelope<CityWeather>),
        (status = BAD_REQUEST, description = "Unknown city code"),
        (status = NOT_FOUND, description = "Upstream returned no data for the city"),
        (status = INTERNAL_SERVER_ERROR, description = "CWA_API_KEY is not configured"),
        (status = BAD_GATEWAY, description = "CWA datastore failed or returned an unexpected payload")
    ))]
pub async fn city_weather(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<Json<Envelope<CityWeather>>, AppError> {
    let city_record = cities::lookup(&city).ok_or_else(|| AppError::UnknownCity(city))?;
    let records = state
        .weather_data
        .thirty_six_hour(city_record.query_names())
        .await?;
    let update_time = records.dataset_description.clone();
    let location = select_location(records, city_record)?;
    let forecasts = forecast::flatten_periods(&location)?;

    Ok(Json(Envelope::new(CityWeather {
        city: location.location_name,
        city_code: city_record.code.to_string(),
        update_time,
        forecasts,
    })))
}

#[utoipa::path(
    get,
    path = "/api/weather/{city}/week",
    params(
        ("city" = String, Path, description = "City code, e.g. taipei or kaohsiung")
    ),
    responses(
        (status = OK, description = "Successfully retrieved the weekly forecast", body = Envelope<WeeklyWeather>),
        (status = BAD_REQUEST, description = "Unknown city code"),
        (status = NOT_FOUND, description = "Upstream returned no data for the city"),
        (status = INTERNAL_SERVER_ERROR, description = "CWA_API_KEY is not configured"),
        (status = BAD_GATEWAY, description = "CWA datastore failed or returned an unexpected payload")
    ))]
pub async fn city_week(
    State(state): State<Arc<AppState>>,
    Path(city): Path<String>,
) -> Result<Json<Envelope<WeeklyWeather>>, AppError> {
    let city_record = cities::lookup(&city).ok_or_else(|| AppError::UnknownCity(city))?;
    let records = state.weather_data.weekly(city_record.query_names()).await?;
    let location = select_location(records, city_record)?;
    let days = forecast::daily_forecast(&location)?;

    Ok(Json(Envelope::new(WeeklyWeather::assemble(
        location.location_name,
        city_record.code.to_string(),
        days,
    ))))
}

fn select_location(records: Records, city: &City) -> Result<Location, AppError> {
    records
        .into_locations()
        .into_iter()
        .find(|location| city.matches(&location.location_name))
        .ok_or_else(|| AppError::LocationNotFound(city.name.to_string()))
}
