use crate::{models::forecast, weather_data};
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use hyper::StatusCode;
use log::error;
use serde_json::json;
use std::borrow::Borrow;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("unsupported city code '{0}'")]
    UnknownCity(String),
    #[error("no forecast data returned for {0}")]
    LocationNotFound(String),
    #[error("failed to get weather data: {0}")]
    WeatherData(#[from] weather_data::Error),
    #[error("failed to normalize forecast: {0}")]
    Forecast(#[from] forecast::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("error handling request: {}", self.to_string());

        let (status, error_kind) = match self.borrow() {
            AppError::UnknownCity(_) => (StatusCode::BAD_REQUEST, "unsupported city"),
            AppError::LocationNotFound(_) => (StatusCode::NOT_FOUND, "not found"),
            AppError::WeatherData(e) => match e {
                weather_data::Error::MissingApiKey => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server configuration error",
                ),
                _ => (StatusCode::BAD_GATEWAY, "upstream error"),
            },
            AppError::Forecast(_) => (StatusCode::BAD_GATEWAY, "upstream error"),
        };

        let body = Json(json!({
            "error": error_kind,
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
