use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use utoipa::ToSchema;

pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "message": "CWA city weather proxy",
        "endpoints": {
            "cityWeather": "/api/weather/{city}",
            "cityWeatherWeek": "/api/weather/{city}/week",
            "health": "/api/health",
            "docs": "/docs",
        },
    }))
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Health {
    pub status: String,
    pub timestamp: String,
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = OK, description = "Service is up", body = Health)
    ))]
pub async fn health() -> Json<Health> {
    Json(Health {
        status: String::from("OK"),
        timestamp: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default(),
    })
}
