use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::Method;
use log::info;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    city_weather, city_week, health, index_handler, models, routes,
    weather_data::{CwaClient, WeatherData},
    Envelope,
};

#[derive(Clone)]
pub struct AppState {
    pub weather_data: Arc<dyn WeatherData>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::home::get::health,
        routes::weather::forecast_routes::city_weather,
        routes::weather::forecast_routes::city_week,
    ),
    components(
        schemas(
            routes::home::get::Health,
            models::forecast::CityWeather,
            models::forecast::ForecastPeriod,
            models::forecast::WeeklyWeather,
            models::forecast::DailyForecast,
            Envelope<models::forecast::CityWeather>,
            Envelope<models::forecast::WeeklyWeather>,
        )
    ),
    tags(
        (name = "cwa weather proxy api", description = "a RESTful proxy over the CWA open-data forecasts for Taiwan's counties and cities")
    )
)]
struct ApiDoc;

pub fn build_app_state(base_url: String, api_key: Option<String>) -> Result<AppState, anyhow::Error> {
    let weather_data = Arc::new(
        CwaClient::new(base_url, api_key)
            .map_err(|e| anyhow!("error setting up CWA client: {}", e))?,
    );
    Ok(AppState { weather_data })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        // allow `GET` and `POST` when accessing the resource
        .allow_methods([Method::GET, Method::POST])
        // allow requests from any origin
        .allow_origin(Any);
    Router::new()
        .route("/api/health", get(health))
        .route("/api/weather/{city}", get(city_weather))
        .route("/api/weather/{city}/week", get(city_week))
        .layer(middleware::from_fn(log_request))
        .route("/", get(index_handler))
        .with_state(Arc::new(app_state))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
