use std::sync::{Arc, Once};

use axum::Router;
use cwa_proxy::{app, setup_logger, weather_data, AppState, Records, WeatherData};
use log::LevelFilter;
use mockall::mock;
use serde_json::{json, Value};

pub struct TestApp {
    pub app: Router,
}

static INIT_LOGGER: Once = Once::new();
fn init_logger() {
    INIT_LOGGER.call_once(|| {
        setup_logger().level(LevelFilter::Debug).apply().unwrap();
    });
}

pub fn spawn_app(weather_data: Arc<dyn WeatherData>) -> TestApp {
    init_logger();
    TestApp {
        app: app(AppState { weather_data }),
    }
}

mock! {
    pub WeatherAccess {}
    #[async_trait::async_trait]
    impl WeatherData for WeatherAccess {
        async fn thirty_six_hour(
            &self,
            location_names: Vec<String>,
        ) -> Result<Records, weather_data::Error>;
        async fn weekly(
            &self,
            location_names: Vec<String>,
        ) -> Result<Records, weather_data::Error>;
    }
}

pub fn records_from(payload: Value) -> Records {
    serde_json::from_value(payload).expect("fixture should match the CWA wire format")
}

/// 36-hour payload as the datastore returns it: locations at
/// `records.location`, scalars under `parameter`.
pub fn city_records(location_name: &str) -> Records {
    records_from(json!({
        "datasetDescription": "三十六小時天氣預報",
        "location": [
            {
                "locationName": location_name,
                "weatherElement": [
                    {
                        "elementName": "Wx",
                        "time": [
                            {
                                "startTime": "2024-05-01 12:00:00",
                                "endTime": "2024-05-01 18:00:00",
                                "parameter": { "parameterName": "多雲時晴" }
                            },
                            {
                                "startTime": "2024-05-01 18:00:00",
                                "endTime": "2024-05-02 06:00:00",
                                "parameter": { "parameterName": "陰短暫雨" }
                            }
                        ]
                    },
                    {
                        "elementName": "PoP",
                        "time": [
                            {
                                "startTime": "2024-05-01 12:00:00",
                                "endTime": "2024-05-01 18:00:00",
                                "parameter": { "parameterName": "30", "parameterUnit": "百分比" }
                            },
                            {
                                "startTime": "2024-05-01 18:00:00",
                                "endTime": "2024-05-02 06:00:00",
                                "parameter": { "parameterName": "70", "parameterUnit": "百分比" }
                            }
                        ]
                    },
                    {
                        "elementName": "MinT",
                        "time": [
                            {
                                "startTime": "2024-05-01 12:00:00",
                                "endTime": "2024-05-01 18:00:00",
                                "parameter": { "parameterName": "20", "parameterUnit": "C" }
                            },
                            {
                                "startTime": "2024-05-01 18:00:00",
                                "endTime": "2024-05-02 06:00:00",
                                "parameter": { "parameterName": "19", "parameterUnit": "C" }
                            }
                        ]
                    },
                    {
                        "elementName": "MaxT",
                        "time": [
                            {
                                "startTime": "2024-05-01 12:00:00",
                                "endTime": "2024-05-01 18:00:00",
                                "parameter": { "parameterName": "28", "parameterUnit": "C" }
                            },
                            {
                                "startTime": "2024-05-01 18:00:00",
                                "endTime": "2024-05-02 06:00:00",
                                "parameter": { "parameterName": "24", "parameterUnit": "C" }
                            }
                        ]
                    },
                    {
                        "elementName": "CI",
                        "time": [
                            {
                                "startTime": "2024-05-01 12:00:00",
                                "endTime": "2024-05-01 18:00:00",
                                "parameter": { "parameterName": "舒適" }
                            },
                            {
                                "startTime": "2024-05-01 18:00:00",
                                "endTime": "2024-05-02 06:00:00",
                                "parameter": { "parameterName": "稍有寒意" }
                            }
                        ]
                    }
                ]
            }
        ]
    }))
}

/// Weekly payload as the datastore returns it: location groups under
/// `records.locations`, scalars under `elementValue`. Two periods fall on
/// 2024-05-01 and one on 2024-05-02; no direct average temperature.
pub fn weekly_records(location_name: &str) -> Records {
    records_from(json!({
        "locations": [
            {
                "datasetDescription": "臺灣各縣市鄉鎮未來1週逐12小時天氣預報",
                "locationsName": "臺灣",
                "location": [
                    {
                        "locationName": location_name,
                        "weatherElement": [
                            {
                                "elementName": "Wx",
                                "time": [
                                    {
                                        "startTime": "2024-05-01 06:00:00",
                                        "endTime": "2024-05-01 18:00:00",
                                        "elementValue": [
                                            { "value": "多雲", "measures": "自定義 Wx 單位" },
                                            { "value": "4", "measures": "自定義 Wx 單位" }
                                        ]
                                    },
                                    {
                                        "startTime": "2024-05-01 18:00:00",
                                        "endTime": "2024-05-02 06:00:00",
                                        "elementValue": [
                                            { "value": "陰", "measures": "自定義 Wx 單位" },
                                            { "value": "7", "measures": "自定義 Wx 單位" }
                                        ]
                                    },
                                    {
                                        "startTime": "2024-05-02 06:00:00",
                                        "endTime": "2024-05-02 18:00:00",
                                        "elementValue": [
                                            { "value": "晴", "measures": "自定義 Wx 單位" },
                                            { "value": "1", "measures": "自定義 Wx 單位" }
                                        ]
                                    }
                                ]
                            },
                            {
                                "elementName": "PoP12h",
                                "time": [
                                    {
                                        "startTime": "2024-05-01 06:00:00",
                                        "endTime": "2024-05-01 18:00:00",
                                        "elementValue": [{ "value": "30", "measures": "百分比" }]
                                    },
                                    {
                                        "startTime": "2024-05-01 18:00:00",
                                        "endTime": "2024-05-02 06:00:00",
                                        "elementValue": [{ "value": "20", "measures": "百分比" }]
                                    },
                                    {
                                        "startTime": "2024-05-02 06:00:00",
                                        "endTime": "2024-05-02 18:00:00",
                                        "elementValue": [{ "value": "10", "measures": "百分比" }]
                                    }
                                ]
                            },
                            {
                                "elementName": "MinT",
                                "time": [
                                    {
                                        "startTime": "2024-05-01 06:00:00",
                                        "endTime": "2024-05-01 18:00:00",
                                        "elementValue": [{ "value": "20", "measures": "攝氏度" }]
                                    },
                                    {
                                        "startTime": "2024-05-01 18:00:00",
                                        "endTime": "2024-05-02 06:00:00",
                                        "elementValue": [{ "value": "19", "measures": "攝氏度" }]
                                    },
                                    {
                                        "startTime": "2024-05-02 06:00:00",
                                        "endTime": "2024-05-02 18:00:00",
                                        "elementValue": [{ "value": "18", "measures": "攝氏度" }]
                                    }
                                ]
                            },
                            {
                                "elementName": "MaxT",
                                "time": [
                                    {
                                        "startTime": "2024-05-01 06:00:00",
                                        "endTime": "2024-05-01 18:00:00",
                                        "elementValue": [{ "value": "28", "measures": "攝氏度" }]
                                    },
                                    {
                                        "startTime": "2024-05-01 18:00:00",
                                        "endTime": "2024-05-02 06:00:00",
                                        "elementValue": [{ "value": "27", "measures": "攝氏度" }]
                                    },
                                    {
                                        "startTime": "2024-05-02 06:00:00",
                                        "endTime": "2024-05-02 18:00:00",
                                        "elementValue": [{ "value": "26", "measures": "攝氏度" }]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }
        ]
    }))
}
