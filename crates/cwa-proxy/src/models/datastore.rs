use serde::{Deserialize, Serialize};

// datastore payload
// https://opendata.cwa.gov.tw/api/v1/rest/datastore/F-C0032-001?locationName=臺北市
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatastoreResponse {
    #[serde(default)]
    pub success: String,
    pub records: Records,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Records {
    #[serde(default)]
    pub dataset_description: Option<String>,
    /// Locations as the 36-hour dataset nests them.
    #[serde(default)]
    pub location: Vec<Location>,
    /// Location groups as the weekly dataset nests them.
    #[serde(default)]
    pub locations: Vec<LocationGroup>,
}

impl Records {
    /// Flattens both nesting families into one location list.
    pub fn into_locations(self) -> Vec<Location> {
        let mut locations = self.location;
        locations.extend(self.locations.into_iter().flat_map(|group| group.location));
        locations
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationGroup {
    #[serde(default)]
    pub dataset_description: Option<String>,
    #[serde(default)]
    pub locations_name: Option<String>,
    #[serde(default)]
    pub location: Vec<Location>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_name: String,
    #[serde(default)]
    pub weather_element: Vec<WeatherElement>,
}

impl Location {
    pub fn element(&self, name: &str) -> Option<&WeatherElement> {
        self.weather_element
            .iter()
            .find(|element| element.element_name == name)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherElement {
    pub element_name: String,
    #[serde(default)]
    pub time: Vec<TimeEntry>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub start_time: String,
    pub end_time: String,
    /// Scalar carried by the 36-hour dataset.
    #[serde(default)]
    pub parameter: Option<Parameter>,
    /// Scalar list carried by the weekly dataset.
    #[serde(default)]
    pub element_value: Vec<ElementValue>,
}

impl TimeEntry {
    /// First non-blank scalar in this period, whichever family carries it.
    pub fn value(&self) -> Option<&str> {
        if let Some(parameter) = &self.parameter {
            let name = parameter.parameter_name.trim();
            if !name.is_empty() {
                return Some(name);
            }
        }
        self.element_value
            .iter()
            .map(|element_value| element_value.value.trim())
            .find(|value| !value.is_empty())
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub parameter_name: String,
    #[serde(default)]
    pub parameter_unit: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementValue {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub measures: Option<String>,
}
