/// One entry of the city-code table: an opaque short code mapped to the
/// canonical CWA location name, plus the alternate spelling (台 for 臺) some
/// datasets use for a handful of cities.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub code: &'static str,
    pub name: &'static str,
    pub fallback: Option<&'static str>,
}

impl City {
    /// True when `location_name` is the canonical or the fallback spelling.
    pub fn matches(&self, location_name: &str) -> bool {
        self.name == location_name || self.fallback == Some(location_name)
    }

    /// Names sent upstream as `locationName` values, canonical first.
    pub fn query_names(&self) -> Vec<String> {
        let mut names = vec![self.name.to_string()];
        if let Some(fallback) = self.fallback {
            names.push(fallback.to_string());
        }
        names
    }
}

/// All 22 counties and cities the CWA county forecasts cover. Read-only,
/// initialized at process start, no further lifecycle.
pub static CITIES: [City; 22] = [
    City {
        code: "taipei",
        name: "臺北市",
        fallback: Some("台北市"),
    },
    City {
        code: "new_taipei",
        name: "新北市",
        fallback: None,
    },
    City {
        code: "keelung",
        name: "基隆市",
        fallback: None,
    },
    City {
        code: "taoyuan",
        name: "桃園市",
        fallback: None,
    },
    City {
        code: "hsinchu_city",
        name: "新竹市",
        fallback: None,
    },
    City {
        code: "hsinchu_county",
        name: "新竹縣",
        fallback: None,
    },
    City {
        code: "miaoli",
        name: "苗栗縣",
        fallback: None,
    },
    City {
        code: "taichung",
        name: "臺中市",
        fallback: Some("台中市"),
    },
    City {
        code: "changhua",
        name: "彰化縣",
        fallback: None,
    },
    City {
        code: "nantou",
        name: "南投縣",
        fallback: None,
    },
    City {
        code: "yunlin",
        name: "雲林縣",
        fallback: None,
    },
    City {
        code: "chiayi_city",
        name: "嘉義市",
        fallback: None,
    },
    City {
        code: "chiayi_county",
        name: "嘉義縣",
        fallback: None,
    },
    City {
        code: "tainan",
        name: "臺南市",
        fallback: Some("台南市"),
    },
    City {
        code: "kaohsiung",
        name: "高雄市",
        fallback: None,
    },
    City {
        code: "pingtung",
        name: "屏東縣",
        fallback: None,
    },
    City {
        code: "yilan",
        name: "宜蘭縣",
        fallback: None,
    },
    City {
        code: "hualien",
        name: "花蓮縣",
        fallback: None,
    },
    City {
        code: "taitung",
        name: "臺東縣",
        fallback: Some("台東縣"),
    },
    City {
        code: "penghu",
        name: "澎湖縣",
        fallback: None,
    },
    City {
        code: "kinmen",
        name: "金門縣",
        fallback: None,
    },
    City {
        code: "lienchiang",
        name: "連江縣",
        fallback: None,
    },
];

pub fn lookup(code: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.code.eq_ignore_ascii_case(code))
}
