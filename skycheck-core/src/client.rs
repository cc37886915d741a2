use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::{Condition, Coordinates, Temperature, WeatherSnapshot};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data";

/// Terminal outcomes of a single fetch. Nothing here is retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request rejected with status 400")]
    BadRequest,

    #[error("weather endpoint returned status 404")]
    NotFound,

    #[error("weather request failed with status {0}")]
    ServerError(StatusCode),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("failed to decode weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Unit system requested from the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Standard,
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Standard => "standard",
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

/// Client for the OpenWeather current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at a different base URL, mainly for tests.
    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Fetch the current conditions for one coordinate pair.
    ///
    /// The caller is expected to have verified connectivity beforehand; a
    /// request that never reaches the endpoint surfaces as `Transport`.
    pub async fn fetch(
        &self,
        coords: Coordinates,
        units: Units,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/2.5/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("units", units.as_str().to_string()),
                // The endpoint is queried with `app_id`, not `appid`.
                ("app_id", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                400 => WeatherError::BadRequest,
                404 => WeatherError::NotFound,
                _ => WeatherError::ServerError(status),
            });
        }

        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        let parsed: CurrentResponse = serde_json::from_str(&body)?;
        debug!(%status, location = %parsed.name, "decoded current-conditions response");

        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct WireCondition {
    main: String,
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WireMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct WireWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct WireSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    weather: Vec<WireCondition>,
    main: WireMain,
    wind: WireWind,
    sys: WireSys,
}

impl From<CurrentResponse> for WeatherSnapshot {
    fn from(r: CurrentResponse) -> Self {
        WeatherSnapshot {
            conditions: r
                .weather
                .into_iter()
                .map(|w| Condition {
                    main: w.main,
                    description: w.description,
                    icon_code: w.icon,
                })
                .collect(),
            temperature: Temperature {
                current: r.main.temp,
                min: r.main.temp_min,
                max: r.main.temp_max,
            },
            humidity_pct: r.main.humidity,
            wind_speed: r.wind.speed,
            sunrise: r.sys.sunrise,
            sunset: r.sys.sunset,
            location_name: r.name,
            country_code: r.sys.country,
        }
    }
}
