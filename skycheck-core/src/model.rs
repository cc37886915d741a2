use serde::{Deserialize, Serialize};

/// A single resolved geographic fix.
///
/// Produced once per fetch cycle by the location provider and handed straight
/// to the weather client; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One condition entry from the weather payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub main: String,
    pub description: String,
    pub icon_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub current: f64,
    pub min: f64,
    pub max: f64,
}

/// One complete current-conditions payload for a single query.
///
/// Immutable for the duration of a display cycle; a new fetch supersedes the
/// previous snapshot rather than merging into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub conditions: Vec<Condition>,
    pub temperature: Temperature,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub sunrise: i64,
    pub sunset: i64,
    pub location_name: String,
    pub country_code: String,
}

/// Unit system implied by the device locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Celsius,
    Fahrenheit,
}

impl UnitSystem {
    /// Fahrenheit for the three regions that use it (US, Liberia, Myanmar),
    /// Celsius everywhere else. Accepts bare regions ("US"), locale tags
    /// ("en_IN", "en-US") and environment values ("en_US.UTF-8").
    pub fn from_locale(locale: &str) -> Self {
        match region(locale) {
            Some("US" | "LR" | "MM") => UnitSystem::Fahrenheit,
            _ => UnitSystem::Celsius,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            UnitSystem::Celsius => "°C",
            UnitSystem::Fahrenheit => "°F",
        }
    }
}

/// Region subtag of a locale string, if it carries one.
fn region(locale: &str) -> Option<&str> {
    let tag = locale.split(['.', '@']).next().unwrap_or(locale);
    let last = tag.rsplit(['_', '-']).next().unwrap_or(tag);
    if last.len() == 2 && last.bytes().all(|b| b.is_ascii_uppercase()) {
        Some(last)
    } else {
        None
    }
}
