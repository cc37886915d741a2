//! Mapping from a weather snapshot to human-readable display fields.

use chrono::{DateTime, Local};

use crate::model::{UnitSystem, WeatherSnapshot};

/// Icon asset shown next to the conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAsset {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl IconAsset {
    /// Name of the drawable asset backing this icon.
    pub fn asset_name(self) -> &'static str {
        match self {
            IconAsset::Sunny => "sunny",
            IconAsset::Cloudy => "cloud",
            IconAsset::Rainy => "rain",
            IconAsset::Stormy => "storm",
            IconAsset::Snowy => "snowflake",
        }
    }
}

/// Named text fields plus the icon slot of the display surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayFields {
    pub condition: String,
    pub description: String,
    pub temperature: String,
    pub temp_min: String,
    pub temp_max: String,
    pub humidity: String,
    pub wind_speed: String,
    pub sunrise: String,
    pub sunset: String,
    pub location_name: String,
    pub country_code: String,
    pub icon: Option<IconAsset>,
}

/// Icon asset for one of the 14 known OpenWeather icon codes.
///
/// Carried over from the original asset wiring as-is: 01n, 10n and 11n map
/// differently from their daytime counterparts. Unknown codes return `None`
/// and the icon slot is left untouched.
pub fn icon_for(code: &str) -> Option<IconAsset> {
    match code {
        "01d" => Some(IconAsset::Sunny),
        "02d" | "03d" | "04d" | "04n" => Some(IconAsset::Cloudy),
        "01n" | "02n" | "03n" | "10n" => Some(IconAsset::Cloudy),
        "10d" | "11n" => Some(IconAsset::Rainy),
        "11d" => Some(IconAsset::Stormy),
        "13d" | "13n" => Some(IconAsset::Snowy),
        _ => None,
    }
}

/// Unit suffix implied by the locale alone, independent of the units the
/// endpoint was actually queried with.
pub fn unit_suffix(locale: &str) -> &'static str {
    UnitSystem::from_locale(locale).suffix()
}

/// Unix epoch seconds as zero-padded 24-hour `HH:mm` local wall-clock time.
pub fn format_unix_time(secs: i64) -> String {
    let utc = DateTime::from_timestamp(secs, 0).unwrap_or_default();
    utc.with_timezone(&Local).format("%H:%M").to_string()
}

/// Float rendered with at least one decimal, so whole numbers keep a
/// trailing `.0` ("28.0", "30.5").
fn decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Map a snapshot onto display fields.
///
/// Every condition entry is applied in order and each one overwrites the
/// text fields written by the previous entry, so only the last entry's
/// values survive. Only a recognized icon code replaces the icon slot.
pub fn map(snapshot: &WeatherSnapshot, units: UnitSystem) -> DisplayFields {
    let mut fields = DisplayFields::default();

    for condition in &snapshot.conditions {
        fields.condition = condition.main.clone();
        fields.description = condition.description.clone();
        fields.temperature = format!(
            "{}{}",
            decimal(snapshot.temperature.current),
            units.suffix()
        );
        fields.temp_min = format!("{} min", decimal(snapshot.temperature.min));
        fields.temp_max = format!("{} max", decimal(snapshot.temperature.max));
        fields.humidity = format!("{} per cent", snapshot.humidity_pct);
        fields.wind_speed = decimal(snapshot.wind_speed);
        fields.sunrise = format_unix_time(snapshot.sunrise);
        fields.sunset = format_unix_time(snapshot.sunset);
        fields.location_name = snapshot.location_name.clone();
        fields.country_code = snapshot.country_code.clone();

        if let Some(icon) = icon_for(&condition.icon_code) {
            fields.icon = Some(icon);
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, Temperature};

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            conditions: vec![Condition {
                main: "Clear".into(),
                description: "clear sky".into(),
                icon_code: "01d".into(),
            }],
            temperature: Temperature {
                current: 30.5,
                min: 28.0,
                max: 32.0,
            },
            humidity_pct: 40,
            wind_speed: 4.1,
            sunrise: 1_700_000_000,
            sunset: 1_700_040_000,
            location_name: "Bengaluru".into(),
            country_code: "IN".into(),
        }
    }

    #[test]
    fn suffix_follows_locale_regions() {
        for locale in ["US", "LR", "MM", "en_US"] {
            assert_eq!(unit_suffix(locale), "°F", "{locale}");
        }
        for locale in ["en_IN", "de_DE", "en", ""] {
            assert_eq!(unit_suffix(locale), "°C", "{locale}");
        }
    }

    fn assert_hh_mm(s: &str) {
        let bytes = s.as_bytes();
        assert_eq!(bytes.len(), 5, "{s}");
        assert!(bytes[0].is_ascii_digit() && bytes[0] <= b'2', "{s}");
        assert!(bytes[1].is_ascii_digit(), "{s}");
        assert_eq!(bytes[2], b':', "{s}");
        assert!(bytes[3].is_ascii_digit() && bytes[3] <= b'5', "{s}");
        assert!(bytes[4].is_ascii_digit(), "{s}");
    }

    #[test]
    fn formatted_time_is_zero_padded_hh_mm() {
        for secs in [0, 1, 59, 3600, 1_700_000_000, 1_700_040_000, -1, i64::MAX] {
            assert_hh_mm(&format_unix_time(secs));
        }
    }

    #[test]
    fn icon_table_is_literal() {
        let table = [
            ("01d", IconAsset::Sunny),
            ("02d", IconAsset::Cloudy),
            ("03d", IconAsset::Cloudy),
            ("04d", IconAsset::Cloudy),
            ("04n", IconAsset::Cloudy),
            ("10d", IconAsset::Rainy),
            ("11d", IconAsset::Stormy),
            ("13d", IconAsset::Snowy),
            ("01n", IconAsset::Cloudy),
            ("02n", IconAsset::Cloudy),
            ("03n", IconAsset::Cloudy),
            ("10n", IconAsset::Cloudy),
            ("11n", IconAsset::Rainy),
            ("13n", IconAsset::Snowy),
        ];
        for (code, expected) in table {
            assert_eq!(icon_for(code), Some(expected), "{code}");
        }
        for code in ["09d", "09n", "50d", "50n", "", "1d", "01D"] {
            assert_eq!(icon_for(code), None, "{code}");
        }
    }

    #[test]
    fn maps_snapshot_to_display_fields() {
        let fields = map(&snapshot(), UnitSystem::Celsius);

        assert_eq!(fields.condition, "Clear");
        assert_eq!(fields.description, "clear sky");
        assert_eq!(fields.temperature, "30.5°C");
        assert_eq!(fields.temp_min, "28.0 min");
        assert_eq!(fields.temp_max, "32.0 max");
        assert_eq!(fields.humidity, "40 per cent");
        assert_eq!(fields.wind_speed, "4.1");
        assert_eq!(fields.location_name, "Bengaluru");
        assert_eq!(fields.country_code, "IN");
        assert_eq!(fields.icon, Some(IconAsset::Sunny));
        assert_hh_mm(&fields.sunrise);
        assert_hh_mm(&fields.sunset);
    }

    #[test]
    fn suffix_comes_from_locale_not_requested_units() {
        // Metric values can end up labeled °F; the suffix only looks at the
        // unit system derived from the locale.
        let fields = map(&snapshot(), UnitSystem::Fahrenheit);
        assert_eq!(fields.temperature, "30.5°F");
    }

    #[test]
    fn last_condition_entry_wins() {
        let mut snap = snapshot();
        snap.conditions.push(Condition {
            main: "Rain".into(),
            description: "light rain".into(),
            icon_code: "10d".into(),
        });

        let fields = map(&snap, UnitSystem::Celsius);
        assert_eq!(fields.condition, "Rain");
        assert_eq!(fields.description, "light rain");
        assert_eq!(fields.icon, Some(IconAsset::Rainy));
    }

    #[test]
    fn unknown_icon_code_leaves_icon_slot_unchanged() {
        let mut snap = snapshot();
        snap.conditions.push(Condition {
            main: "Mist".into(),
            description: "mist".into(),
            icon_code: "50d".into(),
        });

        let fields = map(&snap, UnitSystem::Celsius);
        // Text fields come from the mist entry, the icon stays from 01d.
        assert_eq!(fields.condition, "Mist");
        assert_eq!(fields.icon, Some(IconAsset::Sunny));
    }

    #[test]
    fn no_conditions_leaves_fields_empty() {
        let mut snap = snapshot();
        snap.conditions.clear();

        let fields = map(&snap, UnitSystem::Celsius);
        assert_eq!(fields, DisplayFields::default());
    }

    #[test]
    fn whole_numbers_keep_one_decimal() {
        assert_eq!(decimal(28.0), "28.0");
        assert_eq!(decimal(30.5), "30.5");
        assert_eq!(decimal(0.0), "0.0");
        assert_eq!(decimal(-3.0), "-3.0");
    }
}
