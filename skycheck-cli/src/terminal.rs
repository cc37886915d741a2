//! Terminal-backed implementations of the platform collaborators.

use async_trait::async_trait;
use skycheck_core::{
    Coordinates, DisplayFields, DisplaySurface, LocationProvider, NetworkMonitor, Notice,
    PermissionGate, PermissionOutcome, ProgressIndicator, RationaleChoice, SystemSettings,
};

/// Permission dialog rendered as a confirm prompt.
#[derive(Debug)]
pub struct PromptGate;

#[async_trait]
impl PermissionGate for PromptGate {
    async fn request_permissions(&self) -> PermissionOutcome {
        let granted = inquire::Confirm::new("Allow skycheck to use your location?")
            .with_default(true)
            .prompt()
            .unwrap_or(false);

        if granted {
            PermissionOutcome::AllGranted
        } else {
            // A refused prompt behaves like a permanently denied permission:
            // the flow halts until the user re-invokes it.
            PermissionOutcome::SomePermanentlyDenied
        }
    }

    async fn present_rationale(&self) -> RationaleChoice {
        RationaleChoice::Cancel
    }
}

/// Stands in for the OS location provider; the fix comes from the command
/// line instead of a satellite or network source.
#[derive(Debug)]
pub struct ManualFix {
    pub coords: Coordinates,
}

#[async_trait]
impl LocationProvider for ManualFix {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn request_fix(&self) -> anyhow::Result<Coordinates> {
        Ok(self.coords)
    }
}

/// The terminal shell has no connectivity service to ask; the request itself
/// surfaces transport failures.
#[derive(Debug)]
pub struct AssumeOnline;

impl NetworkMonitor for AssumeOnline {
    fn is_connected(&self) -> bool {
        true
    }
}

/// Settings screens reduce to printed hints on a terminal.
#[derive(Debug)]
pub struct SettingsHints;

impl SystemSettings for SettingsHints {
    fn open_location_source_settings(&self) {
        eprintln!("Enable a location source in your system settings and run again.");
    }

    fn open_app_permission_settings(&self) {
        eprintln!("Grant the location permission in your system settings and run again.");
    }
}

/// One status line while the response is pending.
#[derive(Debug, Default)]
pub struct LineProgress {
    shown: bool,
}

impl ProgressIndicator for LineProgress {
    fn show(&mut self) {
        eprintln!("Please wait, fetching weather data...");
        self.shown = true;
    }

    fn hide(&mut self) {
        if self.shown {
            eprintln!("Done.");
            self.shown = false;
        }
    }
}

/// Toast analogue: a line on stderr.
#[derive(Debug)]
pub struct StderrNotice;

impl Notice for StderrNotice {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Prints the named display fields to stdout.
#[derive(Debug)]
pub struct StdoutDisplay;

impl DisplaySurface for StdoutDisplay {
    fn render(&mut self, fields: &DisplayFields) {
        println!("{}, {}", fields.location_name, fields.country_code);
        println!("{}: {}", fields.condition, fields.description);
        if let Some(icon) = fields.icon {
            println!("Icon: {}", icon.asset_name());
        }
        println!("Temperature: {}", fields.temperature);
        println!("Min: {}", fields.temp_min);
        println!("Max: {}", fields.temp_max);
        println!("Humidity: {}", fields.humidity);
        println!("Wind speed: {}", fields.wind_speed);
        println!("Sunrise: {}", fields.sunrise);
        println!("Sunset: {}", fields.sunset);
    }
}
