//! One-shot fetch cycle: location source check, permission, fix, request,
//! presentation.

use thiserror::Error;
use tracing::{error, info};

use crate::client::{Units, WeatherClient, WeatherError};
use crate::model::UnitSystem;
use crate::platform::{PermissionOutcome, Platform, RationaleChoice};
use crate::present;

/// Where the cycle currently stands.
#[derive(Debug)]
pub enum FetchState {
    Idle,
    AwaitingPermission,
    AwaitingFix,
    AwaitingResponse,
    Displayed,
    Failed(FlowError),
}

/// Terminal failures of a fetch cycle. Every one is handled where it is
/// detected; none are retried automatically.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("location provider is turned off")]
    LocationSourceDisabled,

    #[error("location permission denied")]
    PermissionDenied,

    #[error("location fix could not be acquired")]
    FixUnavailable,

    #[error("no internet connection available")]
    Offline,

    #[error(transparent)]
    Request(#[from] WeatherError),
}

/// Drives one fetch cycle from idle to displayed or failed.
///
/// Strictly sequential: each stage suspends the flow until its collaborator
/// answers, and no second fetch is ever issued while one is in flight.
#[derive(Debug)]
pub struct WeatherController {
    state: FetchState,
    client: WeatherClient,
    unit_system: UnitSystem,
    platform: Platform,
    progress_dismissed: bool,
}

impl WeatherController {
    pub fn new(client: WeatherClient, unit_system: UnitSystem, platform: Platform) -> Self {
        Self {
            state: FetchState::Idle,
            client,
            unit_system,
            platform,
            progress_dismissed: false,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Run the cycle once. Calling again after the cycle left `Idle` is a
    /// no-op that returns the current state.
    pub async fn run(&mut self) -> &FetchState {
        if !matches!(self.state, FetchState::Idle) {
            return &self.state;
        }

        if !self.platform.location.is_enabled() {
            self.platform
                .notice
                .notify("Your location provider is turned off. Please turn it on");
            self.platform.settings.open_location_source_settings();
            return self.fail(FlowError::LocationSourceDisabled);
        }

        self.state = FetchState::AwaitingPermission;
        match self.platform.gate.request_permissions().await {
            PermissionOutcome::AllGranted => {}
            PermissionOutcome::SomePermanentlyDenied => {
                self.platform.notice.notify(
                    "You have denied location permission, please enable it as it is \
                     mandatory for the app to provide weather data",
                );
                return self.fail(FlowError::PermissionDenied);
            }
            PermissionOutcome::NeedsRationale => {
                if self.platform.gate.present_rationale().await == RationaleChoice::OpenSettings {
                    self.platform.settings.open_app_permission_settings();
                }
                return self.fail(FlowError::PermissionDenied);
            }
        }

        self.state = FetchState::AwaitingFix;
        let coords = match self.platform.location.request_fix().await {
            Ok(coords) => coords,
            Err(err) => {
                error!("location fix failed: {err:#}");
                return self.fail(FlowError::FixUnavailable);
            }
        };
        info!(
            latitude = coords.latitude,
            longitude = coords.longitude,
            "acquired location fix"
        );

        if !self.platform.network.is_connected() {
            self.platform.notice.notify("No internet connection available");
            return self.fail(FlowError::Offline);
        }

        self.state = FetchState::AwaitingResponse;
        self.platform.progress.show();
        // The request always asks for metric values; the displayed suffix is
        // chosen from the locale alone and can disagree.
        let result = self.client.fetch(coords, Units::Metric).await;
        self.dismiss_progress();

        match result {
            Ok(snapshot) => {
                info!(?snapshot, "received weather snapshot");
                let fields = present::map(&snapshot, self.unit_system);
                self.platform.display.render(&fields);
                self.state = FetchState::Displayed;
            }
            Err(err) => {
                // Request failures are diagnostics only; the user gets no
                // notice and the display surface is left untouched.
                error!("weather request failed: {err}");
                self.state = FetchState::Failed(FlowError::Request(err));
            }
        }

        &self.state
    }

    fn fail(&mut self, err: FlowError) -> &FetchState {
        self.state = FetchState::Failed(err);
        &self.state
    }

    /// Tear the progress indicator down at most once per cycle, whether or
    /// not it was ever shown.
    fn dismiss_progress(&mut self) {
        if !self.progress_dismissed {
            self.platform.progress.hide();
            self.progress_dismissed = true;
        }
    }
}
