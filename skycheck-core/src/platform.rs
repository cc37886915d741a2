//! Traits for the platform services the fetch cycle drives.
//!
//! The flow itself owns none of these capabilities. Permissions, location
//! fixes, connectivity, settings navigation and the visible surfaces are all
//! supplied by whoever hosts the flow (the terminal shell in `skycheck-cli`,
//! hand-rolled fakes in tests).

use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::Coordinates;
use crate::present::DisplayFields;

/// Result of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionOutcome {
    AllGranted,
    /// The host will no longer show its own request dialog; only manual
    /// settings navigation can change the state.
    SomePermanentlyDenied,
    NeedsRationale,
}

/// User's answer to the rationale dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RationaleChoice {
    OpenSettings,
    Cancel,
}

/// Asks the user to grant coordinate access.
#[async_trait]
pub trait PermissionGate: Send + Sync + Debug {
    async fn request_permissions(&self) -> PermissionOutcome;

    /// Explain why the permission is needed and offer settings navigation.
    async fn present_rationale(&self) -> RationaleChoice;
}

/// Source of coordinate fixes.
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    /// Whether at least one location source (satellite or network based) is
    /// enabled on the host.
    fn is_enabled(&self) -> bool;

    /// Resolve one high-accuracy fix. Single-shot from the flow's point of
    /// view; a streaming host yields its first result and is not re-polled.
    /// May pend indefinitely, no timeout is imposed here.
    async fn request_fix(&self) -> anyhow::Result<Coordinates>;
}

pub trait NetworkMonitor: Send + Sync + Debug {
    fn is_connected(&self) -> bool;
}

/// Fire-and-forget navigation to host settings screens.
pub trait SystemSettings: Send + Sync + Debug {
    fn open_location_source_settings(&self);
    fn open_app_permission_settings(&self);
}

/// Blocking progress indicator shown while a response is pending.
///
/// `hide` must be idempotent and safe to call when the indicator was never
/// shown.
pub trait ProgressIndicator: Send + Sync + Debug {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Transient user-visible notice (the toast analogue).
pub trait Notice: Send + Sync + Debug {
    fn notify(&self, message: &str);
}

/// Receives the mapped display fields.
pub trait DisplaySurface: Send + Sync + Debug {
    fn render(&mut self, fields: &DisplayFields);
}

/// The full set of collaborators one fetch cycle needs.
#[derive(Debug)]
pub struct Platform {
    pub gate: Box<dyn PermissionGate>,
    pub location: Box<dyn LocationProvider>,
    pub network: Box<dyn NetworkMonitor>,
    pub settings: Box<dyn SystemSettings>,
    pub progress: Box<dyn ProgressIndicator>,
    pub notice: Box<dyn Notice>,
    pub display: Box<dyn DisplaySurface>,
}
