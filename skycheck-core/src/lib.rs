//! Core library for the `skycheck` weather app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather current-conditions client
//! - Traits for the platform collaborators (permissions, location,
//!   connectivity, settings and display surfaces)
//! - Presentation mapping from snapshots to display fields
//! - The one-shot controller that sequences a fetch cycle
//!
//! It is used by `skycheck-cli`, but can also be reused by other shells that
//! supply their own platform adapters.

pub mod client;
pub mod config;
pub mod controller;
pub mod model;
pub mod platform;
pub mod present;

pub use client::{Units, WeatherClient, WeatherError};
pub use config::Config;
pub use controller::{FetchState, FlowError, WeatherController};
pub use model::{Condition, Coordinates, Temperature, UnitSystem, WeatherSnapshot};
pub use platform::{
    DisplaySurface, LocationProvider, NetworkMonitor, Notice, PermissionGate, PermissionOutcome,
    Platform, ProgressIndicator, RationaleChoice, SystemSettings,
};
pub use present::{DisplayFields, IconAsset};
