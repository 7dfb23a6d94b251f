//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The city directory (selector name list)
//! - Abstraction over the weather provider
//! - The weather panel lifecycle and its derivation rules
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod directory;
pub mod model;
pub mod panel;
pub mod provider;

pub use config::Config;
pub use directory::CityDirectory;
pub use model::{GradientColor, HourlyPoint, TempIcon, WeatherSnapshot};
pub use panel::{FetchTicket, PanelView, WeatherPanel};
pub use provider::{FetchError, WeatherProvider, provider_from_config};
