//! Core library for the `weather-panel` CLI.
//!
//! This crate defines:
//! - Configuration handling (API key, provider endpoint override)
//! - The location capability and its IP-based implementation
//! - The OpenWeatherMap client for current conditions and the 5-day forecast
//! - The panel itself: view state plus the refresh flow that fills it
//! - Condition classification and day labels for rendering
//!
//! It is used by `panel-cli`, but can also be reused by other binaries.

pub mod config;
pub mod location;
pub mod model;
pub mod panel;
pub mod provider;
pub mod view;

pub use config::Config;
pub use location::{IpLocationSource, LocationError, LocationSource};
pub use model::{Coordinates, CurrentWeather, ForecastEntry, ForecastSeries, ViewState};
pub use panel::{ERR_LOCATION, ERR_NO_GEOLOCATION, ERR_WEATHER_FETCH, WeatherPanel};
pub use provider::{OpenWeatherProvider, WeatherProvider};
pub use view::{Classification, Icon, classify_condition, day_label};
