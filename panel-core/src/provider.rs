use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{Coordinates, CurrentWeather, ForecastSeries};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A weather data service keyed by coordinates. The two calls are
/// independent; callers may issue them concurrently.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, coords: Coordinates) -> anyhow::Result<CurrentWeather>;

    async fn forecast(&self, coords: Coordinates) -> anyhow::Result<ForecastSeries>;
}
