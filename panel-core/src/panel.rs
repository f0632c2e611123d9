//! The weather panel: one view state record and the refresh flow that
//! fills it from the location capability and the weather provider.

use crate::location::LocationSource;
use crate::model::{Coordinates, ViewState};
use crate::provider::WeatherProvider;

/// Shown when the host has no location capability at all.
pub const ERR_NO_GEOLOCATION: &str = "Geolocation is not supported by this browser";
/// Shown when the capability exists but acquisition failed.
pub const ERR_LOCATION: &str = "Error getting location";
/// Shown when the current-weather request failed.
pub const ERR_WEATHER_FETCH: &str = "Error fetching weather data";

#[derive(Debug)]
pub struct WeatherPanel {
    provider: Box<dyn WeatherProvider>,
    state: ViewState,
}

impl WeatherPanel {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Acquire a position and fill the view state. `location` is `None`
    /// when the host offers no location capability; nothing is fetched in
    /// that case.
    ///
    /// Errors never propagate out of here: every failure ends up as either
    /// a view-state error string or a log line, and the panel stays usable
    /// with whatever partial data it has.
    pub async fn refresh(&mut self, location: Option<&dyn LocationSource>) {
        let Some(source) = location else {
            tracing::error!("no location capability available on this host");
            self.state.error = Some(ERR_NO_GEOLOCATION.to_string());
            return;
        };

        let coords = match source.acquire().await {
            Ok(coords) => coords,
            Err(err) => {
                tracing::error!(error = %err, "failed to acquire location");
                self.state.error = Some(ERR_LOCATION.to_string());
                return;
            }
        };

        self.fetch_all(coords).await;
    }

    /// Issue the two provider calls concurrently. Their results land in
    /// disjoint view-state fields, so completion order does not matter.
    ///
    /// Only the current-weather call drives `loading`, and only its failure
    /// surfaces to the user; a failed forecast is logged and the panel
    /// simply renders without day cards.
    async fn fetch_all(&mut self, coords: Coordinates) {
        self.state.loading = true;

        let (current, forecast) =
            tokio::join!(self.provider.current(coords), self.provider.forecast(coords));

        match current {
            Ok(weather) => self.state.current = Some(weather),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch current weather");
                self.state.error = Some(ERR_WEATHER_FETCH.to_string());
            }
        }
        self.state.loading = false;

        match forecast {
            Ok(series) => self.state.forecast = Some(series),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch forecast");
            }
        }
    }
}
