use serde::{Deserialize, Serialize};

/// Geographic position the panel was refreshed for. Acquired once per
/// refresh and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions as reported by the provider. Wind and pressure are
/// carried along but the renderer does not show them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature_c: f64,
    pub description: String,
    pub wind_speed_mps: f64,
    pub pressure_hpa: f64,
}

/// One forecast slot. `timestamp_txt` keeps the provider's own
/// "YYYY-MM-DD HH:MM:SS" text, which is what day labels are derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp_txt: String,
    pub temperature_c: f64,
    pub description: String,
}

/// The midday slice of the provider's 3-hourly forecast: at most one entry
/// per day, at most [`ForecastSeries::MAX_DAYS`] entries, in provider order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastSeries(Vec<ForecastEntry>);

impl ForecastSeries {
    pub const MAX_DAYS: usize = 7;

    const NOON: &'static str = "12:00:00";

    /// Select the noon entry of each day from a raw 3-hourly list. Order is
    /// whatever the provider returned; entries are never re-sorted.
    pub fn from_list<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ForecastEntry>,
    {
        let days = entries
            .into_iter()
            .filter(|e| e.timestamp_txt.contains(Self::NOON))
            .take(Self::MAX_DAYS)
            .collect();

        Self(days)
    }

    pub fn entries(&self) -> &[ForecastEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything the renderer needs, owned exclusively by the panel.
///
/// `loading` tracks the current-weather request only; the forecast request
/// never touches it. Errors collapse to a single string, last one wins.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub current: Option<CurrentWeather>,
    pub forecast: Option<ForecastSeries>,
    pub loading: bool,
    pub error: Option<String>,
}
