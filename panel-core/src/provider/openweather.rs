use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{Coordinates, CurrentWeather, ForecastEntry, ForecastSeries};

use super::WeatherProvider;

const OPENWEATHER_BASE: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENWEATHER_BASE.to_string())
    }

    /// Point the client at a different API root. Used by tests and the
    /// `api_base` config override.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn get_json<T>(&self, endpoint: &str, coords: Coordinates) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base_url, endpoint);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string().as_str()),
                ("lon", coords.longitude.to_string().as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({endpoint})"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {endpoint} response body"))?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather {} request failed with status {}: {}",
                endpoint,
                status,
                truncate_body(&body),
            ));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse OpenWeather {endpoint} JSON"))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(default)]
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: Option<OwWind>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn first_description(weather: &[OwWeather]) -> String {
    weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, coords: Coordinates) -> Result<CurrentWeather> {
        let parsed: OwCurrentResponse = self.get_json("weather", coords).await?;

        Ok(CurrentWeather {
            temperature_c: parsed.main.temp,
            description: first_description(&parsed.weather),
            wind_speed_mps: parsed.wind.map(|w| w.speed).unwrap_or_default(),
            pressure_hpa: parsed.main.pressure,
        })
    }

    async fn forecast(&self, coords: Coordinates) -> Result<ForecastSeries> {
        let parsed: OwForecastResponse = self.get_json("forecast", coords).await?;

        let entries = parsed.list.into_iter().map(|e| {
            let description = first_description(&e.weather);
            ForecastEntry {
                timestamp_txt: e.dt_txt,
                temperature_c: e.main.temp,
                description,
            }
        });

        Ok(ForecastSeries::from_list(entries))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // MAX may land inside a multibyte character; back up to a boundary.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_description_falls_back_to_unknown() {
        assert_eq!(first_description(&[]), "Unknown");

        let listed = vec![
            OwWeather { description: "light rain".to_string() },
            OwWeather { description: "mist".to_string() },
        ];
        assert_eq!(first_description(&listed), "light rain");
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let short = truncate_body(&long);
        assert!(short.len() < long.len());
        assert!(short.ends_with("..."));

        assert_eq!(truncate_body("tiny"), "tiny");
    }

    #[test]
    fn truncate_body_never_splits_a_multibyte_character() {
        // 100 three-byte characters: the cap falls mid-character.
        let long = "€".repeat(100);
        let short = truncate_body(&long);

        assert!(short.ends_with("..."));
        assert!(short.trim_end_matches("...").chars().all(|c| c == '€'));
        assert!(short.len() < long.len());
    }
}
