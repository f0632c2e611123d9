//! The host location capability.
//!
//! The panel does not care where coordinates come from; it talks to a
//! [`LocationSource`]. The production source resolves an approximate
//! position from the machine's public IP via ip-api.com (free, no key
//! required), which is the closest a terminal program gets to asking the
//! host for its position.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::Coordinates;

const IP_API_BASE: &str = "http://ip-api.com";

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("location request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("location service answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("location service could not resolve a position: {0}")]
    Unresolved(String),
}

#[async_trait]
pub trait LocationSource: Send + Sync + std::fmt::Debug {
    async fn acquire(&self) -> Result<Coordinates, LocationError>;
}

/// Coarse geolocation from the machine's public IP.
#[derive(Debug, Clone)]
pub struct IpLocationSource {
    base_url: String,
    http: Client,
}

impl IpLocationSource {
    pub fn new() -> Self {
        Self::with_base_url(IP_API_BASE.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }
}

impl Default for IpLocationSource {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

#[async_trait]
impl LocationSource for IpLocationSource {
    async fn acquire(&self) -> Result<Coordinates, LocationError> {
        let url = format!("{}/json", self.base_url);

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(LocationError::Status(status));
        }

        let parsed: IpApiResponse = res.json().await?;

        if parsed.status != "success" {
            let reason = parsed.message.unwrap_or_else(|| "no reason given".to_string());
            return Err(LocationError::Unresolved(reason));
        }

        match (parsed.lat, parsed.lon) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates { latitude, longitude }),
            _ => Err(LocationError::Unresolved(
                "response carried no coordinates".to_string(),
            )),
        }
    }
}
