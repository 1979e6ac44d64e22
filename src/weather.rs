//! # BOM Weather Fetching and Caching
//!
//! Fetches the day's forecast from the Australian Bureau of Meteorology API
//! and boils it down to the one [`WeatherSnapshot`] the device displays.
//!
//! ## Data Source
//!
//! - **URL**: `https://api.weather.bom.gov.au/v1/locations/{geohash}/{endpoint}`
//! - **Endpoint used**: `forecasts/daily`, first entry (today)
//! - **Fields**: `temp_min` (falling back to `now.temp_now` — the API
//!   often reports the overnight minimum there instead), `temp_max`,
//!   `icon_descriptor`, and `rain.amount.max` (falling back to `min`)
//!
//! ## Caching Strategy
//!
//! Raw response bodies are cached per location and endpoint as
//! `cache-{geohash}-{endpoint}.json` (slashes in the endpoint become `__`),
//! with freshness judged by file modification time against a TTL. A battery
//! device that wakes, fetches, and sleeps again should not hit the network
//! on every boot; an hour-old forecast is as good as a fresh one.
//!
//! Cache failures are never fatal: a stale, missing, or corrupt cache falls
//! through to the network, and a failed cache write is ignored.

use crate::WeatherSnapshot;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use std::{fs, io};
use thiserror::Error;

/// Default cache time-to-live in seconds (1 hour).
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Errors in the weather data pipeline.
///
/// All of these surface before the display core starts; the core itself
/// performs no network or disk I/O.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// HTTP request failed (network, server, or protocol error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response was valid JSON but not the shape we need
    #[error("malformed forecast: {0}")]
    Malformed(&'static str),

    /// Response body did not decode as the expected JSON
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Cache file operations failed
    #[error("cache IO: {0}")]
    Cache(#[from] io::Error),
}

/// BOM API client for one forecast location.
pub struct BomClient {
    geohash: String,
    cache_dir: PathBuf,
    ttl_secs: u64,
}

// Typed views of the slices of the BOM payload we actually read. Everything
// is optional: the API omits fields freely depending on time of day.

#[derive(Debug, Deserialize)]
struct DailyForecasts {
    data: Vec<DailyForecast>,
}

#[derive(Debug, Deserialize)]
struct DailyForecast {
    temp_min: Option<f64>,
    temp_max: Option<f64>,
    icon_descriptor: Option<String>,
    rain: Option<RainForecast>,
    now: Option<ForecastNow>,
}

#[derive(Debug, Deserialize)]
struct ForecastNow {
    temp_now: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RainForecast {
    amount: Option<RainAmount>,
}

#[derive(Debug, Deserialize)]
struct RainAmount {
    min: Option<f64>,
    max: Option<f64>,
}

impl BomClient {
    pub fn new(geohash: impl Into<String>, cache_dir: impl Into<PathBuf>, ttl_secs: u64) -> Self {
        Self {
            geohash: geohash.into(),
            cache_dir: cache_dir.into(),
            ttl_secs,
        }
    }

    /// Fetch today's forecast and reduce it to the display snapshot.
    ///
    /// This is the only call the binary makes; on failure the caller keeps
    /// the device usable with [`WeatherSnapshot::placeholder`].
    pub async fn snapshot(&self) -> Result<WeatherSnapshot, WeatherError> {
        let forecasts: DailyForecasts = self.get("forecasts/daily").await?;
        snapshot_from_forecasts(forecasts)
    }

    /// Cache-first GET of one API endpoint, decoded as `T`.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, WeatherError> {
        let cache = self.cache_path(endpoint);

        match load_cache(&cache, self.ttl_secs) {
            Ok(body) => match serde_json::from_slice(&body) {
                Ok(value) => {
                    tracing::debug!(endpoint, "using cached response");
                    return Ok(value);
                }
                Err(error) => tracing::debug!(endpoint, %error, "cache unusable"),
            },
            Err(error) => tracing::debug!(endpoint, %error, "cache miss"),
        }

        let url = format!(
            "https://api.weather.bom.gov.au/v1/locations/{}/{}",
            self.geohash, endpoint
        );
        tracing::info!(%url, "fetching forecast");
        let body = reqwest::get(&url).await?.error_for_status()?.bytes().await?;
        let value = serde_json::from_slice(&body)?;

        // Save for future boots (ignore cache write failures)
        if let Err(error) = fs::write(&cache, &body) {
            tracing::debug!(%error, "cache write failed");
        }

        Ok(value)
    }

    /// Cache file for one endpoint, keyed by location and endpoint.
    fn cache_path(&self, endpoint: &str) -> PathBuf {
        self.cache_dir.join(format!(
            "cache-{}-{}.json",
            self.geohash,
            endpoint.replace('/', "__")
        ))
    }
}

/// Reduce the daily forecast list to the device's snapshot.
fn snapshot_from_forecasts(forecasts: DailyForecasts) -> Result<WeatherSnapshot, WeatherError> {
    let today = forecasts
        .data
        .into_iter()
        .next()
        .ok_or(WeatherError::Malformed("empty daily forecast"))?;

    // The overnight minimum often arrives in now.temp_now instead of
    // temp_min, depending on when the forecast is issued.
    let temp_min = today
        .temp_min
        .or_else(|| today.now.as_ref().and_then(|now| now.temp_now))
        .ok_or(WeatherError::Malformed("missing minimum temperature"))?;
    let temp_max = today
        .temp_max
        .ok_or(WeatherError::Malformed("missing maximum temperature"))?;

    let rain = today
        .rain
        .and_then(|rain| rain.amount)
        .and_then(|amount| amount.max.or(amount.min))
        .unwrap_or(0.0);

    Ok(WeatherSnapshot {
        temp_min: temp_min.round() as i32,
        temp_max: temp_max.round() as i32,
        // Unknown or missing descriptors fall back at render time
        icon: today.icon_descriptor.unwrap_or_default(),
        rain: rain.round().max(0.0) as u32,
    })
}

/// Load a cached response body if the file is younger than `ttl_secs`.
fn load_cache(path: &Path, ttl_secs: u64) -> Result<Vec<u8>, io::Error> {
    let meta = fs::metadata(path)?;

    let age = SystemTime::now()
        .duration_since(meta.modified()?)
        .map_err(|_| io::Error::other("time error"))?
        .as_secs();

    if age > ttl_secs {
        return Err(io::Error::other("stale"));
    }

    fs::read(path)
}
