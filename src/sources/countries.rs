//! Country directory fetching and decoding.

use serde::Deserialize;
use tracing::info;

use super::{ApiClient, FetchError, Result};
use crate::state::{Country, Flags};

/// Fields requested from the directory; the full record is several KB per country.
const COUNTRY_FIELDS: &str = "name,population,flags,area,region,subregion";

/// Raw `name` object; only the common name is consumed.
#[derive(Deserialize)]
struct RawName {
    /// Common English name.
    common: String,
}

/// Raw `flags` object.
#[derive(Deserialize, Default)]
struct RawFlags {
    /// PNG URL.
    #[serde(default)]
    png: String,
    /// SVG URL.
    #[serde(default)]
    svg: String,
}

/// Raw country record as returned by `/v3.1/all`.
#[derive(Deserialize)]
struct RawCountry {
    /// Nested name object.
    name: RawName,
    /// Population; absent for a few uninhabited territories.
    #[serde(default)]
    population: u64,
    /// Flag images.
    #[serde(default)]
    flags: RawFlags,
    /// Area in km².
    #[serde(default)]
    area: f64,
    /// Region.
    #[serde(default)]
    region: String,
    /// Subregion; missing for Antarctica and a few islands.
    #[serde(default)]
    subregion: String,
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        Self {
            name: raw.name.common,
            population: raw.population,
            flags: Flags {
                png: raw.flags.png,
                svg: raw.flags.svg,
            },
            area: raw.area,
            region: raw.region,
            subregion: raw.subregion,
        }
    }
}

/// What: Decode a country directory payload into `Country` values.
///
/// Inputs:
/// - `body`: JSON text of the `/v3.1/all` response.
///
/// Output:
/// - `Ok(Vec<Country>)` in payload order.
///
/// # Errors
/// - `FetchError::Decode` when the body is not an array of country records.
/// - `FetchError::NoResults` when the array is empty.
pub fn parse_countries(body: &str) -> Result<Vec<Country>> {
    let raw: Vec<RawCountry> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    if raw.is_empty() {
        return Err(FetchError::NoResults);
    }
    Ok(raw.into_iter().map(Country::from).collect())
}

impl ApiClient {
    /// What: Fetch the full country list from the directory.
    ///
    /// Output:
    /// - `Ok(Vec<Country>)` in directory order.
    ///
    /// # Errors
    /// - `Network` on transport failure, `Api` on a non-success status,
    ///   `Decode` on an unexpected payload, `NoResults` on an empty list.
    ///
    /// Details:
    /// - No parameters besides the field projection; the full dataset is returned each call.
    pub async fn fetch_countries(&self) -> Result<Vec<Country>> {
        let url = Self::endpoint(
            &self.config.countries_base_url,
            "/v3.1/all",
            &[("fields", COUNTRY_FIELDS)],
        )?;
        let (status, body) = self.get_text(url).await?;
        if !status.is_success() {
            return Err(FetchError::Api {
                status: Some(status.as_u16()),
                message: format!(
                    "Country directory returned {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("error")
                ),
            });
        }
        let countries = parse_countries(&body)?;
        info!(count = countries.len(), "fetched countries");
        Ok(countries)
    }
}
