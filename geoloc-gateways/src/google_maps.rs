use std::time::Duration;

use geoloc_core::gateways::geocode::{GeoCodingCandidate, GeoCodingError, GeoCodingGateway};
use geoloc_entities::geo::MapPoint;
use serde::Deserialize;
use url::Url;

use crate::http;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Forward geocoding with the Google Maps Geocoding API.
#[derive(Debug, Clone)]
pub struct GoogleMaps {
    pub base_url: Url,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl GoogleMaps {
    fn request_url(&self, query: &str) -> Url {
        match &self.api_key {
            Some(key) => http::with_query(
                &self.base_url,
                &[("address", query), ("key", &http::encode(key))],
            ),
            None => http::with_query(&self.base_url, &[("address", query)]),
        }
    }
}

impl GeoCodingGateway for GoogleMaps {
    fn forward(&self, query: &str) -> Result<Vec<GeoCodingCandidate>, GeoCodingError> {
        log::debug!("Requesting Google Maps geocoding of '{query}'");
        let (status, body) = http::get(self.request_url(query), self.timeout)?;
        if !status.is_success() {
            log::debug!("Google Maps responded with HTTP status {status}: {body}");
            return Err(GeoCodingError::Status(status.to_string()));
        }
        parse_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    formatted_address: String,
    geometry: Geometry,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

pub fn parse_response(body: &str) -> Result<Vec<GeoCodingCandidate>, GeoCodingError> {
    let Response {
        status,
        error_message,
        results,
    } = serde_json::from_str(body)
        .map_err(|err| GeoCodingError::MalformedResponse(err.to_string()))?;
    match status.as_str() {
        "OK" => results
            .into_iter()
            .map(|r| -> Result<_, GeoCodingError> {
                let GeocodeResult {
                    formatted_address,
                    geometry,
                    types,
                } = r;
                let LatLng { lat, lng } = geometry.location;
                let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
                Ok(GeoCodingCandidate {
                    pos,
                    formatted_address,
                    types,
                })
            })
            .collect(),
        "ZERO_RESULTS" => Ok(vec![]),
        _ => {
            if let Some(msg) = error_message {
                log::warn!("Google Maps geocoding failed with status {status}: {msg}");
            }
            Err(GeoCodingError::Status(status))
        }
    }
}
