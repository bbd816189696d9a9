use std::time::Duration;

use geoloc_core::gateways::geocode::{GeoCodingCandidate, GeoCodingError, GeoCodingGateway};
use geoloc_entities::geo::MapPoint;
use serde::Deserialize;
use url::Url;

use crate::http;

pub const DEFAULT_BASE_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

/// Forward geocoding with the OpenCage Geocoding API.
#[derive(Debug, Clone)]
pub struct OpenCage {
    pub base_url: Url,
    pub api_key: String,
    pub timeout: Duration,
}

impl OpenCage {
    fn request_url(&self, query: &str) -> Url {
        http::with_query(
            &self.base_url,
            &[
                ("q", query),
                ("key", &http::encode(&self.api_key)),
                ("no_annotations", "1"),
            ],
        )
    }
}

impl GeoCodingGateway for OpenCage {
    fn forward(&self, query: &str) -> Result<Vec<GeoCodingCandidate>, GeoCodingError> {
        log::debug!("Requesting OpenCage geocoding of '{query}'");
        let (status, body) = http::get(self.request_url(query), self.timeout)?;
        match parse_response(&body) {
            Err(GeoCodingError::MalformedResponse(_)) if !status.is_success() => {
                Err(GeoCodingError::Status(status.to_string()))
            }
            res => res,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Response {
    status: Status,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct Status {
    code: u16,
    message: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    formatted: String,
    geometry: Geometry,
    #[serde(default)]
    components: Components,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    #[serde(rename = "_type")]
    kind: Option<String>,
}

pub fn parse_response(body: &str) -> Result<Vec<GeoCodingCandidate>, GeoCodingError> {
    let Response { status, results } = serde_json::from_str(body)
        .map_err(|err| GeoCodingError::MalformedResponse(err.to_string()))?;
    if status.code != 200 {
        log::warn!(
            "OpenCage geocoding failed with status {}: {}",
            status.code,
            status.message
        );
        return Err(GeoCodingError::Status(format!(
            "{} {}",
            status.code, status.message
        )));
    }
    results
        .into_iter()
        .map(|r| -> Result<_, GeoCodingError> {
            let GeocodeResult {
                formatted,
                geometry: Geometry { lat, lng },
                components: Components { kind },
            } = r;
            let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
            Ok(GeoCodingCandidate {
                pos,
                formatted_address: formatted,
                types: kind.into_iter().collect(),
            })
        })
        .collect()
}
