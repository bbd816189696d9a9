use std::sync::Arc;

use geoloc_core::gateways::geocode::{GeoCodingCandidate, GeoCodingError, GeoCodingGateway};
use geoloc_gateways::{google_maps::GoogleMaps, opencage::OpenCage};

use crate::config::{Geocoding, GeocodingGateway};

pub fn geocoding_gateway(cfg: &Geocoding) -> Arc<dyn GeoCodingGateway + Send + Sync> {
    let timeout = cfg.timeout;
    match &cfg.gateway {
        Some(GeocodingGateway::GoogleMaps { api_key, base_url }) => {
            if api_key.is_none() {
                log::warn!("Use Google Maps geocoding gateway without an API key");
            } else {
                log::info!("Use Google Maps geocoding gateway");
            }
            Arc::new(GoogleMaps {
                base_url: base_url.clone(),
                api_key: api_key.clone(),
                timeout,
            })
        }
        Some(GeocodingGateway::OpenCage { api_key, base_url }) => {
            log::info!("Use OpenCage geocoding gateway");
            Arc::new(OpenCage {
                base_url: base_url.clone(),
                api_key: api_key.clone(),
                timeout,
            })
        }
        None => {
            log::warn!("No geocoding gateway was configured: addresses remain unresolved");
            Arc::new(DummyGeoCodingGateway)
        }
    }
}

struct DummyGeoCodingGateway;

impl GeoCodingGateway for DummyGeoCodingGateway {
    fn forward(&self, query: &str) -> Result<Vec<GeoCodingCandidate>, GeoCodingError> {
        log::debug!("No geocoding gateway for query '{query}'");
        Ok(vec![])
    }
}
