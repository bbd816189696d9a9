use std::sync::Arc;

use crate::core::gateways::geocode::GeoCodingGateway;

/// The geocoding gateway shared by all requests.
pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);

#[derive(Debug, Clone, Copy)]
pub struct Version(pub &'static str);
