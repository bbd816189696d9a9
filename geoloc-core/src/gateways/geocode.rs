use crate::entities::{InvalidPosition, MapPoint};
use thiserror::Error;

/// A single match returned by a forward geocoding lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoCodingCandidate {
    pub pos: MapPoint,
    pub formatted_address: String,
    pub types: Vec<String>,
}

#[derive(Debug, Error)]
pub enum GeoCodingError {
    #[error("The address is empty")]
    EmptyAddress,
    #[error("No matching candidates found")]
    NoCandidates,
    #[error("The geocoding service responded with status '{0}'")]
    Status(String),
    #[error("The geocoding service returned an invalid position: {0}")]
    InvalidPosition(#[from] InvalidPosition),
    #[error("Malformed geocoding response: {0}")]
    MalformedResponse(String),
    #[error("Geocoding request failed: {0}")]
    Transport(#[source] anyhow::Error),
}

pub trait GeoCodingGateway {
    /// Forward geocoding of a normalized query string.
    ///
    /// The candidates are returned in the order of the provider's response.
    /// No matches result in an empty list and not in an error.
    fn forward(&self, query: &str) -> Result<Vec<GeoCodingCandidate>, GeoCodingError>;
}
