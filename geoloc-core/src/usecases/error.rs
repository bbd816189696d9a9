use crate::{gateways::geocode::GeoCodingError, repositories};
use geoloc_entities::id::IdParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid location id")]
    InvalidId,
    #[error("Unresolved address: {0}")]
    Unresolved(#[from] GeoCodingError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<IdParseError> for Error {
    fn from(_: IdParseError) -> Self {
        Self::InvalidId
    }
}
