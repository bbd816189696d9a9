use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A stored location.
///
/// The coordinate is `null` if the address could not be resolved.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub id         : String,
    pub name       : String,
    pub address    : String,
    pub city       : String,
    pub state      : String,
    pub zip        : String,
    pub coordinate : Option<Coordinate>,
}

// A coordinate sent by the client is ignored.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewLocation {
    pub name    : String,
    pub address : String,
    pub city    : String,
    pub state   : String,
    pub zip     : String,
}

/// The new address of a location.
///
/// The name of a location cannot be changed and
/// an optional `name` is silently ignored.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct UpdateLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name    : Option<String>,
    pub address : String,
    pub city    : String,
    pub state   : String,
    pub zip     : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// Error message.
    pub message: String,
}
