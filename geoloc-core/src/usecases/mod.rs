mod create_location;
mod delete_location;
mod error;
mod get_location;
mod resolve_address;
mod update_location;


pub use self::{
    create_location::*, delete_location::*, error::Error, get_location::*, resolve_address::*,
    update_location::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        gateways::geocode::{GeoCodingCandidate, GeoCodingError, GeoCodingGateway},
        repositories::*,
    };
}
