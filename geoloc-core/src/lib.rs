pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use geoloc_entities::{address::*, geo::*, id::*, location::*};
}
