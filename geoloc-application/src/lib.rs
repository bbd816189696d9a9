#[macro_use]
extern crate log;

mod create_location;
mod delete_location;
mod get_location;
mod update_location;

pub mod prelude {
    pub use super::{create_location::*, delete_location::*, get_location::*, update_location::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use geoloc_core::{
    entities::*, gateways::geocode::GeoCodingGateway, repositories::*, usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use geoloc_db_sqlite::Connections;
}
