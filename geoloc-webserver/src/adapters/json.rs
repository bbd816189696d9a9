pub use geoloc_boundary::*;

use crate::core::usecases;

pub mod from_json {
    //! JSON -> Entity

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_location(from: NewLocation) -> usecases::NewLocation {
        let NewLocation {
            name,
            address,
            city,
            state,
            zip,
        } = from;
        usecases::NewLocation {
            name,
            street: address,
            city,
            state,
            zip,
        }
    }

    pub fn update_location(from: UpdateLocation) -> usecases::UpdateLocation {
        let UpdateLocation {
            name,
            address,
            city,
            state,
            zip,
        } = from;
        if let Some(name) = name {
            log::debug!("Ignoring name '{name}' of location update");
        }
        usecases::UpdateLocation {
            street: address,
            city,
            state,
            zip,
        }
    }
}
