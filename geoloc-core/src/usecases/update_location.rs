use super::prelude::*;
use super::{
    get_location::get_location,
    resolve_address::{resolve_address_position, GeoCodingPolicy},
};

/// The new address of an existing location.
///
/// The name of a location cannot be changed.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct UpdateLocation {
    pub street : String,
    pub city   : String,
    pub state  : String,
    pub zip    : String,
}

/// An updated location that is ready to be stored.
#[derive(Debug, Clone)]
pub struct UpdatedLocation(Location);

/// Merges the new address and its resolved position into
/// the previously loaded location.
///
/// Only the address and the position are replaced. The id and
/// the name are taken from the existing location.
pub fn prepare_updated_location<G>(
    gateway: &G,
    policy: &GeoCodingPolicy,
    existing: Location,
    update: UpdateLocation,
) -> Result<UpdatedLocation>
where
    G: GeoCodingGateway + ?Sized,
{
    let UpdateLocation {
        street,
        city,
        state,
        zip,
    } = update;
    let address = Address {
        street,
        city,
        state,
        zip,
    };
    let pos = resolve_address_position(gateway, &address, policy)?;
    let Location { id, name, .. } = existing;
    Ok(UpdatedLocation(Location {
        id,
        name,
        address,
        pos,
    }))
}

pub fn store_updated_location<R: LocationRepo>(
    repo: &R,
    updated: UpdatedLocation,
) -> Result<Location> {
    let UpdatedLocation(location) = updated;
    repo.update_location_address(location.id.as_str(), &location.address, location.pos)?;
    log::debug!("Updated location {}", location.id);
    Ok(location)
}

pub fn update_location<R, G>(
    repo: &R,
    gateway: &G,
    policy: &GeoCodingPolicy,
    id: &str,
    update: UpdateLocation,
) -> Result<Location>
where
    R: LocationRepo,
    G: GeoCodingGateway + ?Sized,
{
    let existing = get_location(repo, id)?;
    let updated = prepare_updated_location(gateway, policy, existing, update)?;
    store_updated_location(repo, updated)
}
