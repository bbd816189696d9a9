use super::prelude::*;
use super::resolve_address::{resolve_address_position, GeoCodingPolicy};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewLocation {
    pub name   : String,
    pub street : String,
    pub city   : String,
    pub state  : String,
    pub zip    : String,
}

/// A new location that is ready to be stored.
#[derive(Debug, Clone)]
pub struct Storable(Location);

/// Resolves the position and assigns a new identifier.
///
/// The repository is not accessed. This allows to do the (slow)
/// geocoding without holding a database connection.
pub fn prepare_new_location<G>(
    gateway: &G,
    policy: &GeoCodingPolicy,
    new_location: NewLocation,
) -> Result<Storable>
where
    G: GeoCodingGateway + ?Sized,
{
    let NewLocation {
        name,
        street,
        city,
        state,
        zip,
    } = new_location;
    let address = Address {
        street,
        city,
        state,
        zip,
    };
    let pos = resolve_address_position(gateway, &address, policy)?;
    Ok(Storable(Location {
        id: Id::new(),
        name,
        address,
        pos,
    }))
}

pub fn store_new_location<R: LocationRepo>(repo: &R, s: Storable) -> Result<Location> {
    let Storable(location) = s;
    repo.create_location(&location)?;
    log::debug!("Created location {}", location.id);
    Ok(location)
}

pub fn create_new_location<R, G>(
    repo: &R,
    gateway: &G,
    policy: &GeoCodingPolicy,
    new_location: NewLocation,
) -> Result<Location>
where
    R: LocationRepo,
    G: GeoCodingGateway + ?Sized,
{
    let s = prepare_new_location(gateway, policy, new_location)?;
    store_new_location(repo, s)
}
