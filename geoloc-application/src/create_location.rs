use super::*;

/// Geocodes the address and stores the new location.
///
/// The geocoding is done before the database is accessed.
pub fn create_location<G>(
    connections: &sqlite::Connections,
    gateway: &G,
    policy: &usecases::GeoCodingPolicy,
    new_location: usecases::NewLocation,
) -> Result<Location>
where
    G: GeoCodingGateway + ?Sized,
{
    let storable = usecases::prepare_new_location(gateway, policy, new_location)?;
    let location = connections.exclusive()?.transaction(|conn| {
        usecases::store_new_location(conn, storable).map_err(|err| {
            warn!("Failed to store new location: {}", err);
            err
        })
    })?;
    Ok(location)
}
