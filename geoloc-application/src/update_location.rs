use super::*;

/// Replaces the address of an existing location.
///
/// The existing location is loaded first, the new address is
/// geocoded without holding a database connection and the
/// result is finally stored in a separate transaction.
pub fn update_location<G>(
    connections: &sqlite::Connections,
    gateway: &G,
    policy: &usecases::GeoCodingPolicy,
    id: &str,
    update: usecases::UpdateLocation,
) -> Result<Location>
where
    G: GeoCodingGateway + ?Sized,
{
    let existing = {
        let db = connections.shared()?;
        usecases::get_location(&db, id)?
    };
    let updated = usecases::prepare_updated_location(gateway, policy, existing, update)?;
    let location = connections.exclusive()?.transaction(|conn| {
        usecases::store_updated_location(conn, updated).map_err(|err| {
            warn!("Failed to store updated location: {}", err);
            err
        })
    })?;
    Ok(location)
}
