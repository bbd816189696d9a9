use super::prelude::*;

/// Validates an identifier received from the outside.
pub fn parse_location_id(id: &str) -> Result<Id> {
    Id::parse_uuid(id).map_err(|err| {
        log::debug!("{err}");
        Error::from(err)
    })
}

pub fn get_location<R: LocationRepo>(repo: &R, id: &str) -> Result<Location> {
    let id = parse_location_id(id)?;
    Ok(repo.get_location(id.as_str())?)
}
