use super::prelude::*;
use super::get_location::parse_location_id;

/// Deletes a location permanently.
///
/// Deleting a location that doesn't exist (anymore) fails with `NotFound`.
pub fn delete_location<R: LocationRepo>(repo: &R, id: &str) -> Result<()> {
    let id = parse_location_id(id)?;
    repo.delete_location(id.as_str())?;
    log::debug!("Deleted location {id}");
    Ok(())
}
