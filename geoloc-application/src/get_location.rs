use super::*;

pub fn get_location(connections: &sqlite::Connections, id: &str) -> Result<Location> {
    let db = connections.shared()?;
    Ok(usecases::get_location(&db, id)?)
}

pub fn count_locations(connections: &sqlite::Connections) -> Result<usize> {
    let db = connections.shared()?;
    Ok(db.count_locations()?)
}
