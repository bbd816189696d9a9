use super::*;

pub fn delete_location(connections: &sqlite::Connections, id: &str) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_location(conn, id))?)
}
