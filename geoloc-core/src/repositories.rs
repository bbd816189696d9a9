// Low-level database access traits.
// Each repository is responsible for a single entity.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait LocationRepo {
    fn create_location(&self, location: &Location) -> Result<()>;

    fn get_location(&self, id: &str) -> Result<Location>;
    fn count_locations(&self) -> Result<usize>;

    // Replaces the address and the position. All other
    // fields of the stored location remain untouched.
    fn update_location_address(
        &self,
        id: &str,
        address: &Address,
        pos: Option<MapPoint>,
    ) -> Result<()>;

    fn delete_location(&self, id: &str) -> Result<()>;
}
