use crate::{address::*, geo::*, id::*};

/// A named physical location.
///
/// The position is derived from the address by geocoding and
/// is `None` if the address could not be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: Id,
    pub name: String,
    pub address: Address,
    pub pos: Option<MapPoint>,
}

impl Location {
    pub fn is_resolved(&self) -> bool {
        self.pos.is_some()
    }
}
