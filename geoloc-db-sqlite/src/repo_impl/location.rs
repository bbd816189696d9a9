use super::*;

impl LocationRepo for DbReadWrite<'_> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
    fn update_location_address(
        &self,
        id: &str,
        address: &Address,
        pos: Option<MapPoint>,
    ) -> Result<()> {
        update_location_address(&mut self.conn.borrow_mut(), id, address, pos)
    }
    fn delete_location(&self, id: &str) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }
}

impl LocationRepo for DbConnection<'_> {
    fn create_location(&self, location: &Location) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
    fn update_location_address(
        &self,
        id: &str,
        address: &Address,
        pos: Option<MapPoint>,
    ) -> Result<()> {
        update_location_address(&mut self.conn.borrow_mut(), id, address, pos)
    }
    fn delete_location(&self, id: &str) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }
}

impl LocationRepo for DbReadOnly<'_> {
    fn create_location(&self, _location: &Location) -> Result<()> {
        unreachable!();
    }
    fn get_location(&self, id: &str) -> Result<Location> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
    fn update_location_address(
        &self,
        _id: &str,
        _address: &Address,
        _pos: Option<MapPoint>,
    ) -> Result<()> {
        unreachable!();
    }
    fn delete_location(&self, _id: &str) -> Result<()> {
        unreachable!();
    }
}

fn split_pos(pos: Option<MapPoint>) -> (Option<f64>, Option<f64>) {
    match pos {
        Some(pos) => (Some(pos.lat()), Some(pos.lng())),
        None => (None, None),
    }
}

fn load_location(location: models::Location) -> Result<Location> {
    let models::Location {
        rowid: _,
        id,
        name,
        street,
        city,
        state,
        zip,
        lat,
        lng,
    } = location;
    let pos = match (lat, lng) {
        (Some(lat), Some(lng)) => Some(
            MapPoint::try_from_lat_lng_deg(lat, lng)
                .map_err(|err| repo::Error::Other(err.into()))?,
        ),
        (None, None) => None,
        _ => {
            // This should never happen due to the table constraints
            log::warn!("Location {id} has an incomplete position");
            None
        }
    };
    Ok(Location {
        id: id.into(),
        name,
        address: Address {
            street,
            city,
            state,
            zip,
        },
        pos,
    })
}

fn create_location(conn: &mut SqliteConnection, location: &Location) -> Result<()> {
    let Location {
        id,
        name,
        address,
        pos,
    } = location;
    let (lat, lng) = split_pos(*pos);
    let new_location = models::NewLocation {
        id: id.as_str(),
        name,
        street: &address.street,
        city: &address.city,
        state: &address.state,
        zip: &address.zip,
        lat,
        lng,
    };
    diesel::insert_into(schema::locations::table)
        .values(&new_location)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_location(conn: &mut SqliteConnection, id: &str) -> Result<Location> {
    use schema::locations::dsl;
    let location = schema::locations::table
        .filter(dsl::id.eq(id))
        .first::<models::Location>(conn)
        .map_err(from_diesel_err)?;
    load_location(location)
}

fn count_locations(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::locations::dsl;
    Ok(schema::locations::table
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn update_location_address(
    conn: &mut SqliteConnection,
    id: &str,
    address: &Address,
    pos: Option<MapPoint>,
) -> Result<()> {
    use schema::locations::dsl;
    let (lat, lng) = split_pos(pos);
    let changes = models::LocationAddress {
        street: &address.street,
        city: &address.city,
        state: &address.state,
        zip: &address.zip,
        lat,
        lng,
    };
    let count = diesel::update(schema::locations::table.filter(dsl::id.eq(id)))
        .set(&changes)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_location(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::locations::dsl;
    let count = diesel::delete(schema::locations::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
