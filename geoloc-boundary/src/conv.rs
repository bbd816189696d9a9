use super::*;
use geoloc_entities as e;

impl From<e::geo::MapPoint> for Coordinate {
    fn from(from: e::geo::MapPoint) -> Self {
        let (lat, lng) = from.to_lat_lng_deg();
        Self { lat, lng }
    }
}

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let e::location::Location {
            id,
            name,
            address,
            pos,
        } = from;
        let e::address::Address {
            street,
            city,
            state,
            zip,
        } = address;
        Self {
            id: id.into(),
            name,
            address: street,
            city,
            state,
            zip,
            coordinate: pos.map(Into::into),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_from_entity() {
        let pos = e::geo::MapPoint::try_from_lat_lng_deg(39.78, -89.65).unwrap();
        let location = e::location::Location {
            id: "d1a5e3c9b6f04e0e8a4b0c6f4d8e2a17".into(),
            name: "A".into(),
            address: e::address::Address {
                street: "1 Main St".into(),
                city: "Springfield".into(),
                state: "IL".into(),
                zip: "62701".into(),
            },
            pos: Some(pos),
        };
        let json = Location::from(location);
        assert_eq!("d1a5e3c9b6f04e0e8a4b0c6f4d8e2a17", json.id);
        assert_eq!("1 Main St", json.address);
        let Coordinate { lat, lng } = json.coordinate.unwrap();
        assert_eq!((39.78, -89.65), (lat, lng));
    }
}
