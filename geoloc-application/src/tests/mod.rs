pub mod prelude {

    use std::cell::Cell;

    pub use geoloc_core::{
        entities::*,
        gateways::geocode::{GeoCodingCandidate, GeoCodingError, GeoCodingGateway},
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    /// Knows the positions of a few addresses in Springfield.
    #[derive(Default)]
    pub struct AddressBookGeoCoding {
        calls: Cell<usize>,
    }

    impl AddressBookGeoCoding {
        pub fn call_count(&self) -> usize {
            self.calls.get()
        }
    }

    impl GeoCodingGateway for AddressBookGeoCoding {
        fn forward(&self, query: &str) -> Result<Vec<GeoCodingCandidate>, GeoCodingError> {
            self.calls.set(self.calls.get() + 1);
            let pos = match query {
                "1+Main+St+Springfield+IL" => (39.7817, -89.6501),
                "2+Main+St+Springfield+IL" => (39.79, -89.64),
                _ => return Ok(vec![]),
            };
            Ok(vec![GeoCodingCandidate {
                pos: MapPoint::try_from_lat_lng_deg(pos.0, pos.1)?,
                formatted_address: query.replace('+', " "),
                types: vec!["street_address".into()],
            }])
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub geocoding: AddressBookGeoCoding,
        pub policy: usecases::GeoCodingPolicy,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self::with_policy(Default::default())
        }

        pub fn with_policy(policy: usecases::GeoCodingPolicy) -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections =
                sqlite::Connections::init(":memory:", 1, std::time::Duration::from_secs(5))
                    .unwrap();
            geoloc_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                geocoding: AddressBookGeoCoding::default(),
                policy,
            }
        }

        pub fn create_location(
            &self,
            new_location: usecases::NewLocation,
        ) -> crate::Result<Location> {
            flows::create_location(
                &self.db_connections,
                &self.geocoding,
                &self.policy,
                new_location,
            )
        }

        pub fn update_location(
            &self,
            id: &str,
            update: usecases::UpdateLocation,
        ) -> crate::Result<Location> {
            flows::update_location(
                &self.db_connections,
                &self.geocoding,
                &self.policy,
                id,
                update,
            )
        }

        pub fn try_get_location(&self, id: &str) -> Option<Location> {
            match self.db_connections.shared().unwrap().get_location(id) {
                Ok(x) => Some(x),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn count_locations(&self) -> usize {
            flows::count_locations(&self.db_connections).unwrap()
        }
    }

    pub fn new_location(name: &str, street: &str) -> usecases::NewLocation {
        usecases::NewLocation {
            name: name.into(),
            street: street.into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip: "62701".into(),
        }
    }

    pub fn location_id(location: &Location) -> &str {
        location.id.as_str()
    }
}
