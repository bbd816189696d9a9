use super::*;
use crate::core::{repositories::LocationRepo, usecases};

pub mod prelude {

    use crate::web::{self, api, sqlite};
    use std::sync::Arc;

    pub use crate::web::{
        tests::prelude::{LocalResponse as Response, *},
        Cfg,
    };

    pub const SPRINGFIELD_1: &str = "1+Main+St+Springfield+IL";
    pub const SPRINGFIELD_2: &str = "2+Main+St+Springfield+IL";

    pub fn springfield() -> ScriptedGeoCoding {
        ScriptedGeoCoding::default()
            .answer(SPRINGFIELD_1, &[(39.78, -89.65)])
            .answer(SPRINGFIELD_2, &[(39.79, -89.64)])
    }

    pub fn setup() -> (Client, sqlite::Connections, Arc<ScriptedGeoCoding>) {
        setup_with_cfg(Cfg::default(), springfield())
    }

    pub fn setup_with_cfg(
        cfg: Cfg,
        geocoding: ScriptedGeoCoding,
    ) -> (Client, sqlite::Connections, Arc<ScriptedGeoCoding>) {
        web::tests::setup_with_cfg(vec![("/", api::routes())], cfg, geocoding)
    }

    pub fn test_json(r: &Response) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn create_location(client: &Client, body: &str) -> crate::adapters::json::Location {
        let response = client
            .post("/locations")
            .header(ContentType::JSON)
            .body(body)
            .dispatch();
        assert_eq!(Status::Created, response.status());
        serde_json::from_str(&response.into_string().unwrap()).unwrap()
    }

    pub const NEW_LOCATION_A: &str = r#"{"name":"A","address":"1 Main St","city":"Springfield","state":"IL","zip":"62701"}"#;
}

use self::prelude::*;

fn read_error(response: Response) -> json::Error {
    serde_json::from_str(&response.into_string().unwrap()).unwrap()
}

#[test]
fn post_new_location() {
    let (client, db, geocoding) = setup();
    let response = client
        .post("/locations")
        .header(ContentType::JSON)
        .body(NEW_LOCATION_A)
        .dispatch();
    assert_eq!(Status::Created, response.status());
    test_json(&response);
    let header = response
        .headers()
        .get_one("Location")
        .map(ToString::to_string)
        .unwrap();
    let location: json::Location = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(format!("/locations/{}", location.id), header);
    assert!(!location.id.is_empty());
    assert_eq!("A", location.name);
    assert_eq!("1 Main St", location.address);
    assert_eq!("Springfield", location.city);
    assert_eq!("IL", location.state);
    assert_eq!("62701", location.zip);
    assert_eq!(
        Some(json::Coordinate {
            lat: 39.78,
            lng: -89.65
        }),
        location.coordinate
    );
    assert_eq!(1, geocoding.call_count());
    assert_eq!(1, db.shared().unwrap().count_locations().unwrap());
}

#[test]
fn create_location_with_last_candidate() {
    let geocoding = ScriptedGeoCoding::default()
        .answer(SPRINGFIELD_1, &[(1.0, 2.0), (3.0, 4.0)]);
    let (client, _, _) = setup_with_cfg(Cfg::default(), geocoding);
    let location = create_location(&client, NEW_LOCATION_A);
    assert_eq!(Some(json::Coordinate { lat: 3.0, lng: 4.0 }), location.coordinate);
}

#[test]
fn create_location_with_first_candidate() {
    let geocoding = ScriptedGeoCoding::default()
        .answer(SPRINGFIELD_1, &[(1.0, 2.0), (3.0, 4.0)]);
    let cfg = Cfg {
        geocoding: usecases::GeoCodingPolicy {
            candidate_selection: usecases::CandidateSelection::First,
            ..Default::default()
        },
    };
    let (client, _, _) = setup_with_cfg(cfg, geocoding);
    let location = create_location(&client, NEW_LOCATION_A);
    assert_eq!(Some(json::Coordinate { lat: 1.0, lng: 2.0 }), location.coordinate);
}

#[test]
fn ignore_coordinate_of_client() {
    let (client, _, _) = setup();
    let location = create_location(
        &client,
        r#"{"name":"A","address":"1 Main St","city":"Springfield","state":"IL","zip":"62701","coordinate":{"lat":1.0,"lng":1.0}}"#,
    );
    assert_eq!(
        Some(json::Coordinate {
            lat: 39.78,
            lng: -89.65
        }),
        location.coordinate
    );
}

#[test]
fn create_unresolved_location() {
    let (client, db, _) = setup();
    let location = create_location(
        &client,
        r#"{"name":"X","address":"Nowhere","city":"","state":"","zip":""}"#,
    );
    assert!(location.coordinate.is_none());
    let stored = db.shared().unwrap().get_location(&location.id).unwrap();
    assert!(stored.pos.is_none());
}

#[test]
fn reject_unresolved_location() {
    let cfg = Cfg {
        geocoding: usecases::GeoCodingPolicy {
            unresolved: usecases::UnresolvedPolicy::Reject,
            ..Default::default()
        },
    };
    let (client, db, _) = setup_with_cfg(cfg, springfield());
    let response = client
        .post("/locations")
        .header(ContentType::JSON)
        .body(r#"{"name":"X","address":"Nowhere","city":"","state":"","zip":""}"#)
        .dispatch();
    assert_eq!(Status::UnprocessableEntity, response.status());
    test_json(&response);
    assert_eq!(422, read_error(response).http_status);
    assert_eq!(0, db.shared().unwrap().count_locations().unwrap());
}

#[test]
fn create_location_with_malformed_payload() {
    let (client, db, geocoding) = setup();
    for body in [
        r#"{"name":"A","address":"1 Main St"}"#,
        r#"{"name":"A","address":1,"city":"x","state":"x","zip":"x"}"#,
        "not json",
    ] {
        let response = client
            .post("/locations")
            .header(ContentType::JSON)
            .body(body)
            .dispatch();
        assert_eq!(Status::UnprocessableEntity, response.status());
    }
    assert_eq!(0, geocoding.call_count());
    assert_eq!(0, db.shared().unwrap().count_locations().unwrap());
}

#[test]
fn get_location() {
    let (client, _, _) = setup();
    let created = create_location(&client, NEW_LOCATION_A);
    let response = client.get(format!("/locations/{}", created.id)).dispatch();
    assert_eq!(Status::Ok, response.status());
    test_json(&response);
    let location: json::Location = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(created, location);
}

#[test]
fn get_missing_location() {
    let (client, _, _) = setup();
    let id = geoloc_entities::id::Id::new();
    let response = client.get(format!("/locations/{id}")).dispatch();
    assert_eq!(Status::NotFound, response.status());
    test_json(&response);
    assert_eq!(404, read_error(response).http_status);
}

#[test]
fn get_location_with_malformed_id() {
    let (client, _, geocoding) = setup();
    let response = client.get("/locations/562c6545d5cc55178495951").dispatch();
    assert_eq!(Status::NotFound, response.status());
    assert_eq!(0, geocoding.call_count());
}

#[test]
fn update_location() {
    let (client, db, _) = setup();
    let created = create_location(&client, NEW_LOCATION_A);
    let response = client
        .put(format!("/locations/{}", created.id))
        .header(ContentType::JSON)
        .body(r#"{"address":"2 Main St","city":"Springfield","state":"IL","zip":"62702"}"#)
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    test_json(&response);
    let updated: json::Location = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(created.id, updated.id);
    assert_eq!("A", updated.name);
    assert_eq!("2 Main St", updated.address);
    assert_eq!("62702", updated.zip);
    assert_eq!(
        Some(json::Coordinate {
            lat: 39.79,
            lng: -89.64
        }),
        updated.coordinate
    );
    let stored = db.shared().unwrap().get_location(&created.id).unwrap();
    assert_eq!("A", stored.name);
    assert_eq!("2 Main St", stored.address.street);
}

#[test]
fn update_location_ignores_name() {
    let (client, _, _) = setup();
    let created = create_location(&client, NEW_LOCATION_A);
    let response = client
        .put(format!("/locations/{}", created.id))
        .header(ContentType::JSON)
        .body(r#"{"name":"B","address":"2 Main St","city":"Springfield","state":"IL","zip":"62702"}"#)
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let response = client.get(format!("/locations/{}", created.id)).dispatch();
    let location: json::Location = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!("A", location.name);
}

#[test]
fn update_location_with_unresolved_address() {
    let (client, _, _) = setup();
    let created = create_location(&client, NEW_LOCATION_A);
    assert!(created.coordinate.is_some());
    let response = client
        .put(format!("/locations/{}", created.id))
        .header(ContentType::JSON)
        .body(r#"{"address":"Nowhere","city":"","state":"","zip":""}"#)
        .dispatch();
    assert_eq!(Status::Ok, response.status());
    let updated: json::Location = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert!(updated.coordinate.is_none());
}

#[test]
fn update_missing_location() {
    let (client, _, geocoding) = setup();
    let id = geoloc_entities::id::Id::new();
    let response = client
        .put(format!("/locations/{id}"))
        .header(ContentType::JSON)
        .body(r#"{"address":"2 Main St","city":"Springfield","state":"IL","zip":"62702"}"#)
        .dispatch();
    assert_eq!(Status::NotFound, response.status());
    assert_eq!(0, geocoding.call_count());
}

#[test]
fn update_location_with_malformed_payload() {
    let (client, db, _) = setup();
    let created = create_location(&client, NEW_LOCATION_A);
    let response = client
        .put(format!("/locations/{}", created.id))
        .header(ContentType::JSON)
        .body(r#"{"address":"2 Main St"}"#)
        .dispatch();
    assert_eq!(Status::UnprocessableEntity, response.status());
    let stored = db.shared().unwrap().get_location(&created.id).unwrap();
    assert_eq!("1 Main St", stored.address.street);
}

#[test]
fn update_missing_location_with_malformed_payload() {
    let (client, db, geocoding) = setup();
    let id = geoloc_entities::id::Id::new();
    let response = client
        .put(format!("/locations/{id}"))
        .header(ContentType::JSON)
        .body(r#"{"address":"2 Main St"}"#)
        .dispatch();
    assert_eq!(Status::NotFound, response.status());
    test_json(&response);
    assert_eq!(404, read_error(response).http_status);
    assert_eq!(0, geocoding.call_count());
    assert_eq!(0, db.shared().unwrap().count_locations().unwrap());
}

#[test]
fn update_location_with_malformed_id_and_payload() {
    let (client, _, geocoding) = setup();
    let response = client
        .put("/locations/foo")
        .header(ContentType::JSON)
        .body("not json")
        .dispatch();
    assert_eq!(Status::NotFound, response.status());
    assert_eq!(0, geocoding.call_count());
}

#[test]
fn delete_location() {
    let (client, db, _) = setup();
    let created = create_location(&client, NEW_LOCATION_A);
    let response = client.delete(format!("/locations/{}", created.id)).dispatch();
    assert_eq!(Status::Ok, response.status());
    assert!(response.into_string().unwrap_or_default().is_empty());
    let response = client.get(format!("/locations/{}", created.id)).dispatch();
    assert_eq!(Status::NotFound, response.status());
    let response = client.delete(format!("/locations/{}", created.id)).dispatch();
    assert_eq!(Status::NotFound, response.status());
    assert_eq!(0, db.shared().unwrap().count_locations().unwrap());
}

#[test]
fn delete_location_with_malformed_id() {
    let (client, _, _) = setup();
    let response = client.delete("/locations/foo").dispatch();
    assert_eq!(Status::NotFound, response.status());
}

#[test]
fn create_and_move_location() {
    let geocoding = ScriptedGeoCoding::default()
        .answer(SPRINGFIELD_1, &[(39.78, -89.65)])
        .answer(SPRINGFIELD_2, &[(39.79, -89.64)]);
    let (client, _, geocoding) = setup_with_cfg(Cfg::default(), geocoding);
    let created = create_location(&client, NEW_LOCATION_A);
    assert_eq!(
        Some(json::Coordinate {
            lat: 39.78,
            lng: -89.65
        }),
        created.coordinate
    );
    let response = client
        .put(format!("/locations/{}", created.id))
        .header(ContentType::JSON)
        .body(r#"{"address":"2 Main St","city":"Springfield","state":"IL","zip":"62701"}"#)
        .dispatch();
    let updated: json::Location = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(
        json::Location {
            id: created.id.clone(),
            name: "A".into(),
            address: "2 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip: "62701".into(),
            coordinate: Some(json::Coordinate {
                lat: 39.79,
                lng: -89.64
            }),
        },
        updated
    );
    assert_eq!(2, geocoding.call_count());
}

#[test]
fn get_version() {
    let (client, _, _) = setup();
    let response = client.get("/server/version").dispatch();
    assert_eq!(Status::Ok, response.status());
    assert_eq!(DUMMY_VERSION, response.into_string().unwrap());
}
