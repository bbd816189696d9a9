use super::*;
use rocket::{delete, get, post, put, response::status::Created};

#[post("/locations", data = "<new_location>")]
pub async fn post_location(
    connections: sqlite::Connections,
    geo_gw: &State<GeoCoding>,
    cfg: &State<Cfg>,
    new_location: JsonResult<'_, json::NewLocation>,
) -> result::Result<Created<Json<json::Location>>, ApiError> {
    let new_location = from_json::new_location(new_location?.into_inner());
    let geocoding = Arc::clone(&geo_gw.0);
    let policy = cfg.geocoding;
    let location = run_blocking(move || {
        flows::create_location(&connections, &*geocoding, &policy, new_location)
    })
    .await?;
    let uri = format!("/locations/{}", location.id);
    Ok(Created::new(uri).body(Json(location.into())))
}

#[get("/locations/<id>")]
pub async fn get_location(
    connections: sqlite::Connections,
    id: String,
) -> Result<json::Location> {
    let location = run_blocking(move || flows::get_location(&connections, &id)).await?;
    Ok(Json(location.into()))
}

#[put("/locations/<id>", data = "<update>")]
pub async fn put_location(
    connections: sqlite::Connections,
    geo_gw: &State<GeoCoding>,
    cfg: &State<Cfg>,
    id: String,
    update: JsonResult<'_, json::UpdateLocation>,
) -> Result<json::Location> {
    // A malformed id or a missing location is reported before a malformed payload
    usecases::parse_location_id(&id)?;
    let update = match update {
        Ok(update) => from_json::update_location(update.into_inner()),
        Err(err) => {
            let err = ApiError::from(err);
            run_blocking(move || flows::get_location(&connections, &id)).await?;
            return Err(err);
        }
    };
    let geocoding = Arc::clone(&geo_gw.0);
    let policy = cfg.geocoding;
    let location = run_blocking(move || {
        flows::update_location(&connections, &*geocoding, &policy, &id, update)
    })
    .await?;
    Ok(Json(location.into()))
}

#[delete("/locations/<id>")]
pub async fn delete_location(
    connections: sqlite::Connections,
    id: String,
) -> result::Result<(), ApiError> {
    run_blocking(move || flows::delete_location(&connections, &id)).await
}
