use std::{fmt::Display, result, sync::Arc};

use geoloc_boundary::Error as JsonErrorResponse;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    routes, Route, State,
};

use super::{guards::*, sqlite, Cfg};
use crate::{
    adapters::json::{self, from_json},
    core::usecases,
};
use geoloc_application::{error::AppError, prelude as flows};

mod error;
mod locations;
mod util;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   locations   --- //
        locations::post_location,
        locations::get_location,
        locations::put_location,
        locations::delete_location,
        // ---   server   --- //
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

/// Database access and geocoding requests are blocking
/// and must not stall the async executor.
async fn run_blocking<T, F>(f: F) -> result::Result<T, ApiError>
where
    F: FnOnce() -> result::Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    rocket::tokio::task::spawn_blocking(f)
        .await
        .map_err(|err| ApiError::Other(anyhow::anyhow!("Blocking task failed: {err}")))?
        .map_err(Into::into)
}
