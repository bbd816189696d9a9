use super::*;
use rocket::get;

#[get("/server/version")]
pub fn get_version(version: &State<Version>) -> &'static str {
    version.0
}
