#![allow(clippy::extra_unused_lifetimes)]

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = locations)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub street: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip: &'a str,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Queryable)]
pub struct Location {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

// The name of a location is immutable and therefore
// not part of the change set.
#[derive(AsChangeset)]
#[diesel(table_name = locations, treat_none_as_null = true)]
pub struct LocationAddress<'a> {
    pub street: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip: &'a str,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
