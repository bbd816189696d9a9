#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use std::{net::IpAddr, sync::Arc};

use geoloc_core::gateways::geocode::GeoCodingGateway;
use geoloc_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    address: IpAddr,
    port: u16,
    enable_cors: bool,
    cfg: Cfg,
    geo_gw: Arc<dyn GeoCodingGateway + Send + Sync>,
    version: &'static str,
) -> anyhow::Result<()> {
    web::run(
        connections.into(),
        address,
        port,
        enable_cors,
        cfg,
        geo_gw,
        version,
    )
    .await
}
