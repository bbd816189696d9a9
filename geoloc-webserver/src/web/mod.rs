use std::{net::IpAddr, sync::Arc};

use anyhow::anyhow;
use geoloc_application::prelude as flows;
use rocket::{config::Config as RocketCfg, Rocket, Route};

use crate::core::{gateways::geocode::GeoCodingGateway, usecases};

pub mod api;
mod guards;
mod sqlite;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    pub geocoding: usecases::GeoCodingPolicy,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) struct Gateways {
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;
    let Gateways { geocoding } = gateways;

    match flows::count_locations(&db) {
        Ok(count) => info!("{count} location(s) stored"),
        Err(err) => warn!("Unable to count stored locations: {err}"),
    }
    info!(
        "Geocoding policy: {:?} candidate, {:?} unresolved addresses",
        cfg.geocoding.candidate_selection, cfg.geocoding.unresolved
    );

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let geo_gw = guards::GeoCoding(geocoding);
    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(geo_gw).manage(cfg).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    address: IpAddr,
    port: u16,
    enable_cors: bool,
    cfg: Cfg,
    geocoding: Arc<dyn GeoCodingGateway + Send + Sync>,
    version: &'static str,
) -> anyhow::Result<()> {
    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = address;
    rocket_cfg.port = port;
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version,
    };
    let gateways = Gateways { geocoding };

    let instance = rocket_instance(options, db, gateways);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default()
            .to_cors()
            .map_err(|err| anyhow!("Invalid CORS configuration: {err}"))?;
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
        return Err(anyhow!("Unable to run web server: {err}"));
    }
    Ok(())
}
