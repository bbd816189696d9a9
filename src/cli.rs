use std::path::PathBuf;

use clap::Parser;
use geoloc_db_sqlite::Connections;
use geoloc_webserver::Cfg;

use crate::{config::Config, gateways};

#[derive(Debug, Parser)]
#[command(name = "geoloc", version, about = "Location records with geocoded addresses")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Set the port to listen
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}

pub async fn run(args: Args, version: &'static str) -> anyhow::Result<()> {
    let Args {
        config,
        db_url,
        port,
        enable_cors,
    } = args;

    let mut cfg = Config::try_load_from_file_or_default(config.as_deref())?;
    if let Some(db_url) = db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if let Some(port) = port {
        cfg.webserver.port = port;
    }
    if enable_cors {
        cfg.webserver.enable_cors = true;
    }

    info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(
        &cfg.db.conn_sqlite,
        cfg.db.conn_pool_size,
        cfg.db.conn_timeout,
    )?;
    geoloc_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let geo_gw = gateways::geocoding_gateway(&cfg.geocoding);
    let web_cfg = Cfg {
        geocoding: cfg.geocoding.policy,
    };

    geoloc_webserver::run(
        connections,
        cfg.webserver.address,
        cfg.webserver.port,
        cfg.webserver.enable_cors,
        web_cfg,
        geo_gw,
        version,
    )
    .await
}
