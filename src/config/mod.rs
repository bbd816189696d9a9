use anyhow::{anyhow, Result};
use geoloc_core::usecases::{CandidateSelection, GeoCodingPolicy, UnresolvedPolicy};
use std::{env, fs, io::ErrorKind, net::IpAddr, path::Path, time::Duration};
use url::Url;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geoloc.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
    /// Maximum time to wait for a pooled connection or a locked table.
    pub conn_timeout: Duration,
}

pub struct WebServer {
    pub address: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
}

pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    pub timeout: Duration,
    pub policy: GeoCodingPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodingGateway {
    GoogleMaps {
        api_key: Option<String>,
        base_url: Url,
    },
    OpenCage {
        api_key: String,
        base_url: Url,
    },
}

fn parse_base_url(base_url: Option<String>, default: &str) -> Result<Url> {
    let url = base_url.as_deref().unwrap_or(default);
    Url::parse(url).map_err(|err| anyhow!("Invalid geocoding base URL '{url}': {err}"))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            webserver,
            geocoding,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
            connection_timeout,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must not be 0"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
            conn_timeout: connection_timeout,
        };

        let raw::WebServer {
            address,
            port,
            cors,
        } = webserver.unwrap_or_default();
        let webserver = WebServer {
            address,
            port,
            enable_cors: cors,
        };

        let raw::Geocoding {
            gateway: gateway_name,
            timeout,
            candidate_selection,
            unresolved,
        } = geocoding.unwrap_or_default();

        let geo_gateway = match gateway_name {
            Some(gw_name) => {
                let gateway = gateway.unwrap_or_default();
                let gw = match gw_name {
                    raw::GeocodingGateway::GoogleMaps => {
                        let raw::GoogleMaps { api_key, base_url } =
                            gateway.google_maps.unwrap_or_default();
                        GeocodingGateway::GoogleMaps {
                            api_key,
                            base_url: parse_base_url(
                                base_url,
                                geoloc_gateways::google_maps::DEFAULT_BASE_URL,
                            )?,
                        }
                    }
                    raw::GeocodingGateway::Opencage => {
                        let raw::OpenCage { api_key, base_url } =
                            gateway.opencage.ok_or_else(|| {
                                anyhow!("Missing [gateway.opencage] configuration")
                            })?;
                        GeocodingGateway::OpenCage {
                            api_key,
                            base_url: parse_base_url(
                                base_url,
                                geoloc_gateways::opencage::DEFAULT_BASE_URL,
                            )?,
                        }
                    }
                };
                Some(gw)
            }
            None => None,
        };

        let candidate_selection = match candidate_selection {
            raw::CandidateSelection::First => CandidateSelection::First,
            raw::CandidateSelection::Last => CandidateSelection::Last,
        };
        let unresolved = match unresolved {
            raw::UnresolvedPolicy::Store => UnresolvedPolicy::Store,
            raw::UnresolvedPolicy::Reject => UnresolvedPolicy::Reject,
        };
        let geocoding = Geocoding {
            gateway: geo_gateway,
            timeout,
            policy: GeoCodingPolicy {
                candidate_selection,
                unresolved,
            },
        };

        Ok(Self {
            db,
            webserver,
            geocoding,
        })
    }
}
