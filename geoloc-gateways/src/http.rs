use std::time::Duration;

use geoloc_core::gateways::geocode::GeoCodingError;
use itertools::Itertools;
use reqwest::{blocking::Client, StatusCode};
use url::Url;

/// Performs a blocking GET request.
///
/// The timeout covers the whole request including
/// reading the response body.
pub(crate) fn get(url: Url, timeout: Duration) -> Result<(StatusCode, String), GeoCodingError> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(transport_error)?;
    let response = client.get(url).send().map_err(transport_error)?;
    let status = response.status();
    let body = response.text().map_err(transport_error)?;
    Ok((status, body))
}

fn transport_error(err: reqwest::Error) -> GeoCodingError {
    if err.is_timeout() {
        log::warn!("Geocoding request timed out");
    }
    GeoCodingError::Transport(err.into())
}

/// Appends pre-encoded parameters to the query of an URL.
///
/// Parameters that are already part of the base URL are kept.
pub(crate) fn with_query(base_url: &Url, params: &[(&str, &str)]) -> Url {
    let params = params
        .iter()
        .map(|(key, value)| format!("{key}={value}"));
    let query = base_url
        .query()
        .filter(|query| !query.is_empty())
        .map(ToString::to_string)
        .into_iter()
        .chain(params)
        .join("&");
    let mut url = base_url.clone();
    url.set_query(Some(&query));
    url
}

pub(crate) fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
