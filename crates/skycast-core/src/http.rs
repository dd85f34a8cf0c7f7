//! Blocking GET + status mapping + JSON decode shared by both API clients.

use reqwest::{StatusCode, Url, blocking::Client};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Error, Result};

pub(crate) fn get_json<T: DeserializeOwned>(client: &Client, url: &Url) -> Result<T> {
    debug!("GET {url}");

    let response = client
        .get(url.clone())
        .send()
        .map_err(|e| Error::Transport(e.to_string()))?;

    check_status(response.status(), url)?;

    let body = response.text().map_err(|e| Error::Transport(e.to_string()))?;
    debug!("response body: {body}");

    serde_json::from_str(&body).map_err(|e| Error::Decode(e.to_string()))
}

/// Map a non-2xx status to the user-facing error for it.
///
/// For 404 on a by-name query the offending city is recovered from the
/// URL's `q` pair (`+` decodes back to a space); coordinate queries fall
/// back to a generic location string.
pub(crate) fn check_status(status: StatusCode, url: &Url) -> Result<()> {
    match status {
        StatusCode::UNAUTHORIZED => Err(Error::InvalidApiKey),
        StatusCode::NOT_FOUND => Err(Error::LocationNotFound(
            city_from_url(url).unwrap_or_else(|| "requested location".to_string()),
        )),
        s if !s.is_success() => Err(Error::Http(s.as_u16())),
        _ => Ok(()),
    }
}

fn city_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
}
