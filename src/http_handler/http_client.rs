use super::common::{FORM_CONTENT_TYPE, HTTPError, HTTPRequestMethod, RequestBody, TransportError};
use super::cookie_store::CookieStore;
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderValue, SET_COOKIE};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

/// Port of the balance server answering the discovery call.
pub const DEFAULT_DISCOVERY_PORT: u16 = 7264;

/// Transport settings of an [`HTTPClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HTTPClientConfig {
    /// Port the discovery call is sent to on the entry-point host.
    pub discovery_port: u16,
    /// Overall deadline per request. No deadline is enforced when unset.
    pub timeout: Option<Duration>,
}

impl Default for HTTPClientConfig {
    fn default() -> Self { Self { discovery_port: DEFAULT_DISCOVERY_PORT, timeout: None } }
}

/// A thin wrapper around `reqwest::Client` that performs single request
/// exchanges with per-host cookie replay.
///
/// The wrapper holds no session state; cookies live in the [`CookieStore`]
/// handed to [`HTTPClient::execute`], which is owned by a session.
#[derive(Debug, Clone)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    config: HTTPClientConfig,
}

impl HTTPClient {
    /// Constructs a new `HTTPClient` from the given transport settings.
    ///
    /// # Errors
    /// [`TransportError::Request`] if the TLS backend cannot be initialised.
    pub fn new(config: HTTPClientConfig) -> Result<HTTPClient, HTTPError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(TransportError::from)?;
        Ok(HTTPClient { client, config })
    }

    /// Returns the transport settings the client was built with.
    pub fn config(&self) -> &HTTPClientConfig { &self.config }

    /// Performs one exchange against `url`.
    ///
    /// Cookies stored for the destination host are attached, any
    /// `Set-Cookie` values of the response replace them, and a status above
    /// 299 is reported as [`HTTPError::HTTPStatus`]. Cancelling `cancel`
    /// aborts the exchange with [`TransportError::Cancelled`].
    ///
    /// # Errors
    /// [`HTTPError::Transport`] or [`HTTPError::HTTPStatus`].
    pub async fn execute(
        &self,
        cookies: &mut CookieStore,
        cancel: &CancellationToken,
        method: HTTPRequestMethod,
        url: Url,
        body: &RequestBody,
    ) -> Result<Bytes, HTTPError> {
        let host = CookieStore::host_key(&url);
        debug!("Making request: {method} {url}");

        let mut request = self.client.request(method.into(), url);
        match body {
            RequestBody::Empty => (),
            RequestBody::Form(encoded) => {
                debug!("Request: Body: {encoded}");
                request = request
                    .header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
                    .body(encoded.clone());
            }
            RequestBody::Json(value) => {
                let contents = serde_json::to_vec(value).map_err(TransportError::Encode)?;
                debug!("Request: Body length: {}", contents.len());
                request = request.body(contents);
            }
        }
        for cookie in cookies.attach(&host) {
            let value = HeaderValue::from_str(cookie)
                .map_err(|_| TransportError::InvalidCookie(host.clone()))?;
            request = request.header(COOKIE, value);
        }

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(TransportError::Cancelled.into()),
            response = request.send() => response.map_err(TransportError::from)?,
        };

        let set_cookies: Vec<String> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect();
        if !set_cookies.is_empty() {
            debug!("Recording {} cookie(s) for {host}", set_cookies.len());
            cookies.record(&host, set_cookies);
        }

        let status = response.status().as_u16();
        debug!("Response status: {status}");
        if status > 299 {
            return Err(HTTPError::HTTPStatus(status));
        }

        let contents = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(TransportError::Cancelled.into()),
            contents = response.bytes() => contents.map_err(TransportError::from)?,
        };
        debug!("Response body: {}", String::from_utf8_lossy(&contents));
        Ok(contents)
    }
}
