use super::common::{HTTPError, HTTPRequestMethod, RequestBody, TransportError};
use super::cookie_store::CookieStore;
use super::http_client::HTTPClient;
use super::http_request::inner_key_get::InnerKeyRequest;
use super::http_request::request_common::NoBodyHTTPRequestType;
use super::http_request::servers_get::ServersRequest;
use super::service_directory::ServiceDirectory;
use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use url::Url;

/// Service the login key is obtained from.
pub const WEBCLIENT_SERVICE: &str = "webclient";

/// An authenticated conversation with one fleet platform.
///
/// A session owns the service directory announced by the entry point, the
/// per-host cookies collected so far and the session key. Dispatching
/// mutates the cookies, so a session is driven from one task at a time;
/// independent sessions share nothing.
#[derive(Debug)]
pub struct Session {
    client: HTTPClient,
    entry_point: String,
    directory: ServiceDirectory,
    cookies: CookieStore,
    key: String,
    cancel: CancellationToken,
}

impl Session {
    /// Discovers the platform's services and logs in with `username`.
    ///
    /// # Errors
    /// Any [`HTTPError`] of the discovery call, and
    /// [`HTTPError::Authentication`] if the key request is rejected or
    /// returns no key.
    pub async fn login(
        client: HTTPClient,
        cancel: &CancellationToken,
        entry_point: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, HTTPError> {
        let mut session = Self::resume(client, cancel, entry_point, String::new()).await?;

        let request = InnerKeyRequest::new(username, password);
        let response = match request.send_request(&mut session).await {
            Err(HTTPError::HTTPStatus(status)) => {
                return Err(HTTPError::Authentication(format!("key request returned status {status}")));
            }
            other => other?,
        };
        let escaped = response.key().filter(|key| !key.is_empty()).ok_or_else(|| {
            HTTPError::Authentication("login response did not contain a key".to_owned())
        })?;
        session.key = unescape_key(escaped)?;
        info!("Logged in to {entry_point} as {username}");
        Ok(session)
    }

    /// Rebuilds a session around a key obtained earlier.
    ///
    /// The service directory is still fetched from the entry point, but no
    /// credentials are sent.
    ///
    /// # Errors
    /// Any [`HTTPError`] of the discovery call.
    pub async fn resume(
        client: HTTPClient,
        cancel: &CancellationToken,
        entry_point: &str,
        key: String,
    ) -> Result<Session, HTTPError> {
        let mut cookies = CookieStore::default();
        let discovery =
            ServersRequest::new(entry_point).send_request(&client, &mut cookies, cancel).await?;
        let directory = discovery.into_directory();
        debug!("Discovered {} service(s): {:?}", directory.len(), directory.names().collect::<Vec<_>>());
        Ok(Session {
            client,
            entry_point: entry_point.to_owned(),
            directory,
            cookies,
            key,
            cancel: cancel.clone(),
        })
    }

    /// Assembles a session without any network traffic.
    pub fn from_parts(
        client: HTTPClient,
        entry_point: &str,
        directory: ServiceDirectory,
        key: String,
    ) -> Session {
        Session {
            client,
            entry_point: entry_point.to_owned(),
            directory,
            cookies: CookieStore::default(),
            key,
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the token that aborts this session's in-flight requests.
    #[must_use]
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Session {
        self.cancel = cancel;
        self
    }

    pub fn key(&self) -> &str { &self.key }
    pub fn entry_point(&self) -> &str { &self.entry_point }
    pub fn directory(&self) -> &ServiceDirectory { &self.directory }
    pub fn cookies(&self) -> &CookieStore { &self.cookies }

    /// Sends one request to the named service and returns the raw body.
    ///
    /// # Errors
    /// [`HTTPError::UnknownService`] before any network traffic if `service`
    /// is not in the directory, otherwise the errors of
    /// [`HTTPClient::execute`].
    pub async fn dispatch<I, K, V>(
        &mut self,
        service: &str,
        method: HTTPRequestMethod,
        path: &str,
        query: I,
        body: RequestBody,
    ) -> Result<Bytes, HTTPError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let base = self.directory.resolve(service, &self.entry_point)?;
        debug!("Server {service:?}: {:?}", self.directory.get(service));
        let url = service_url(&base, path, query)?;
        self.client.execute(&mut self.cookies, &self.cancel, method, url, &body).await
    }
}

/// Joins `base` and `path` and appends `query`.
pub(crate) fn service_url<I, K, V>(base: &str, path: &str, query: I) -> Result<Url, HTTPError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let path = path.strip_prefix('/').unwrap_or(path);
    let mut url = Url::parse(&format!("{base}/{path}")).map_err(TransportError::from)?;
    let mut pairs = query.into_iter().peekable();
    if pairs.peek().is_some() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(url)
}

/// Undoes the single layer of percent-escaping the platform applies to
/// login keys. `+` is kept as is.
fn unescape_key(escaped: &str) -> Result<String, HTTPError> {
    let bytes = escaped.as_bytes();
    for (i, _) in escaped.match_indices('%') {
        let valid = bytes.get(i + 1..i + 3).is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(HTTPError::Authentication(format!("malformed escape in key at byte {i}")));
        }
    }
    percent_encoding::percent_decode_str(escaped)
        .decode_utf8()
        .map(|key| key.into_owned())
        .map_err(|_| HTTPError::Authentication("key is not valid UTF-8".to_owned()))
}
