use super::request_common::Params;
use crate::http_handler::common::{HTTPError, HTTPRequestMethod, RequestBody};
use crate::http_handler::cookie_store::CookieStore;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::HTTPResponseType;
use super::servers::DiscoveryResult;
use crate::http_handler::session::service_url;
use tokio_util::sync::CancellationToken;

/// The bootstrap discovery call against the entry-point host.
///
/// This request is not routed through a service directory, since it is the
/// call that produces one.
#[derive(Debug)]
pub struct ServersRequest<'a> {
    entry_point: &'a str,
}

impl<'a> ServersRequest<'a> {
    pub fn new(entry_point: &'a str) -> Self { Self { entry_point } }

    pub fn endpoint(&self) -> &'static str { "/serversforclient/BalanceServer.ashx" }

    pub fn query_params(&self) -> Params { vec![("did", "bbb".to_owned())] }

    /// Sends the discovery call and decodes the service directory.
    ///
    /// # Errors
    /// Any [`HTTPError`] of the exchange, or a decode error naming the first
    /// key of the response that could not be decoded.
    pub async fn send_request(
        &self,
        client: &HTTPClient,
        cookies: &mut CookieStore,
        cancel: &CancellationToken,
    ) -> Result<DiscoveryResult, HTTPError> {
        let base = format!("http://{}:{}", self.entry_point, client.config().discovery_port);
        let url = service_url(&base, self.endpoint(), self.query_params())?;
        let body = client.execute(cookies, cancel, HTTPRequestMethod::Get, url, &RequestBody::Empty).await?;
        Ok(DiscoveryResult::read_response(&body)?)
    }
}
