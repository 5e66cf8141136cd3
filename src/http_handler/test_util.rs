use super::http_client::{HTTPClient, HTTPClientConfig};
use super::service_directory::{ServiceDescriptor, ServiceDirectory, WILDCARD_ADDRESS};
use super::session::Session;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub(crate) const ENTRY_POINT: &str = "127.0.0.1";

/// A mock server playing the balance server and every service at once.
pub(crate) struct MockPlatform {
    pub(crate) server: MockServer,
}

impl MockPlatform {
    pub(crate) async fn start() -> Self { Self { server: MockServer::start().await } }

    pub(crate) fn port(&self) -> u16 { self.server.address().port() }

    pub(crate) fn client(&self) -> HTTPClient {
        HTTPClient::new(HTTPClientConfig { discovery_port: self.port(), timeout: None }).unwrap()
    }

    /// Discovery body announcing `services`, all on the entry point.
    pub(crate) fn discovery_body(&self, services: &[&str]) -> Value {
        let mut body = json!({"version": "7.2.1", "serverdate": "2024-05-01 12:00:00", "upgrade": 0});
        for service in services {
            body[*service] = json!({"ip": WILDCARD_ADDRESS, "port": self.port(), "enable": 1});
        }
        body
    }

    pub(crate) async fn mount_discovery(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/serversforclient/BalanceServer.ashx"))
            .and(query_param("did", "bbb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub(crate) async fn mount_key(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/api/v1/inner/key"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// A session whose services all point at the mock server, built
    /// without network traffic.
    pub(crate) fn session(&self, key: &str) -> Session {
        let directory: ServiceDirectory = ["webclient", "wcms", "addrdata"]
            .into_iter()
            .map(|name| (name.to_owned(), ServiceDescriptor::plain(WILDCARD_ADDRESS, self.port())))
            .collect();
        Session::from_parts(self.client(), ENTRY_POINT, directory, key.to_owned())
    }

    pub(crate) async fn received(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
