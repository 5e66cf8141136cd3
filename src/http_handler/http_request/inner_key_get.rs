use super::request_common::{HTTPRequestType, NoBodyHTTPRequestType, Params};
use crate::http_handler::common::HTTPRequestMethod;
use super::inner_key::InnerKeyResponse;
use crate::http_handler::session::{Session, WEBCLIENT_SERVICE};

/// Exchanges credentials for a session key on the webclient service.
#[derive(Debug)]
pub struct InnerKeyRequest {
    username: String,
    password: String,
}

impl InnerKeyRequest {
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.to_owned(), password: password.to_owned() }
    }
}

impl NoBodyHTTPRequestType for InnerKeyRequest {}

impl HTTPRequestType for InnerKeyRequest {
    type Response = InnerKeyResponse;
    fn service(&self) -> &'static str { WEBCLIENT_SERVICE }
    fn endpoint(&self) -> &'static str { "/api/v1/inner/key" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query_params(&self, _session: &Session) -> Params {
        vec![("username", self.username.clone()), ("password", self.password.clone())]
    }
}
